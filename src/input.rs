//! Textual task record parsing.
//!
//! One task per line, four comma-separated fields:
//!
//! ```text
//! name, arrival_time, burst_time, priority
//! ```
//!
//! Fields are trimmed. Blank lines are skipped. Numeric fields must be
//! integers.

use crate::error::{MalformedReason, Result, SchedulerError};
use crate::models::Task;

const FIELD_COUNT: usize = 4;

/// Parses a single record. `line` is the 1-based line number for errors.
pub fn parse_record(record: &str, line: usize) -> Result<Task> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(malformed(
            line,
            MalformedReason::FieldCount(fields.len()),
            record,
        ));
    }

    let int = |value: &str, field: &'static str| -> Result<i64> {
        value
            .parse::<i64>()
            .map_err(|_| malformed(line, MalformedReason::NotAnInteger { field }, record))
    };

    Ok(Task {
        name: fields[0].to_string(),
        arrival_time: int(fields[1], "arrival_time")?,
        burst_time: int(fields[2], "burst_time")?,
        priority: int(fields[3], "priority")?,
    })
}

/// Parses a block of records, one per line.
///
/// Stops at the first malformed record; no partial list is returned.
pub fn parse_tasks(text: &str) -> Result<Vec<Task>> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| parse_record(l, i + 1))
        .collect()
}

fn malformed(line: usize, reason: MalformedReason, record: &str) -> SchedulerError {
    SchedulerError::MalformedInput {
        line,
        reason,
        record: record.to_string(),
    }
}
