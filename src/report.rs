//! Flat textual schedule report.
//!
//! ```text
//! Selected Algorithm: FCFS
//! Schedule Result:
//! {'task': 'A', 'time': 5}
//! {'task': 'B', 'time': 8}
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::debug;

use crate::algorithm::AlgorithmKind;
use crate::error::Result;
use crate::models::{Schedule, ScheduleEntry};

/// Line printed in place of entries when the schedule is empty.
pub const EMPTY_SCHEDULE: &str = "No tasks to schedule.";

/// Renders one entry in key-value form: `{'task': 'A', 'time': 5}`.
pub fn render_entry(entry: &ScheduleEntry) -> String {
    format!(
        "{{'task': {}, 'time': {}}}",
        quote(&entry.task_name),
        entry.completion_time
    )
}

/// Renders the full report, newline-terminated.
///
/// An empty schedule renders as the algorithm line followed by
/// [`EMPTY_SCHEDULE`], without the `Schedule Result:` header.
pub fn render(kind: &AlgorithmKind, schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Selected Algorithm: {kind}");
    if schedule.is_empty() {
        let _ = writeln!(out, "{EMPTY_SCHEDULE}");
        return out;
    }
    let _ = writeln!(out, "Schedule Result:");
    for entry in schedule {
        let _ = writeln!(out, "{}", render_entry(entry));
    }
    out
}

/// Report file name for a timestamp: `schedule_result_YYYYmmdd-HHMMSS.txt`.
pub fn timestamped_filename(timestamp: NaiveDateTime) -> String {
    format!("schedule_result_{}.txt", timestamp.format("%Y%m%d-%H%M%S"))
}

/// Writes the report into `dir` and returns the file path.
pub fn save(
    dir: &Path,
    kind: &AlgorithmKind,
    schedule: &Schedule,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(timestamped_filename(timestamp));
    fs::write(&path, render(kind, schedule))?;
    debug!("Report written to {}", path.display());
    Ok(path)
}

// Single quotes unless the name holds a single quote and no double quote.
fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Schedule {
        let mut schedule = Schedule::new();
        schedule.push(ScheduleEntry::new("A", 5, 0));
        schedule.push(ScheduleEntry::new("B", 8, 1));
        schedule
    }

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap()
    }

    #[test]
    fn test_render_report() {
        let text = render(&AlgorithmKind::Fcfs, &sample());
        assert_eq!(
            text,
            "Selected Algorithm: FCFS\n\
             Schedule Result:\n\
             {'task': 'A', 'time': 5}\n\
             {'task': 'B', 'time': 8}\n"
        );
    }

    #[test]
    fn test_render_round_robin_name() {
        let text = render(&AlgorithmKind::RoundRobin, &sample());
        assert!(text.starts_with("Selected Algorithm: Round Robin\n"));
    }

    #[test]
    fn test_render_empty() {
        let text = render(&AlgorithmKind::Sjf, &Schedule::new());
        assert_eq!(text, "Selected Algorithm: SJF\nNo tasks to schedule.\n");
        assert!(!text.contains("Schedule Result:"));
    }

    #[test]
    fn test_quote_names() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("it's"), "\"it's\"");
        assert_eq!(quote("both'\""), "'both\\'\"'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_timestamped_filename() {
        assert_eq!(
            timestamped_filename(ts()),
            "schedule_result_20240309-070501.txt"
        );
    }

    #[test]
    fn test_save_writes_report() {
        let dir = TempDir::new().unwrap();
        let path = save(dir.path(), &AlgorithmKind::Priority, &sample(), ts()).unwrap();

        assert_eq!(path, dir.path().join("schedule_result_20240309-070501.txt"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, render(&AlgorithmKind::Priority, &sample()));
    }
}
