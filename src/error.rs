//! Error types for scheduling and its input/output surfaces.

use std::fmt;
use thiserror::Error;

/// Why a task record could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Record did not have exactly four comma-separated fields.
    FieldCount(usize),
    /// A numeric field was not an integer.
    NotAnInteger {
        /// Field name (`arrival_time`, `burst_time` or `priority`).
        field: &'static str,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::FieldCount(n) => {
                write!(f, "invalid task format: expected 4 fields, found {n}")
            }
            MalformedReason::NotAnInteger { field } => {
                write!(f, "invalid task data type: {field} is not an integer")
            }
        }
    }
}

/// Errors produced by the scheduler and its collaborators.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed input on line {line}: {reason} ({record:?})")]
    MalformedInput {
        line: usize,
        reason: MalformedReason,
        record: String,
    },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedulerError {
    /// Whether the error comes from engine arguments rather than input text.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SchedulerError::InvalidArgument(_))
    }

    /// Line number for malformed input errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            SchedulerError::MalformedInput { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SchedulerError>;
