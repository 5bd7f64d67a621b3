//! Input validation for task lists.
//!
//! Checks task attributes before scheduling. Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate task names
//! - Empty task names
//!
//! The schedulers accept all of these (a zero burst completes instantly,
//! duplicates are distinct tasks), so the findings are advisory.

use crate::models::Task;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Index of the offending task in the input list.
    pub task_index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time below zero.
    NegativeArrival,
    /// Burst time of zero or less.
    NonPositiveBurst,
    /// Two tasks share the same name.
    DuplicateName,
    /// Task name is empty.
    EmptyName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, task_index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            task_index,
            message: message.into(),
        }
    }
}

/// Validates a task list.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (i, task) in tasks.iter().enumerate() {
        if task.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                i,
                format!("Task #{} has an empty name", i + 1),
            ));
        } else if !names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                i,
                format!("Duplicate task name: {}", task.name),
            ));
        }

        if task.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                i,
                format!(
                    "Task '{}' has negative arrival time {}",
                    task.name, task.arrival_time
                ),
            ));
        }

        if task.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                i,
                format!(
                    "Task '{}' has non-positive burst time {}",
                    task.name, task.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_task;

    #[test]
    fn test_valid_input() {
        let tasks = vec![make_task("A", 0, 5, 1), make_task("B", 1, 3, 1)];
        assert!(validate_tasks(&tasks).is_ok());
        assert!(validate_tasks(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let tasks = vec![make_task("A", 0, 5, 1), make_task("A", 1, 3, 1)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateName);
        assert_eq!(errors[0].task_index, 1);
    }

    #[test]
    fn test_non_positive_burst() {
        let tasks = vec![make_task("A", 0, 0, 1), make_task("B", 0, -3, 1)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let tasks = vec![make_task("", -1, 0, 0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::EmptyName,
                ValidationErrorKind::NegativeArrival,
                ValidationErrorKind::NonPositiveBurst,
            ]
        );
    }
}
