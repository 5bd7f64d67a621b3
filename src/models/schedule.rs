//! Schedule (solution) model.
//!
//! A schedule lists tasks in the order they finish on the simulated CPU,
//! each paired with the clock value at completion.

use serde::{Deserialize, Serialize};

/// One completed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Completed task name.
    pub task_name: String,
    /// Clock value when the task (or its final slice) finished.
    pub completion_time: i64,
    /// Position of the task in the input list.
    pub task_index: usize,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(task_name: impl Into<String>, completion_time: i64, task_index: usize) -> Self {
        Self {
            task_name: task_name.into(),
            completion_time,
            task_index,
        }
    }
}

/// A complete schedule in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Entries, ordered by completion.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed task.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no task was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in completion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    /// Completion time of the last entry (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.completion_time).unwrap_or(0)
    }

    /// Completion time of the task at `task_index` in the input list.
    pub fn completion_time_of(&self, task_index: usize) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.task_index == task_index)
            .map(|e| e.completion_time)
    }

    /// `(task_name, completion_time)` pairs in completion order.
    pub fn pairs(&self) -> Vec<(&str, i64)> {
        self.entries
            .iter()
            .map(|e| (e.task_name.as_str(), e.completion_time))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
