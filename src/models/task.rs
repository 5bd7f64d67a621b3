//! Task (process) model.
//!
//! A task is a single CPU burst waiting to be scheduled. It carries the
//! three attributes the classical single-CPU algorithms sort on: arrival
//! time, burst time and priority.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A task to be scheduled on the simulated CPU.
///
/// # Time Representation
/// All times are abstract integer ticks relative to t=0. The clock never
/// idles, so `arrival_time` influences ordering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task name. Duplicates are allowed and treated as distinct tasks.
    pub name: String,
    /// Tick at which the task becomes eligible.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (higher = more important).
    pub priority: i64,
}

impl Task {
    /// Creates a task with the given name, arriving at 0 with no burst.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrival_time: 0,
            burst_time: 0,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the task is eligible from the very start of the simulation.
    #[inline]
    pub fn arrives_at_zero(&self) -> bool {
        self.arrival_time == 0
    }
}

/// Shorthand for `Task::new(name).with_arrival(..).with_burst(..).with_priority(..)`.
pub fn make_task(
    name: impl Into<String>,
    arrival_time: i64,
    burst_time: i64,
    priority: i64,
) -> Task {
    Task::new(name)
        .with_arrival(arrival_time)
        .with_burst(burst_time)
        .with_priority(priority)
}
