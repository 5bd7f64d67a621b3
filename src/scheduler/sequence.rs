//! Non-preemptive sequence scheduler.
//!
//! # Algorithm
//!
//! 1. Order tasks with the configured rule engine (stable).
//! 2. Starting from t=0, run each task to completion in that order,
//!    advancing the clock by its burst time.
//!
//! The clock never waits for a task's arrival; arrival time only
//! influences the order through the rules.
//!
//! # Complexity
//! O(n log n) where n = tasks.

use log::debug;

use super::advance_clock;
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{Schedule, ScheduleEntry, Task};

/// Rule-ordered, run-to-completion scheduler.
///
/// Backs FCFS, SJF and Priority scheduling.
#[derive(Debug, Clone)]
pub struct SequenceScheduler {
    name: &'static str,
    rule_engine: RuleEngine,
}

impl SequenceScheduler {
    /// Creates a scheduler with a custom rule engine.
    pub fn new(name: &'static str, rule_engine: RuleEngine) -> Self {
        Self { name, rule_engine }
    }

    /// First-Come-First-Served: ascending arrival time.
    pub fn fcfs() -> Self {
        Self::new("FCFS", RuleEngine::new().with_rule(rules::ArrivalOrder))
    }

    /// Shortest-Job-First: ascending burst time.
    pub fn sjf() -> Self {
        Self::new("SJF", RuleEngine::new().with_rule(rules::ShortestBurst))
    }

    /// Priority: tasks at t=0 first, then descending priority, then
    /// ascending arrival time.
    pub fn priority() -> Self {
        Self::new(
            "Priority",
            RuleEngine::new()
                .with_rule(rules::ZeroArrivalFirst)
                .with_rule(rules::HighestPriority)
                .with_rule(rules::ArrivalOrder),
        )
    }

    /// Scheduler name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rule engine determining dispatch order.
    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }

    /// Builds the schedule for `tasks`.
    ///
    /// # Errors
    /// `InvalidArgument` if the clock would overflow `i64`.
    pub fn schedule(&self, tasks: &[Task]) -> Result<Schedule> {
        let order = self.rule_engine.sort_indices(tasks);
        debug!("{}: dispatch order {:?}", self.name, order);

        let mut schedule = Schedule::new();
        let mut clock: i64 = 0;
        for idx in order {
            let task = &tasks[idx];
            clock = advance_clock(clock, task.burst_time, &task.name)?;
            schedule.push(ScheduleEntry::new(task.name.clone(), clock, idx));
        }
        Ok(schedule)
    }
}
