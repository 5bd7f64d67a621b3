//! Round Robin time-slice scheduler.
//!
//! # Algorithm
//!
//! The ready queue starts in input order. Each pass visits exactly the
//! tasks queued when it began, front to back:
//!
//! - `remaining <= quantum`: run the rest of the burst and emit the task.
//! - otherwise: run one quantum and push the task to the back of the queue.
//!
//! Passes repeat until the queue drains. Context switches are free, so
//! the final clock value equals the sum of burst times.
//!
//! # Complexity
//! O(B / q + n) slices, where B = total burst and q = quantum.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::{Result, SchedulerError};
use super::advance_clock;
use crate::models::{Schedule, ScheduleEntry, Task};

#[derive(Debug)]
struct ReadyTask<'a> {
    index: usize,
    name: &'a str,
    remaining: i64,
}

/// Preemptive time-slice scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time quantum.
    ///
    /// # Errors
    /// `InvalidArgument` if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self> {
        if quantum <= 0 {
            return Err(SchedulerError::InvalidArgument(format!(
                "Quantum must be greater than 0, got {quantum}"
            )));
        }
        Ok(Self { quantum })
    }

    /// Time quantum per slice.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Builds the schedule for `tasks`.
    ///
    /// Works on a private queue; `tasks` is never modified.
    ///
    /// # Errors
    /// `InvalidArgument` if the clock would overflow `i64`.
    pub fn schedule(&self, tasks: &[Task]) -> Result<Schedule> {
        let mut queue: VecDeque<ReadyTask<'_>> = tasks
            .iter()
            .enumerate()
            .map(|(index, t)| ReadyTask {
                index,
                name: &t.name,
                remaining: t.burst_time,
            })
            .collect();

        let mut schedule = Schedule::new();
        let mut clock: i64 = 0;
        let mut pass = 0usize;

        while !queue.is_empty() {
            pass += 1;
            let in_pass = queue.len();
            trace!("RR pass {pass}: {in_pass} task(s) ready at t={clock}");

            for _ in 0..in_pass {
                let Some(mut ready) = queue.pop_front() else {
                    break;
                };
                if ready.remaining <= self.quantum {
                    clock = advance_clock(clock, ready.remaining, ready.name)?;
                    trace!("RR {} finishes at t={clock}", ready.name);
                    schedule.push(ScheduleEntry::new(ready.name, clock, ready.index));
                } else {
                    clock = advance_clock(clock, self.quantum, ready.name)?;
                    ready.remaining -= self.quantum;
                    trace!(
                        "RR {} preempted at t={clock}, {} remaining",
                        ready.name,
                        ready.remaining
                    );
                    queue.push_back(ready);
                }
            }
        }

        debug!(
            "Round Robin (q={}): {} task(s) in {pass} pass(es), makespan {clock}",
            self.quantum,
            schedule.len()
        );
        Ok(schedule)
    }
}
