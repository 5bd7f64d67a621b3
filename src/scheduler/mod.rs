//! CPU schedulers and KPI evaluation.
//!
//! # Algorithms
//!
//! - `SequenceScheduler`: non-preemptive, rule-ordered (FCFS, SJF, Priority).
//! - `RoundRobinScheduler`: preemptive time slicing with a fixed quantum.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, completion, turnaround and waiting times.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod round_robin;
mod sequence;

pub use kpi::ScheduleKpi;
pub use round_robin::RoundRobinScheduler;
pub use sequence::SequenceScheduler;

use crate::error::{Result, SchedulerError};

/// Advances the simulated clock by `by` ticks on behalf of `task`.
fn advance_clock(clock: i64, by: i64, task: &str) -> Result<i64> {
    clock.checked_add(by).ok_or_else(|| {
        SchedulerError::InvalidArgument(format!(
            "completion time of task '{task}' overflows the clock"
        ))
    })
}
