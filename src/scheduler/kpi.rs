//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! - **Makespan**: completion time of the last task
//! - **Turnaround**: completion - arrival
//! - **Waiting**: turnaround - burst
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Task};

/// Key performance indicators for a CPU schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Completion time of the last task.
    pub makespan: i64,
    /// Sum of burst times of all scheduled tasks (saturating).
    pub total_burst: i64,
    /// Number of tasks present in the schedule.
    pub task_count: usize,
    /// Mean completion time.
    pub avg_completion_time: f64,
    /// Mean turnaround time (completion - arrival).
    pub avg_turnaround_time: f64,
    /// Mean waiting time (turnaround - burst).
    pub avg_waiting_time: f64,
    /// Largest turnaround time (saturating).
    pub max_turnaround_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the task list it was built from.
    ///
    /// Entries whose `task_index` is out of range for `tasks` are ignored.
    pub fn calculate(schedule: &Schedule, tasks: &[Task]) -> Self {
        // Sums over i64 tick values can exceed i64; accumulate in i128.
        let mut total_burst: i128 = 0;
        let mut total_completion: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut max_turnaround: i128 = 0;
        let mut counted: usize = 0;

        for entry in schedule {
            let Some(task) = tasks.get(entry.task_index) else {
                continue;
            };
            counted += 1;

            let completion = i128::from(entry.completion_time);
            let burst = i128::from(task.burst_time);
            let turnaround = completion - i128::from(task.arrival_time);
            total_burst += burst;
            total_completion += completion;
            total_turnaround += turnaround;
            total_waiting += turnaround - burst;
            max_turnaround = if counted == 1 {
                turnaround
            } else {
                max_turnaround.max(turnaround)
            };
        }

        let mean = |total: i128| {
            if counted == 0 {
                0.0
            } else {
                total as f64 / counted as f64
            }
        };

        Self {
            makespan: schedule.makespan(),
            total_burst: saturate(total_burst),
            task_count: counted,
            avg_completion_time: mean(total_completion),
            avg_turnaround_time: mean(total_turnaround),
            avg_waiting_time: mean(total_waiting),
            max_turnaround_time: saturate(max_turnaround),
        }
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}
