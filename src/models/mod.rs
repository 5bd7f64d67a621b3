//! Scheduling domain models.
//!
//! Provides the data types shared by every algorithm: the input `Task`
//! and the output `Schedule`.
//!
//! # Domain Mappings
//!
//! | u-cpu-sched | Operating System | Batch Queue |
//! |-------------|------------------|-------------|
//! | Task | Process / Thread | Job |
//! | burst_time | CPU Burst | Runtime |
//! | Schedule | Dispatch Trace | Completion Log |

mod schedule;
mod task;

pub use schedule::{Schedule, ScheduleEntry};
pub use task::{make_task, Task};
