//! Dispatching rules and rule engine for task ordering.
//!
//! The non-preemptive algorithms differ only in the order in which they
//! hand tasks to the CPU. That order is expressed as a chain of
//! dispatching rules evaluated by a [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use u_cpu_sched::dispatching::{rules, RuleEngine};
//! use u_cpu_sched::models::make_task;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ZeroArrivalFirst)
//!     .with_rule(rules::HighestPriority)
//!     .with_rule(rules::ArrivalOrder);
//!
//! let tasks = vec![make_task("A", 0, 4, 2), make_task("B", 0, 2, 5), make_task("C", 1, 3, 1)];
//! assert_eq!(engine.sort_indices(&tasks), vec![1, 0, 2]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A dispatching rule that scores a task for ordering.
///
/// # Score Convention
/// **Lower score = earlier dispatch.** Rules that favour large attribute
/// values (such as priority) negate them.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO", "SPT").
    fn name(&self) -> &'static str;

    /// Scores a task.
    fn evaluate(&self, task: &Task) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
