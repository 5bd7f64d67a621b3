//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Time-based**: FIFO (arrival order), SPT (shortest burst)
//! - **Priority**: ZERO-ARRIVAL, PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for tasks dispatched earlier.

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

// ======================== Time-based rules ========================

/// First In, First Out.
///
/// Orders tasks by arrival time. Basis of FCFS.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl DispatchingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Shortest Processing Time.
///
/// Orders tasks by burst time. Basis of SJF. Minimizes mean completion
/// time on a single CPU.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

// ======================== Priority rules ========================

/// Groups tasks present at t=0 ahead of every later arrival.
///
/// Scores 0 for `arrival_time == 0` and 1 otherwise, regardless of priority.
#[derive(Debug, Clone, Copy)]
pub struct ZeroArrivalFirst;

impl DispatchingRule for ZeroArrivalFirst {
    fn name(&self) -> &'static str {
        "ZERO-ARRIVAL"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        if task.arrives_at_zero() {
            0
        } else {
            1
        }
    }

    fn description(&self) -> &'static str {
        "Zero Arrival First"
    }
}

/// Highest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        // i64::MIN has no negation; it is still the lowest priority.
        task.priority.checked_neg().unwrap_or(i64::MAX)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}
