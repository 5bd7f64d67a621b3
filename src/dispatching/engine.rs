//! Rule engine for multi-level dispatching.
//!
//! Composes dispatching rules into a lexicographic sort key. Tasks that
//! tie on every rule keep their input order.

use std::sync::Arc;

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

/// A composable rule engine for task ordering.
///
/// Rules are applied in sequence; a later rule is consulted only when
/// every earlier rule ties.
///
/// # Example
/// ```
/// use u_cpu_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_rule(rules::ArrivalOrder);
/// assert_eq!(engine.rule_names(), vec!["SPT", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts tasks into dispatch order.
    ///
    /// Returns indices into the original task slice. The slice itself is
    /// left untouched.
    pub fn sort_indices(&self, tasks: &[Task]) -> Vec<usize> {
        if tasks.is_empty() {
            return Vec::new();
        }

        // Scores are computed once per task rather than once per comparison.
        let keys: Vec<Vec<RuleScore>> = tasks.iter().map(|t| self.evaluate(t)).collect();

        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| keys[a].cmp(&keys[b]));

        indices
    }

    /// Evaluates a single task and returns the score from each rule.
    pub fn evaluate(&self, task: &Task) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(task)).collect()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
