//! Seeded random task-list generation.
//!
//! Produces reproducible workloads for demos, property checks and
//! benchmarks. The same seed and options always yield the same tasks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::Task;

/// Builder for random task lists named `T1..Tn`.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    task_count: usize,
    arrival: RangeInclusive<i64>,
    burst: RangeInclusive<i64>,
    priority: RangeInclusive<i64>,
}

impl WorkloadGenerator {
    /// Creates a generator with 10 tasks, arrivals in 0..=10, bursts in
    /// 1..=10 and priorities in 1..=5.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            task_count: 10,
            arrival: 0..=10,
            burst: 1..=10,
            priority: 1..=5,
        }
    }

    /// Sets the number of tasks.
    pub fn with_task_count(mut self, n: usize) -> Self {
        self.task_count = n;
        self
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrival = range;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.burst = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.priority = range;
        self
    }

    /// Generates the task list.
    ///
    /// An empty range collapses to its start value.
    pub fn generate(&self) -> Vec<Task> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.task_count)
            .map(|i| {
                Task::new(format!("T{i}"))
                    .with_arrival(sample(&mut rng, &self.arrival))
                    .with_burst(sample(&mut rng, &self.burst))
                    .with_priority(sample(&mut rng, &self.priority))
            })
            .collect()
    }
}

fn sample<R: Rng>(rng: &mut R, range: &RangeInclusive<i64>) -> i64 {
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}
