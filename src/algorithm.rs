//! Algorithm selection and the single scheduling entry point.
//!
//! `AlgorithmKind` is the closed set of selectors accepted at the input
//! boundary; `Algorithm` pairs a kind with its parameters and runs it.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::{Schedule, Task};
use crate::scheduler::{RoundRobinScheduler, SequenceScheduler};

/// Selector for one of the four scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "SJF")]
    Sjf,
    #[serde(rename = "Priority")]
    Priority,
    #[serde(rename = "Round Robin")]
    RoundRobin,
}

impl AlgorithmKind {
    /// All selectors, in menu order.
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Sjf,
        AlgorithmKind::Priority,
        AlgorithmKind::RoundRobin,
    ];

    /// Literal identifier used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "FCFS",
            AlgorithmKind::Sjf => "SJF",
            AlgorithmKind::Priority => "Priority",
            AlgorithmKind::RoundRobin => "Round Robin",
        }
    }

    /// Whether the algorithm needs a time quantum.
    pub fn needs_quantum(&self) -> bool {
        matches!(self, AlgorithmKind::RoundRobin)
    }

    /// Builds a runnable algorithm.
    ///
    /// The quantum is ignored by the non-preemptive algorithms.
    ///
    /// # Errors
    /// `InvalidArgument` if Round Robin is selected without a quantum.
    pub fn with_quantum(self, quantum: Option<i64>) -> Result<Algorithm> {
        match self {
            AlgorithmKind::Fcfs => Ok(Algorithm::Fcfs),
            AlgorithmKind::Sjf => Ok(Algorithm::Sjf),
            AlgorithmKind::Priority => Ok(Algorithm::Priority),
            AlgorithmKind::RoundRobin => match quantum {
                Some(quantum) => Ok(Algorithm::RoundRobin { quantum }),
                None => Err(SchedulerError::InvalidArgument(
                    "Round Robin requires a quantum".into(),
                )),
            },
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "FCFS" | "fcfs" => Ok(AlgorithmKind::Fcfs),
            "SJF" | "sjf" => Ok(AlgorithmKind::Sjf),
            "Priority" | "priority" => Ok(AlgorithmKind::Priority),
            "Round Robin" | "round-robin" | "rr" => Ok(AlgorithmKind::RoundRobin),
            other => Err(SchedulerError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// A fully parameterized scheduling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin { quantum: i64 },
}

impl Algorithm {
    /// The selector this algorithm was built from.
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Fcfs => AlgorithmKind::Fcfs,
            Algorithm::Sjf => AlgorithmKind::Sjf,
            Algorithm::Priority => AlgorithmKind::Priority,
            Algorithm::RoundRobin { .. } => AlgorithmKind::RoundRobin,
        }
    }

    /// Schedules `tasks`.
    ///
    /// An empty task list yields an empty schedule for every algorithm.
    ///
    /// # Errors
    /// `InvalidArgument` for a Round Robin quantum `<= 0`, or when a
    /// completion time would overflow the clock. No schedule is
    /// computed in that case.
    pub fn run(&self, tasks: &[Task]) -> Result<Schedule> {
        debug!("Scheduling {} task(s) with {}", tasks.len(), self.kind());
        match *self {
            Algorithm::Fcfs => SequenceScheduler::fcfs().schedule(tasks),
            Algorithm::Sjf => SequenceScheduler::sjf().schedule(tasks),
            Algorithm::Priority => SequenceScheduler::priority().schedule(tasks),
            Algorithm::RoundRobin { quantum } => RoundRobinScheduler::new(quantum)?.schedule(tasks),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind(), f)
    }
}

/// Schedules `tasks` with `algorithm`.
pub fn run(tasks: &[Task], algorithm: Algorithm) -> Result<Schedule> {
    algorithm.run(tasks)
}
