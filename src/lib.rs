//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Turns a static list of tasks (arrival time, burst time, priority) into a
//! deterministic completion schedule with one of four classical algorithms:
//! FCFS, SJF, Priority and Round Robin.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `ScheduleEntry`, `Schedule`
//! - **`dispatching`**: Ordering rules and the `RuleEngine` composing them
//! - **`scheduler`**: `SequenceScheduler`, `RoundRobinScheduler`, `ScheduleKpi`
//! - **`algorithm`**: Closed `Algorithm` selector and the `run` entry point
//! - **`input`** / **`report`**: Textual task records and schedule reports
//! - **`validation`**: Advisory task-list checks
//! - **`workload`**: Seeded random task lists
//!
//! # Example
//!
//! ```
//! use u_cpu_sched::{run, Algorithm};
//! use u_cpu_sched::models::make_task;
//!
//! let tasks = vec![make_task("A", 0, 5, 0), make_task("B", 0, 3, 0)];
//! let schedule = run(&tasks, Algorithm::RoundRobin { quantum: 2 }).unwrap();
//! assert_eq!(schedule.pairs(), vec![("B", 7), ("A", 8)]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use algorithm::{run, Algorithm, AlgorithmKind};
pub use error::{MalformedReason, Result, SchedulerError};
