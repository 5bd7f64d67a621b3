//! CLI argument parsing for cpu-sched

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cpu-sched")]
#[command(author, version, about = "CPU scheduling simulator", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Task file, one `name, arrival, burst, priority` record per line (stdin if omitted)
    #[arg(short, long, conflicts_with = "random")]
    pub tasks: Option<PathBuf>,

    /// Generate N random tasks instead of reading input
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Algorithm: FCFS, SJF, Priority or "Round Robin" (aliases: rr, round-robin)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Round Robin time quantum
    #[arg(short, long, allow_hyphen_values = true)]
    pub quantum: Option<i64>,

    /// Directory for the timestamped report file
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Do not write a report file
    #[arg(long)]
    pub no_save: bool,

    /// Print the schedule as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Print schedule KPIs after the report
    #[arg(long)]
    pub kpi: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_robin_args() {
        let cli = Cli::try_parse_from([
            "cpu-sched",
            "--tasks",
            "tasks.txt",
            "-a",
            "Round Robin",
            "-q",
            "2",
            "--no-save",
        ])
        .unwrap();
        assert_eq!(cli.tasks, Some(PathBuf::from("tasks.txt")));
        assert_eq!(cli.algorithm.as_deref(), Some("Round Robin"));
        assert_eq!(cli.quantum, Some(2));
        assert!(cli.no_save);
        assert!(!cli.json);
    }

    #[test]
    fn test_negative_quantum_parses() {
        let cli = Cli::try_parse_from(["cpu-sched", "-q", "-1"]).unwrap();
        assert_eq!(cli.quantum, Some(-1));
    }

    #[test]
    fn test_tasks_conflicts_with_random() {
        assert!(Cli::try_parse_from(["cpu-sched", "--tasks", "t.txt", "--random", "5"]).is_err());
    }
}
