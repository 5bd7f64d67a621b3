//! End-to-end tests for the cpu-sched binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TASKS: &str = "A, 0, 5, 1\nB, 1, 3, 1\nC, 2, 1, 1\n";

fn cpu_sched(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cpu-sched").expect("binary builds");
    // Keep config discovery and report output inside the temp dir.
    cmd.current_dir(dir.path());
    cmd.env("XDG_CONFIG_HOME", dir.path());
    cmd
}

#[test]
fn test_fcfs_report_on_stdout() {
    let dir = TempDir::new().unwrap();
    cpu_sched(&dir)
        .args(["-a", "FCFS", "--no-save"])
        .write_stdin(TASKS)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Selected Algorithm: FCFS\n\
             Schedule Result:\n\
             {'task': 'A', 'time': 5}\n\
             {'task': 'B', 'time': 8}\n\
             {'task': 'C', 'time': 9}\n",
        ));
}

#[test]
fn test_round_robin_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.txt");
    std::fs::write(&path, "A, 0, 5, 0\nB, 0, 3, 0\n").unwrap();

    cpu_sched(&dir)
        .args(["-a", "Round Robin", "-q", "2", "--no-save", "--tasks"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{'task': 'B', 'time': 7}\n{'task': 'A', 'time': 8}\n",
        ));
}

#[test]
fn test_report_file_written() {
    let dir = TempDir::new().unwrap();
    cpu_sched(&dir)
        .args(["-a", "sjf", "-o", "reports"])
        .write_stdin(TASKS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Results have been saved to"));

    let reports: Vec<_> = std::fs::read_dir(dir.path().join("reports"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(reports.len(), 1);

    let name = reports[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("schedule_result_"));
    assert!(name.ends_with(".txt"));

    let content = std::fs::read_to_string(&reports[0]).unwrap();
    assert!(content.starts_with("Selected Algorithm: SJF\nSchedule Result:\n"));
    assert!(content.contains("{'task': 'C', 'time': 1}"));
}

#[test]
fn test_invalid_quantum_fails() {
    let dir = TempDir::new().unwrap();
    cpu_sched(&dir)
        .args(["-a", "rr", "-q", "0", "--no-save"])
        .write_stdin(TASKS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantum must be greater than 0"));
}

#[test]
fn test_unknown_algorithm_fails() {
    let dir = TempDir::new().unwrap();
    cpu_sched(&dir)
        .args(["-a", "Lottery", "--no-save"])
        .write_stdin(TASKS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm: Lottery"));
}

#[test]
fn test_malformed_input_fails() {
    let dir = TempDir::new().unwrap();
    cpu_sched(&dir)
        .args(["--no-save"])
        .write_stdin("A, 0, 5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid task format"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let output = cpu_sched(&dir)
        .args(["-a", "Priority", "--json", "--no-save"])
        .write_stdin("A, 0, 4, 2\nB, 0, 2, 5\nC, 1, 3, 1\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = value["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["task_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["B", "A", "C"]);
}

#[test]
fn test_config_default_algorithm() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cpu-sched.yml"),
        "default_algorithm: Round Robin\nquantum: 2\nsave_report: false\n",
    )
    .unwrap();

    cpu_sched(&dir)
        .write_stdin("A, 0, 5, 0\nB, 0, 3, 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected Algorithm: Round Robin"))
        .stdout(predicate::str::contains("{'task': 'A', 'time': 8}"))
        .stdout(predicate::str::contains("saved").not());
}

#[test]
fn test_random_workload_with_kpi() {
    let dir = TempDir::new().unwrap();
    cpu_sched(&dir)
        .args(["--random", "5", "--seed", "3", "--kpi", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Makespan:"))
        .stdout(predicate::str::contains("Average waiting time:"));
}
