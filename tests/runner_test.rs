/*!
 * Runner Tests
 * End-to-end import, schedule and export through real files
 */

use cpu_sched_sim::workload::Truncation;
use cpu_sched_sim::{execute, Algorithm, SimError, SimulationConfig, WorkloadError};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("in.txt");
    fs::write(&path, contents).unwrap();
    path
}

fn rr(quantum: u64) -> Algorithm {
    Algorithm::round_robin(quantum).unwrap()
}

#[test]
fn test_npp_run_writes_output_and_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1 0 5 2\n2 1 3 1\n3 2 8 3\n");
    let output = dir.path().join("out.txt");

    let report = execute(&SimulationConfig::new(&input, &output, Algorithm::Npp)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "1 0 5 0\n2 1 8 4\n3 2 16 6\n");
    let summary = report.summary.unwrap();
    assert_eq!(summary.average_waiting, 3);
    assert_eq!(summary.average_turnaround, 8);
    assert_eq!(report.truncated, None);
}

#[test]
fn test_rr_run_writes_completion_order() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1 0 5 0\n2 1 3 0\n");
    let output = dir.path().join("out.txt");

    let report = execute(&SimulationConfig::new(&input, &output, rr(4))).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "2 1 7 3\n1 0 8 3\n");
    let summary = report.summary.unwrap();
    assert_eq!(summary.average_waiting, 3);
    assert_eq!(summary.average_turnaround, 7);
}

#[test]
fn test_limit_restricts_import() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1 0 5 2\n2 1 3 1\n3 2 8 3\n");
    let output = dir.path().join("out.txt");

    let config = SimulationConfig::new(&input, &output, Algorithm::Npp).with_limit(1);
    let report = execute(&config).unwrap();

    assert_eq!(report.outcome.completed.pids(), vec![1]);
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 0 5 0\n");
}

#[test]
fn test_empty_input_writes_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "");
    let output = dir.path().join("out.txt");

    let report = execute(&SimulationConfig::new(&input, &output, rr(2))).unwrap();

    assert!(report.summary.is_none());
    assert!(report.outcome.completed.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_malformed_input_schedules_the_prefix() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1 0 2 0\n2 1 oops 0\n3 2 2 0\n");
    let output = dir.path().join("out.txt");

    let report = execute(&SimulationConfig::new(&input, &output, Algorithm::Npp)).unwrap();

    assert_eq!(report.outcome.completed.pids(), vec![1]);
    assert_eq!(
        report.truncated,
        Some(Truncation::Malformed {
            record: 1,
            token: "oops".into()
        })
    );
}

#[test]
fn test_invalid_bytes_keep_the_valid_prefix() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, b"1 0 5 2\n2 1 3 1\n3 \xff 1 0\n").unwrap();
    let output = dir.path().join("out.txt");

    let report = execute(&SimulationConfig::new(&input, &output, Algorithm::Npp)).unwrap();

    assert_eq!(report.outcome.completed.pids(), vec![1, 2]);
    assert_eq!(
        report.truncated,
        Some(Truncation::Malformed {
            record: 2,
            token: "\u{FFFD}".into()
        })
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 0 5 0\n2 1 8 4\n");
}

#[test]
fn test_out_of_range_arrival_keeps_the_valid_prefix() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1 0 2 0\n2 18446744073709551615 1 0\n");
    let output = dir.path().join("out.txt");

    let report = execute(&SimulationConfig::new(&input, &output, Algorithm::Npp)).unwrap();

    assert_eq!(report.outcome.completed.pids(), vec![1]);
    assert!(matches!(
        report.truncated,
        Some(Truncation::Malformed { record: 1, .. })
    ));
}

#[test]
fn test_missing_input_fails_without_creating_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("out.txt");

    let err = execute(&SimulationConfig::new(&input, &output, Algorithm::Npp)).unwrap_err();

    assert!(matches!(
        err,
        SimError::Workload(WorkloadError::OpenInput { ref path, .. }) if *path == input
    ));
    assert!(err.to_string().starts_with("No such input file at"));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1 0 2 0\n");
    let output = dir.path().join("missing-dir").join("out.txt");

    let err = execute(&SimulationConfig::new(&input, &output, Algorithm::Npp)).unwrap_err();

    assert!(matches!(
        err,
        SimError::Workload(WorkloadError::CreateOutput { .. })
    ));
}

#[test]
fn test_existing_output_is_truncated() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "7 0 1 0\n");
    let output = dir.path().join("out.txt");
    fs::write(&output, "stale contents\nfrom an earlier run\n").unwrap();

    execute(&SimulationConfig::new(&input, &output, Algorithm::Npp)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "7 0 1 0\n");
}

#[test]
fn test_binary_prints_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1 0 5 2\n2 1 3 1\n3 2 8 3\n");
    let output = dir.path().join("out.txt");

    let result = Command::new(env!("CARGO_BIN_EXE_sched"))
        .arg(&input)
        .arg(&output)
        .arg("NPP")
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(
        String::from_utf8(result.stdout).unwrap().trim(),
        "Average waiting time: 3 ms, average turnaround time: 8 ms"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 0 5 0\n2 1 8 4\n3 2 16 6\n");
}

#[test]
fn test_binary_rejects_rr_without_quantum() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1 0 5 2\n");
    let output = dir.path().join("out.txt");

    let result = Command::new(env!("CARGO_BIN_EXE_sched"))
        .arg(&input)
        .arg(&output)
        .arg("RR")
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn test_binary_rejects_missing_arguments() {
    let result = Command::new(env!("CARGO_BIN_EXE_sched"))
        .arg("in.txt")
        .output()
        .unwrap();

    assert!(!result.status.success());
}
