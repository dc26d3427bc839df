//! Integration tests for the `vpl-cli solve` command

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_solve_help() {
    let mut cmd = Command::cargo_bin("vpl-cli").unwrap();
    cmd.args(["solve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("budget"))
        .stdout(predicate::str::contains("rows"));
}

#[test]
fn test_solve_reference_scenario_writes_reports() {
    let out_dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("vpl-cli").unwrap();
    cmd.args(["solve", "--out-dir", out_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vertiport Layout Summary"))
        .stdout(predicate::str::contains("Throughput"))
        .stdout(predicate::str::contains("Reports written"));

    let summary = std::fs::read_to_string(out_dir.path().join("summary.csv")).unwrap();
    assert!(summary.contains("Total Operations"));
    assert!(summary.contains("Budget Limit"));
    assert!(out_dir.path().join("layout.csv").exists());
    assert!(out_dir.path().join("solution.json").exists());
}

#[test]
fn test_solve_degenerate_grid() {
    let mut cmd = Command::cargo_bin("vpl-cli").unwrap();
    cmd.args(["solve", "--rows", "1", "--cols", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Throughput: 0"));
}

#[test]
fn test_solve_rejects_zero_budget() {
    let mut cmd = Command::cargo_bin("vpl-cli").unwrap();
    cmd.args(["solve", "--budget", "0"]).assert().failure();
}
