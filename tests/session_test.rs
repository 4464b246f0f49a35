//! End-to-end tests for the cash-dispenser CLI.
//!
//! Each test runs the real binary in its own temporary working directory,
//! seeding `data.json` up front where determinism matters, and scripts the
//! session over standard input. End-of-input terminates the session cleanly,
//! so a successful run exits with status 0.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Writes a store file holding the given (face value, count) stacks.
fn seed_store(dir: &Path, stacks: &[(u32, u32)]) {
    let records: Vec<String> = stacks
        .iter()
        .map(|(face, count)| format!(r#"{{"denomination": {}, "count": {}}}"#, face, count))
        .collect();
    fs::write(
        dir.join("data.json"),
        format!("[{}]", records.join(", ")),
    )
    .unwrap();
}

fn dispenser_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cash-dispenser").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_state_line_reports_count_and_value() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), &[(5000, 2), (100, 3)]);

    dispenser_in(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The machine holds 5 banknotes worth 10300 u in total.",
        ));
}

#[test]
fn test_successful_dispensation_prints_plan_and_courtesy() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), &[(5000, 1), (1000, 2), (500, 1), (100, 3)]);

    dispenser_in(&dir)
        .write_stdin("6800\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1×5000 = 5000 u"))
        .stdout(predicate::str::contains("1×1000 = 1000 u"))
        .stdout(predicate::str::contains("1×500 = 500 u"))
        .stdout(predicate::str::contains("3×100 = 300 u"))
        .stdout(predicate::str::contains("Thank you, come again!"));
}

#[test]
fn test_dispensation_is_persisted() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), &[(5000, 1), (1000, 2), (500, 1), (100, 3)]);

    dispenser_in(&dir).write_stdin("6800\n").assert().success();

    // A fresh session sees the decremented inventory: one 1000 note left.
    dispenser_in(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The machine holds 1 banknotes worth 1000 u in total.",
        ));
}

#[test]
fn test_insufficient_funds_is_reported_and_not_persisted() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), &[(100, 3)]);
    let before = fs::read_to_string(dir.path().join("data.json")).unwrap();

    dispenser_in(&dir)
        .write_stdin("500\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: not enough funds"));

    let after = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_greedy_failure_despite_sufficient_total() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), &[(500, 1)]);

    dispenser_in(&dir)
        .write_stdin("300\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: unable to assemble the requested amount",
        ));
}

#[test]
fn test_non_positive_input_reprompts_without_dispensing() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), &[(100, 5)]);

    dispenser_in(&dir)
        .write_stdin("0\n-50\nabc\n200\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The amount must be a positive number, try again:")
                .count(3),
        )
        .stdout(predicate::str::contains("2×100 = 200 u"));
}

#[test]
fn test_session_serves_multiple_requests() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), &[(1000, 2), (500, 2)]);

    dispenser_in(&dir)
        .write_stdin("1500\n1500\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you, come again!").count(2))
        .stdout(predicate::str::contains("Error: not enough funds").count(0));

    dispenser_in(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The machine holds 0 banknotes worth 0 u in total.",
        ));
}

#[test]
fn test_missing_store_is_created_with_stocked_inventory() {
    let dir = TempDir::new().unwrap();

    dispenser_in(&dir).write_stdin("").assert().success();

    let contents = fs::read_to_string(dir.path().join("data.json")).unwrap();
    let stacks: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let stacks = stacks.as_array().unwrap();
    assert_eq!(stacks.len(), 8);
    for stack in stacks {
        let count = stack["count"].as_u64().unwrap();
        assert!((1..=49).contains(&count));
    }
}

#[test]
fn test_corrupt_store_fails_without_overwriting() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), "{{ not valid json").unwrap();

    dispenser_in(&dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt inventory store"));

    let contents = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert_eq!(contents, "{{ not valid json");
}

#[test]
fn test_unknown_denomination_in_store_is_fatal() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), &[(25, 4)]);

    dispenser_in(&dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt inventory store"));
}
