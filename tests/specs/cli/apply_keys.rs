// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use similar_asserts::assert_eq;

const KEYS: &str = r#"{"M1-DB-1": "PX-1", "M1-BL-1": "PX-2"}"#;

#[test]
fn apply_keys_prints_annotated_plan() {
    let temp = plan_dir();
    write_file(temp.path(), "keys.json", KEYS);
    let stdout = stdout_of(tix_in(temp.path()).args(["apply-keys", "plan.md", "-m", "keys.json"]));
    assert!(stdout.contains("**Blocks:** M1-BL-1\n**Jira Key:** PX-1\n"));
    assert!(stdout.contains("**Blocked By:** M1-DB-1\n**Jira Key:** PX-2\n"));
    // Printing leaves the file alone.
    let on_disk = std::fs::read_to_string(temp.path().join("plan.md")).unwrap();
    assert_eq!(on_disk, PLAN);
}

#[test]
fn apply_keys_write_is_idempotent() {
    let temp = plan_dir();
    write_file(temp.path(), "keys.json", KEYS);
    tix_in(temp.path())
        .args(["apply-keys", "plan.md", "-m", "keys.json", "--write"])
        .assert()
        .success()
        .stdout("Updated plan.md\n");
    let first = std::fs::read_to_string(temp.path().join("plan.md")).unwrap();

    tix_in(temp.path())
        .args(["apply-keys", "plan.md", "-m", "keys.json", "--write"])
        .assert()
        .success()
        .stdout("plan.md is up to date\n");
    let second = std::fs::read_to_string(temp.path().join("plan.md")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn apply_keys_then_parse_sees_external_keys() {
    let temp = plan_dir();
    write_file(temp.path(), "keys.json", KEYS);
    tix_in(temp.path())
        .args(["apply-keys", "plan.md", "-m", "keys.json", "-w"])
        .assert()
        .success();
    tix_in(temp.path())
        .args(["parse", "plan.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jira Key: PX-1"))
        .stdout(predicate::str::contains("Jira Key: PX-2"));
}

#[test]
fn apply_keys_replaces_existing_value() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "plan.md",
        "## M1-DB-1: Create schema\n\nJira Key: OLD-9\n",
    );
    write_file(temp.path(), "keys.json", KEYS);
    tix_in(temp.path())
        .args(["apply-keys", "plan.md", "-m", "keys.json"])
        .assert()
        .success()
        .stdout("## M1-DB-1: Create schema\n\nJira Key: PX-1\n");
}

#[test]
fn apply_keys_csv_adds_column() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "tickets.csv",
        "Key,Summary\nM1-DB-1,Create schema\nM1-XX-1,Unmapped\n",
    );
    write_file(temp.path(), "keys.json", KEYS);
    tix_in(temp.path())
        .args(["apply-keys", "tickets.csv", "-m", "keys.json"])
        .assert()
        .success()
        .stdout("Key,Jira Key,Summary\nM1-DB-1,PX-1,Create schema\nM1-XX-1,,Unmapped\n");
}

#[test]
fn apply_keys_write_to_stdin_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "keys.json", KEYS);
    tix_in(temp.path())
        .args(["apply-keys", "-", "-m", "keys.json", "--write"])
        .write_stdin("## M1-DB-1: x\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: cannot write to standard input"));
}
