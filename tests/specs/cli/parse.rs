// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn parse_lists_tickets() {
    let temp = plan_dir();
    tix_in(temp.path())
        .args(["parse", "plan.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("M1-DB-1 [Story] Create schema"))
        .stdout(predicate::str::contains("    Labels: db, backend"))
        .stdout(predicate::str::contains("    Story Points: 3"))
        .stdout(predicate::str::contains("M1-BL-1 [Task] Business logic"));
}

#[test]
fn parse_json_output() {
    let temp = plan_dir();
    let stdout = stdout_of(tix_in(temp.path()).args(["parse", "plan.md", "-o", "json"]));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tickets = json.as_array().unwrap();
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0]["key"], "M1-DB-1");
    assert_eq!(tickets[0]["story_points"], 3.0);
    assert_eq!(
        tickets[0]["description"],
        "Create the tables.\n\n- users\n- orders"
    );
    assert_eq!(tickets[1]["blocked_by"][0], "M1-DB-1");
}

#[test]
fn parse_from_stdin() {
    tix()
        .args(["parse", "-"])
        .write_stdin("## M1-API-2: Add endpoint\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("M1-API-2 [Task] Add endpoint"));
}

#[parameterized(
    no_headings = { "# Just a title\n\nSome text.\n" },
    wrong_level = { "### M1-DB-1: Too deep\n" },
    bad_key = { "## DB-1: Not a ticket\n" },
    empty = { "" },
)]
fn parse_without_tickets(text: &str) {
    tix()
        .args(["parse", "-"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout("No tickets found.\n");
}

#[test]
fn parse_invalid_story_points_warns() {
    tix()
        .args(["parse", "-"])
        .write_stdin("## M1-DB-1: Schema\n\n**Story Points:** abc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("M1-DB-1 [Task] Schema"))
        .stdout(predicate::str::contains("Story Points").not())
        .stderr(predicate::str::contains(
            "warning: M1-DB-1: invalid story points value 'abc'",
        ));
}

#[test]
fn parse_duplicate_key_warns() {
    tix()
        .args(["parse", "-"])
        .write_stdin("## M1-DB-1: First\n\n## M1-DB-1: Second\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("Second").not())
        .stderr(predicate::str::contains("duplicate ticket key"));
}

#[test]
fn parse_csv_by_extension() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "tickets.csv",
        "Key,Summary,Issue Type,Labels,Blocks\nM1-DB-1,Create schema,Story,db|backend,M1-BL-1\n",
    );
    tix_in(temp.path())
        .args(["parse", "tickets.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("M1-DB-1 [Story] Create schema"))
        .stdout(predicate::str::contains("Labels: db, backend"))
        .stdout(predicate::str::contains("Blocks: M1-BL-1"));
}

#[test]
fn parse_csv_from_stdin_with_format() {
    tix()
        .args(["parse", "-", "--format", "csv"])
        .write_stdin("Key,Summary\nnot-a-key,Skipped\nM1-DB-1,Kept\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("M1-DB-1 [Task] Kept"))
        .stdout(predicate::str::contains("Skipped").not())
        .stderr(predicate::str::contains("'not-a-key' is not a valid ticket key"));
}

#[test]
fn parse_csv_missing_column_fails() {
    tix()
        .args(["parse", "-", "--format", "csv"])
        .write_stdin("Key,Title\nM1-DB-1,x\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: missing column 'Summary'"));
}

#[test]
fn parse_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    tix_in(temp.path())
        .args(["parse", "nope.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: cannot read nope.md"));
}

#[test]
fn parse_unknown_format_rejected() {
    tix()
        .args(["parse", "-", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown source format"));
}
