// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn links_dedup_both_sides() {
    let temp = plan_dir();
    write_file(
        temp.path(),
        "keys.json",
        r#"{"M1-DB-1": "PX-1", "M1-BL-1": "PX-2"}"#,
    );
    tix_in(temp.path())
        .args(["links", "plan.md", "--mapping", "keys.json"])
        .assert()
        .success()
        .stdout("PX-1 blocks PX-2  (M1-DB-1 -> M1-BL-1)\n");
}

#[test]
fn links_drop_unmapped_target() {
    let temp = plan_dir();
    write_file(temp.path(), "keys.json", r#"{"M1-DB-1": "PX-1"}"#);
    tix_in(temp.path())
        .args(["links", "plan.md", "-m", "keys.json"])
        .assert()
        .success()
        .stdout("No links to create.\n");
}

#[test]
fn links_json_output() {
    let temp = plan_dir();
    write_file(
        temp.path(),
        "keys.json",
        r#"{"M1-DB-1": "PX-1", "M1-BL-1": "PX-2"}"#,
    );
    let stdout = stdout_of(
        tix_in(temp.path()).args(["links", "plan.md", "-m", "keys.json", "-o", "json"]),
    );
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "blocker_logical": "M1-DB-1",
            "blocker_external": "PX-1",
            "blocked_logical": "M1-BL-1",
            "blocked_external": "PX-2"
        }])
    );
}

#[test]
fn links_invalid_mapping_fails() {
    let temp = plan_dir();
    write_file(temp.path(), "keys.json", "not json");
    tix_in(temp.path())
        .args(["links", "plan.md", "-m", "keys.json"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: invalid mapping file keys.json"))
        .stderr(predicate::str::contains("hint: expected a JSON object"));
}

#[test]
fn links_missing_mapping_file_fails() {
    let temp = plan_dir();
    tix_in(temp.path())
        .args(["links", "plan.md", "-m", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: cannot read missing.json"));
}
