// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tix plan` and `tix payload`: the dry-run import and its request bodies.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use serde_json::Value;

#[test]
fn plan_text_summary() {
    let temp = plan_dir();
    tix_in(temp.path())
        .args(["plan", "plan.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  PX-1  M1-DB-1 [Story] Create schema"))
        .stdout(predicate::str::contains("  PX-2  M1-BL-1 [Task] Business logic"))
        .stdout(predicate::str::contains("  PX-1 blocks PX-2  (M1-DB-1 -> M1-BL-1)"))
        .stdout(predicate::str::contains("Tickets: 2 created\nLinks: 1 created\n"));
}

#[test]
fn plan_without_config_warns() {
    let temp = plan_dir();
    tix_in(temp.path())
        .args(["plan", "plan.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no config file found, using defaults"));
}

#[test]
fn plan_uses_discovered_config() {
    let temp = plan_dir();
    write_file(
        temp.path(),
        "tix.toml",
        "[jira]\ndefault_project_key = \"OPS\"\n",
    );
    let nested = temp.path().join("docs");
    std::fs::create_dir_all(&nested).unwrap();
    tix_in(&nested)
        .args(["plan", "../plan.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  OPS-1  M1-DB-1"))
        .stderr(predicate::str::contains("no config file found").not());
}

#[test]
fn plan_skips_tickets_with_keys() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "plan.md",
        "## M1-DB-1: Create schema\n\n**Jira Key:** PX-40\n**Blocks:** M1-BL-1\n\n## M1-BL-1: Logic\n",
    );
    tix_in(temp.path())
        .args(["plan", "plan.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  PX-40  M1-DB-1 [Task] Create schema (existing)"))
        .stdout(predicate::str::contains("  PX-1  M1-BL-1 [Task] Logic"))
        .stdout(predicate::str::contains("PX-40 blocks PX-1"))
        .stdout(predicate::str::contains("Tickets: 1 created, 1 already created"));
}

#[test]
fn plan_json() {
    let temp = plan_dir();
    let stdout = stdout_of(tix_in(temp.path()).args(["plan", "plan.md", "-o", "json"]));
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["report"]["created"], 2);
    assert_eq!(json["report"]["links_created"], 1);
    assert_eq!(json["links"][0]["type"]["name"], "Blocks");
    assert_eq!(json["links"][0]["outwardIssue"]["key"], "PX-2");
}

#[test]
fn payload_lines() {
    let temp = plan_dir();
    let stdout = stdout_of(tix_in(temp.path()).args(["payload", "plan.md"]));
    let lines: Vec<Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);

    let fields = &lines[0]["fields"];
    assert_eq!(fields["project"]["key"], "PX");
    assert_eq!(fields["summary"], "Create schema");
    assert_eq!(fields["issuetype"]["name"], "Story");
    assert_eq!(fields["priority"]["name"], "Medium");
    assert_eq!(fields["labels"], serde_json::json!(["db", "backend"]));
    assert_eq!(fields["customfield_10115"], 3.0);
    assert_eq!(fields["description"]["type"], "doc");
    assert_eq!(fields["description"]["content"][1]["type"], "bulletList");
    assert!(lines[1]["fields"].get("customfield_10115").is_none());
}

#[test]
fn payload_with_explicit_config() {
    let temp = plan_dir();
    write_file(
        temp.path(),
        "other.toml",
        "[jira.custom_fields]\nstory_points = \"customfield_999\"\n",
    );
    let stdout = stdout_of(
        tix_in(temp.path()).args(["--config", "other.toml", "payload", "plan.md"]),
    );
    let first: Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["fields"]["customfield_999"], 3.0);
}

#[test]
fn payload_with_env_config() {
    let temp = plan_dir();
    let config = write_file(
        temp.path(),
        "env.toml",
        "[jira]\ndefault_project_key = \"ENV\"\n",
    );
    let stdout = stdout_of(
        tix_in(temp.path())
            .env("TIX_CONFIG", &config)
            .args(["payload", "plan.md"]),
    );
    assert!(stdout.contains(r#""project":{"key":"ENV"}"#));
}
