// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn help_lists_commands_and_quickstart() {
    tix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("Tickets:"))
        .stdout(predicate::str::contains("apply-keys"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn without_arguments_shows_usage() {
    tix()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    parse = { "parse" },
    doc = { "doc" },
    links = { "links" },
    apply_keys = { "apply-keys" },
    payload = { "payload" },
    plan = { "plan" },
    config = { "config" },
)]
fn command_supports_help_flag(cmd: &str) {
    tix()
        .args([cmd, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    tix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tix "));
}

#[test]
fn unknown_command_fails() {
    tix().arg("frobnicate").assert().failure();
}
