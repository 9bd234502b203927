// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn config_show_defaults() {
    let temp = TempDir::new().unwrap();
    tix_in(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# source: defaults\n"))
        .stdout(predicate::str::contains("default_project_key = \"PX\""))
        .stdout(predicate::str::contains("story_points = \"customfield_10115\""));
}

#[test]
fn config_show_discovered_file() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "tix.toml",
        "[jira]\ndefault_project_key = \"OPS\"\n",
    );
    tix_in(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tix.toml"))
        .stdout(predicate::str::contains("default_project_key = \"OPS\""));
}

#[test]
fn config_show_user_config_dir() {
    let temp = TempDir::new().unwrap();
    let user_dir = temp.path().join(".config").join("tix");
    std::fs::create_dir_all(&user_dir).unwrap();
    write_file(&user_dir, "tix.toml", "[jira]\ndefault_project_key = \"USR\"\n");
    let work = temp.path().join("work");
    std::fs::create_dir_all(&work).unwrap();
    // HOME and XDG_CONFIG_HOME point into the temp dir, and nothing above
    // `work` inside it has a tix.toml.
    tix_in(&work)
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_project_key = \"USR\""));
}

#[test]
fn config_validate_ok() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "tix.toml", "[jira]\n");
    tix_in(temp.path())
        .args(["config", "validate", "tix.toml"])
        .assert()
        .success()
        .stdout("tix.toml: configuration is valid\n");
}

#[parameterized(
    lowercase_key = {
        "[jira]\ndefault_project_key = \"px\"\n",
        "error: jira.default_project_key must be uppercase"
    },
    long_key = {
        "[jira]\ndefault_project_key = \"ABCDEFGHIJK\"\n",
        "error: jira.default_project_key must be 2-10 characters"
    },
    bad_field = {
        "[jira.custom_fields]\nstory_points = \"points\"\n",
        "error: jira.custom_fields.story_points must start with 'customfield_'"
    },
)]
fn config_validate_errors(content: &str, message: &str) {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "tix.toml", content);
    tix_in(temp.path())
        .args(["config", "validate", "tix.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(message))
        .stderr(predicate::str::contains(
            "error: invalid configuration (1 error(s))",
        ));
}

#[test]
fn config_validate_missing_jira_table_warns() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "tix.toml", "");
    tix_in(temp.path())
        .args(["config", "validate", "tix.toml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: no [jira] section"));
}

#[test]
fn config_invalid_toml_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "tix.toml", "[jira\n");
    tix_in(temp.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: config error: failed to parse"));
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    tix_in(temp.path())
        .args(["--config", "missing.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read missing.toml"));
}
