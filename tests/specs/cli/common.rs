// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A two-ticket plan where the dependency is declared from both sides.
pub const PLAN: &str = "\
# Milestone 1

## M1-DB-1: Create schema

**Type:** Story
**Labels:** db, backend
**Story Points:** 3
**Blocks:** M1-BL-1

### Description

Create the tables.

- [ ] users
- [x] orders

## M1-BL-1: Business logic

**Blocked By:** M1-DB-1
";

/// `tix` with a clean environment: no config discovery from the user's
/// machine and no colors.
pub fn tix() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("tix").unwrap();
    cmd.env_remove("TIX_CONFIG")
        .env_remove("TIX_LOG")
        .env_remove("RUST_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// `tix` run inside `dir`, with the user config directory pointed into it.
pub fn tix_in(dir: &Path) -> Command {
    let mut cmd = tix();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A temp directory holding `plan.md` with [`PLAN`].
pub fn plan_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "plan.md", PLAN);
    temp
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
