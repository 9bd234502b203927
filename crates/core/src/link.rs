// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved "blocks" links between created tickets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Logical key → external key, as returned by the ticket-creation step.
pub type KeyMapping = BTreeMap<String, String>;

/// A directed "blocks" edge between two tickets that both exist in the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkRecord {
    pub blocker_logical: String,
    pub blocker_external: String,
    pub blocked_logical: String,
    pub blocked_external: String,
}

impl LinkRecord {
    /// The pair links are deduplicated on.
    pub fn external_pair(&self) -> (&str, &str) {
        (&self.blocker_external, &self.blocked_external)
    }
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) blocks {} ({})",
            self.blocker_logical, self.blocker_external, self.blocked_logical, self.blocked_external
        )
    }
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
