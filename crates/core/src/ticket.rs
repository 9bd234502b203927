// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket records and the warnings produced while reading them.
//!
//! A [`TicketRecord`] is built once by one of the input adapters (markdown or
//! CSV) and is only touched again to attach the external key the tracker
//! assigned to it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Issue type used when a ticket does not declare one.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// Priority used when a ticket does not declare one.
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Body of the logical key pattern, shared by every matcher built on it.
pub(crate) const LOGICAL_KEY_PATTERN: &str = r"M\d+-[A-Z]+-\d+(?:-[A-Z]+)?";

// Compile-time constant patterns, verified at test time.
static LOGICAL_KEY_RE: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(&format!("^{}$", LOGICAL_KEY_PATTERN)) {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        },
    );

/// Returns true if `key` is a logical key such as `M1-API-3` or `M1-BL-2-CU`.
pub fn is_logical_key(key: &str) -> bool {
    LOGICAL_KEY_RE.is_match(key)
}

/// One work item, as declared in the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Logical key (e.g., "M1-DB-1"), unique within a parsed batch.
    pub key: String,
    /// Single-line title.
    pub summary: String,
    /// Markdown body, later expanded into a structured document.
    pub description: String,
    /// Tracker issue type name (e.g., "Story", "Task").
    pub issue_type: String,
    /// Parent epic or ticket, either a logical or an external key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub priority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_points: Option<f64>,
    /// Logical keys this ticket blocks.
    #[serde(default)]
    pub blocks: Vec<String>,
    /// Logical keys that block this ticket.
    #[serde(default)]
    pub blocked_by: Vec<String>,
    /// Key assigned by the tracker, present on re-runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_key: Option<String>,
}

impl TicketRecord {
    /// Creates a record with every optional field at its default.
    pub fn new(key: impl Into<String>, summary: impl Into<String>) -> Self {
        TicketRecord {
            key: key.into(),
            summary: summary.into(),
            description: String::new(),
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
            parent: None,
            labels: Vec::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            story_points: None,
            blocks: Vec::new(),
            blocked_by: Vec::new(),
            external_key: None,
        }
    }

    /// Sets the external key (builder pattern).
    pub fn with_external_key(mut self, external_key: impl Into<String>) -> Self {
        self.external_key = Some(external_key.into());
        self
    }

    /// Returns the external key if one is set and non-empty.
    pub fn existing_key(&self) -> Option<&str> {
        self.external_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// A recoverable data problem found while reading tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// Story points were present but not a finite number; the field was dropped.
    InvalidStoryPoints { key: String, value: String },
    /// A second ticket reused a logical key; it was dropped.
    DuplicateKey { key: String },
    /// A CSV row carried a key that is not a logical key; the row was dropped.
    InvalidLogicalKey { key: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::InvalidStoryPoints { key, value } => {
                write!(f, "{}: invalid story points value '{}', skipping", key, value)
            }
            ParseWarning::DuplicateKey { key } => {
                write!(f, "{}: duplicate ticket key, keeping the first one", key)
            }
            ParseWarning::InvalidLogicalKey { key } => {
                write!(f, "'{}' is not a valid ticket key, skipping row", key)
            }
        }
    }
}

/// Output of an input adapter: the records plus any warnings raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    pub tickets: Vec<TicketRecord>,
    pub warnings: Vec<ParseWarning>,
    /// Keys of `tickets`.
    seen: HashSet<String>,
}

impl Parsed {
    /// Appends a record unless its key was already seen, recording a warning instead.
    pub(crate) fn push(&mut self, record: TicketRecord) {
        if !self.seen.insert(record.key.clone()) {
            self.warn(ParseWarning::DuplicateKey { key: record.key });
            return;
        }
        self.tickets.push(record);
    }

    pub(crate) fn warn(&mut self, warning: ParseWarning) {
        tracing::debug!("{}", warning);
        self.warnings.push(warning);
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
