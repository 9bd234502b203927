// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The import pipeline: create tickets, then link them.
//!
//! The tracker itself sits behind [`IssueTracker`] so the pipeline can run
//! against a real HTTP client, the [`DryRunTracker`], or a test double.
//! Nothing here retries; a failed ticket simply has no external key and
//! every link touching it is dropped.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::deps::extract_links;
use crate::document::Document;
use crate::error::Result;
use crate::link::{KeyMapping, LinkRecord};
use crate::payload::{issue_payload, link_payload, project_key, JiraSettings};
use crate::ticket::{is_logical_key, TicketRecord};

/// Result of asking the tracker to create one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkOutcome {
    Created,
    /// The tracker already has this link.
    Skipped,
    Failed,
}

/// The two collaborators the pipeline drives.
pub trait IssueTracker {
    /// Creates one issue and returns its external key.
    fn create_issue(&mut self, ticket: &TicketRecord, document: &Document) -> Result<String>;

    /// Creates one "blocks" link.
    fn create_link(&mut self, link: &LinkRecord) -> LinkOutcome;
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Final logical → external mapping, pre-existing keys included.
    pub mapping: KeyMapping,
    pub created: usize,
    /// Tickets skipped because they already carried an external key.
    pub existing: usize,
    /// Logical keys of tickets the tracker rejected.
    pub failed: Vec<String>,
    pub links: Vec<LinkRecord>,
    pub links_created: usize,
    pub links_skipped: usize,
    pub links_failed: usize,
}

impl ImportReport {
    /// True when every ticket and link went through.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.links_failed == 0
    }
}

/// Resolves a logical parent key to the key the tracker assigned it.
fn resolve_parent(ticket: &TicketRecord, mapping: &KeyMapping) -> TicketRecord {
    let mut resolved = ticket.clone();
    if let Some(parent) = &ticket.parent {
        if is_logical_key(parent) {
            match mapping.get(parent) {
                Some(external) => resolved.parent = Some(external.clone()),
                None => {
                    tracing::warn!(key = %ticket.key, parent = %parent, "parent has no external key yet")
                }
            }
        }
    }
    resolved
}

/// Runs both phases against `tracker`.
///
/// Tickets are created in input order so that parents declared earlier are
/// resolved for their children. Links are created afterwards from the final
/// mapping.
pub fn run_import(records: &[TicketRecord], tracker: &mut dyn IssueTracker) -> ImportReport {
    let mut report = ImportReport::default();

    for ticket in records {
        if let Some(existing) = ticket.existing_key() {
            tracing::info!(key = %ticket.key, external = existing, "already created, skipping");
            report.mapping.insert(ticket.key.clone(), existing.to_string());
            report.existing += 1;
        }
    }

    for ticket in records.iter().filter(|t| t.existing_key().is_none()) {
        let ticket = resolve_parent(ticket, &report.mapping);
        let document = Document::from_markdown(&ticket.description);
        match tracker.create_issue(&ticket, &document) {
            Ok(external) => {
                tracing::info!(key = %ticket.key, external = %external, "created ticket");
                report.mapping.insert(ticket.key.clone(), external);
                report.created += 1;
            }
            Err(e) => {
                tracing::warn!(key = %ticket.key, error = %e, "failed to create ticket");
                report.failed.push(ticket.key.clone());
            }
        }
    }

    report.links = extract_links(records, &report.mapping);
    for link in &report.links {
        match tracker.create_link(link) {
            LinkOutcome::Created => {
                tracing::info!("linked {}", link);
                report.links_created += 1;
            }
            LinkOutcome::Skipped => report.links_skipped += 1,
            LinkOutcome::Failed => {
                tracing::warn!("failed to link {}", link);
                report.links_failed += 1;
            }
        }
    }

    report
}

/// A tracker that assigns placeholder keys and records the request bodies
/// it would have sent.
#[derive(Debug, Default)]
pub struct DryRunTracker {
    settings: JiraSettings,
    counters: BTreeMap<String, u32>,
    /// `(logical key, create-issue body)` in creation order.
    pub issues: Vec<(String, Value)>,
    pub links: Vec<Value>,
}

impl DryRunTracker {
    pub fn new(settings: JiraSettings) -> Self {
        DryRunTracker {
            settings,
            ..Default::default()
        }
    }
}

impl IssueTracker for DryRunTracker {
    fn create_issue(&mut self, ticket: &TicketRecord, document: &Document) -> Result<String> {
        let project = project_key(ticket, &self.settings).to_string();
        let counter = self.counters.entry(project.clone()).or_insert(0);
        *counter += 1;
        let key = format!("{}-{}", project, counter);
        self.issues
            .push((ticket.key.clone(), issue_payload(ticket, document, &self.settings)));
        Ok(key)
    }

    fn create_link(&mut self, link: &LinkRecord) -> LinkOutcome {
        self.links.push(link_payload(link));
        LinkOutcome::Created
    }
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
