// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request bodies for the tracker's REST API.

use serde_json::{json, Map, Value};

use crate::document::Document;
use crate::link::LinkRecord;
use crate::ticket::TicketRecord;

/// Project key used when a ticket has no parent to borrow one from.
pub const DEFAULT_PROJECT_KEY: &str = "PX";

/// Custom field holding story points on the reference instance.
pub const DEFAULT_STORY_POINTS_FIELD: &str = "customfield_10115";

/// Link type name for dependency links.
pub const BLOCKS_LINK_TYPE: &str = "Blocks";

/// Instance-specific settings needed to build issue payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraSettings {
    pub default_project_key: String,
    pub story_points_field: String,
}

impl Default for JiraSettings {
    fn default() -> Self {
        JiraSettings {
            default_project_key: DEFAULT_PROJECT_KEY.to_string(),
            story_points_field: DEFAULT_STORY_POINTS_FIELD.to_string(),
        }
    }
}

/// Project a ticket is created in: the parent's project prefix when the
/// ticket has a parent, otherwise the configured default.
pub fn project_key<'a>(ticket: &'a TicketRecord, settings: &'a JiraSettings) -> &'a str {
    match ticket.parent.as_deref().filter(|p| !p.is_empty()) {
        Some(parent) => parent.split('-').next().unwrap_or(parent),
        None => &settings.default_project_key,
    }
}

/// Builds the create-issue request body for `ticket`, with `description` as
/// the already converted description.
pub fn issue_payload(
    ticket: &TicketRecord,
    description: &Document,
    settings: &JiraSettings,
) -> Value {
    let mut fields = Map::new();
    fields.insert("project".into(), json!({ "key": project_key(ticket, settings) }));
    fields.insert("summary".into(), json!(ticket.summary));
    fields.insert("description".into(), json!(description));
    fields.insert("issuetype".into(), json!({ "name": ticket.issue_type }));
    fields.insert("labels".into(), json!(ticket.labels));
    fields.insert("priority".into(), json!({ "name": ticket.priority }));
    if let Some(parent) = ticket.parent.as_deref().filter(|p| !p.is_empty()) {
        fields.insert("parent".into(), json!({ "key": parent }));
    }
    if let Some(points) = ticket.story_points {
        fields.insert(settings.story_points_field.clone(), json!(points));
    }
    json!({ "fields": fields })
}

/// Builds the issue-link request body: `blocker` blocks `blocked`.
pub fn link_payload(link: &LinkRecord) -> Value {
    json!({
        "type": { "name": BLOCKS_LINK_TYPE },
        "inwardIssue": { "key": link.blocker_external },
        "outwardIssue": { "key": link.blocked_external },
    })
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
