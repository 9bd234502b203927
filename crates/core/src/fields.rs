// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metadata fields shared by the markdown and CSV input adapters.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::ticket::{ParseWarning, Parsed, TicketRecord};

// `**Name:** value`, `**Name**: value` or `Name: value`, optionally behind a
// list marker.
static FIELD_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"^\s*(?:[-*+]\s+)?(?:\*\*(?P<a>[^*:]+?):\*\*|\*\*(?P<b>[^*:]+?)\*\*:|(?P<c>[^*:]+?):)\s*(?P<value>.*?)\s*$",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// A recognized metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Parent,
    Labels,
    Priority,
    StoryPoints,
    Blocks,
    BlockedBy,
    JiraKey,
}

impl Field {
    /// Looks up a field by its display name, ignoring case and surrounding space.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "type" | "issue type" => Some(Field::Type),
            "parent" => Some(Field::Parent),
            "labels" => Some(Field::Labels),
            "priority" => Some(Field::Priority),
            "story points" => Some(Field::StoryPoints),
            "blocks" => Some(Field::Blocks),
            "blocked by" | "is blocked by" => Some(Field::BlockedBy),
            "jira key" => Some(Field::JiraKey),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "Type",
            Field::Parent => "Parent",
            Field::Labels => "Labels",
            Field::Priority => "Priority",
            Field::StoryPoints => "Story Points",
            Field::Blocks => "Blocks",
            Field::BlockedBy => "Blocked By",
            Field::JiraKey => "Jira Key",
        }
    }
}

/// Byte ranges of a `Name: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldLine {
    pub name: Range<usize>,
    /// Trimmed value; empty ranges sit right after the separator.
    pub value: Range<usize>,
}

impl FieldLine {
    /// Recognized field, if the name is one.
    pub fn field(&self, line: &str) -> Option<Field> {
        Field::from_name(&line[self.name.clone()])
    }
}

/// Splits a metadata line into name and value ranges.
///
/// Returns `None` for lines without a colon separator.
pub(crate) fn split_field_line(line: &str) -> Option<FieldLine> {
    let caps = FIELD_LINE_RE.captures(line)?;
    let name = caps
        .name("a")
        .or_else(|| caps.name("b"))
        .or_else(|| caps.name("c"))?;
    let value = caps.name("value")?;
    Some(FieldLine {
        name: name.range(),
        value: value.range(),
    })
}

/// Parses one metadata line into a recognized field and its trimmed value.
pub fn parse_field_line(line: &str) -> Option<(Field, &str)> {
    let split = split_field_line(line)?;
    let field = split.field(line)?;
    Some((field, &line[split.value]))
}

fn clean(value: &str) -> &str {
    value.trim().trim_matches('`').trim()
}

/// Splits a list value on `separator`, dropping empty entries.
pub fn split_list(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(clean)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_keys(value: &str, separator: char) -> Vec<String> {
    if clean(value).eq_ignore_ascii_case("(none)") {
        return Vec::new();
    }
    split_list(value, separator)
}

/// Stores `value` on the record.
///
/// Empty values leave the field at its default. A story-points value that is
/// not a finite number is dropped with a warning.
pub(crate) fn apply_field(
    record: &mut TicketRecord,
    field: Field,
    value: &str,
    separator: char,
    parsed: &mut Parsed,
) {
    let value = clean(value);
    if value.is_empty() {
        return;
    }
    match field {
        Field::Type => record.issue_type = value.to_string(),
        Field::Parent => record.parent = Some(value.to_string()),
        Field::Labels => record.labels = split_list(value, separator),
        Field::Priority => record.priority = value.to_string(),
        Field::StoryPoints => match value.parse::<f64>() {
            Ok(points) if points.is_finite() => record.story_points = Some(points),
            _ => parsed.warn(ParseWarning::InvalidStoryPoints {
                key: record.key.clone(),
                value: value.to_string(),
            }),
        },
        Field::Blocks => record.blocks = split_keys(value, separator),
        Field::BlockedBy => record.blocked_by = split_keys(value, separator),
        Field::JiraKey => record.external_key = Some(value.to_string()),
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
