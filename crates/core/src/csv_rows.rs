// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSV input adapter.
//!
//! One ticket per row, with the columns `Key`, `Summary`, `Description`,
//! `Issue Type`, `Parent`, `Labels`, `Priority`, `Story Points`, `Blocks`,
//! `Is Blocked By` and an optional `Jira Key`. List columns are separated
//! with `|`.

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::fields::{apply_field, Field};
use crate::link::KeyMapping;
use crate::ticket::{is_logical_key, ParseWarning, Parsed, TicketRecord};

const LIST_SEPARATOR: char = '|';
const KEY_COLUMN: &str = "Key";
const SUMMARY_COLUMN: &str = "Summary";
const JIRA_KEY_COLUMN: &str = "Jira Key";

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Summary")]
    summary: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Issue Type", default)]
    issue_type: String,
    #[serde(rename = "Parent", default)]
    parent: String,
    #[serde(rename = "Labels", default)]
    labels: String,
    #[serde(rename = "Priority", default)]
    priority: String,
    #[serde(rename = "Story Points", default)]
    story_points: String,
    #[serde(rename = "Blocks", default)]
    blocks: String,
    #[serde(rename = "Is Blocked By", default)]
    blocked_by: String,
    #[serde(rename = "Jira Key", default)]
    jira_key: String,
}

impl Row {
    fn into_record(self, parsed: &mut Parsed) -> TicketRecord {
        let mut record = TicketRecord::new(self.key.trim(), self.summary.trim());
        record.description = self.description;
        for (field, value) in [
            (Field::Type, &self.issue_type),
            (Field::Parent, &self.parent),
            (Field::Labels, &self.labels),
            (Field::Priority, &self.priority),
            (Field::StoryPoints, &self.story_points),
            (Field::Blocks, &self.blocks),
            (Field::BlockedBy, &self.blocked_by),
            (Field::JiraKey, &self.jira_key),
        ] {
            apply_field(&mut record, field, value, LIST_SEPARATOR, parsed);
        }
        record
    }
}

fn column(header: &StringRecord, name: &str) -> Option<usize> {
    header.iter().position(|h| h.trim() == name)
}

fn require_column(header: &StringRecord, name: &str) -> Result<usize> {
    column(header, name).ok_or_else(|| Error::MissingColumn(name.to_string()))
}

/// Parses tickets from CSV text.
///
/// Rows whose key is not a logical key are skipped with a warning. Fails
/// only when the header lacks `Key` or `Summary`, or the CSV is malformed.
pub fn parse_csv(text: &str) -> Result<Parsed> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());
    let header = reader.headers()?.clone();
    require_column(&header, KEY_COLUMN)?;
    require_column(&header, SUMMARY_COLUMN)?;

    let mut parsed = Parsed::default();
    for row in reader.deserialize::<Row>() {
        let row = row?;
        let key = row.key.trim();
        if !is_logical_key(key) {
            parsed.warn(ParseWarning::InvalidLogicalKey {
                key: key.to_string(),
            });
            continue;
        }
        let record = row.into_record(&mut parsed);
        parsed.push(record);
    }
    tracing::debug!(
        tickets = parsed.tickets.len(),
        warnings = parsed.warnings.len(),
        "parsed csv"
    );
    Ok(parsed)
}

/// Fills the `Jira Key` column from `mapping`.
///
/// The column is inserted right after `Key` when missing. Rows without a
/// mapping entry keep their current value (empty for a new column). Line
/// endings follow the input.
pub fn apply_keys_csv(text: &str, mapping: &KeyMapping) -> Result<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = reader.records();
    let Some(header) = rows.next().transpose()? else {
        return Ok(text.to_string());
    };
    let key_index = require_column(&header, KEY_COLUMN)?;
    let existing = column(&header, JIRA_KEY_COLUMN);

    let terminator = if text.contains("\r\n") {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    };
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(terminator)
        .from_writer(Vec::new());

    let mut columns: Vec<&str> = header.iter().collect();
    if existing.is_none() {
        columns.insert(key_index + 1, JIRA_KEY_COLUMN);
    }
    writer.write_record(&columns)?;

    for row in rows {
        let row = row?;
        let key = row.get(key_index).unwrap_or_default().trim();
        let mapped = mapping.get(key).map(String::as_str);
        let mut fields: Vec<&str> = row.iter().collect();
        match existing {
            Some(index) => {
                if let (Some(external), Some(slot)) = (mapped, fields.get_mut(index)) {
                    *slot = external;
                }
            }
            None => {
                let at = (key_index + 1).min(fields.len());
                fields.insert(at, mapped.unwrap_or_default());
            }
        }
        writer.write_record(&fields)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "csv_rows_tests.rs"]
mod tests;
