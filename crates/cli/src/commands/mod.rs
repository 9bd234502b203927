// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod apply_keys;
pub mod config;
pub mod doc;
pub mod links;
pub mod parse;
pub mod payload;
pub mod plan;

use std::path::Path;

use tix_core::{JiraSettings, KeyMapping, ParseWarning, TicketRecord};

use crate::cli::InputArgs;
use crate::colors;
use crate::config::load_config;
use crate::error::{Error, Result};

/// Reads a file, or standard input for `-`.
pub fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        return Ok(std::io::read_to_string(std::io::stdin())?);
    }
    std::fs::read_to_string(file).map_err(|source| Error::ReadInput {
        path: file.to_string(),
        source,
    })
}

/// Parses a mapping file's contents.
pub(crate) fn parse_mapping(path: &Path, content: &str) -> Result<KeyMapping> {
    serde_json::from_str(content).map_err(|e| Error::InvalidMapping {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Reads a JSON object of logical key to tracker key.
pub fn read_mapping(path: &Path) -> Result<KeyMapping> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.display().to_string(),
        source,
    })?;
    let mapping = parse_mapping(path, &content)?;
    tracing::debug!(entries = mapping.len(), "loaded key mapping");
    Ok(mapping)
}

/// Prints parse warnings to stderr.
pub fn report_warnings(warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!("{} {}", colors::warning_prefix(), warning);
    }
}

/// Parses tickets from text in the input's format.
pub(crate) fn parse_tickets(input: &InputArgs, text: &str) -> Result<Vec<TicketRecord>> {
    let parsed = input.source_format().parse(text)?;
    report_warnings(&parsed.warnings);
    Ok(parsed.tickets)
}

/// Reads and parses the tickets named by `input`.
pub fn load_tickets(input: &InputArgs) -> Result<Vec<TicketRecord>> {
    let text = read_input(&input.file)?;
    parse_tickets(input, &text)
}

/// Tracker settings from the effective configuration.
pub fn load_settings(config: Option<&Path>) -> Result<JiraSettings> {
    Ok(load_config(config)?.config.settings())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
