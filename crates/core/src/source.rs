// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch between the markdown and CSV input adapters.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::link::KeyMapping;
use crate::ticket::Parsed;
use crate::{csv_rows, keys, markdown};

/// Format of a ticket source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceFormat {
    #[default]
    Markdown,
    Csv,
}

impl SourceFormat {
    /// Picks the format from a file extension; anything but `.csv` is markdown.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::Csv,
            _ => SourceFormat::Markdown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Markdown => "md",
            SourceFormat::Csv => "csv",
        }
    }

    /// Reads every ticket in `text`.
    pub fn parse(&self, text: &str) -> Result<Parsed> {
        match self {
            SourceFormat::Markdown => Ok(markdown::parse(text)),
            SourceFormat::Csv => csv_rows::parse_csv(text),
        }
    }

    /// Records external keys from `mapping` back into `text`.
    pub fn apply_keys(&self, text: &str, mapping: &KeyMapping) -> Result<String> {
        match self {
            SourceFormat::Markdown => Ok(keys::apply_keys(text, mapping)),
            SourceFormat::Csv => csv_rows::apply_keys_csv(text, mapping),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(SourceFormat::Markdown),
            "csv" => Ok(SourceFormat::Csv),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
