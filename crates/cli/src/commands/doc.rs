// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tix_core::Document;

use crate::error::Result;

use super::read_input;

pub fn run(file: &str) -> Result<()> {
    let text = read_input(file)?;
    run_impl(&text, &mut std::io::stdout().lock())
}

/// Writes the structured document for `text` as pretty JSON.
pub(crate) fn run_impl(text: &str, out: &mut impl Write) -> Result<()> {
    let document = Document::from_markdown(text);
    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "doc_tests.rs"]
mod tests;
