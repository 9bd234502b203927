// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tix_core::{extract_links, KeyMapping, TicketRecord};

use crate::cli::{InputArgs, MappingArgs, OutputFormat};
use crate::display::format_link;
use crate::error::Result;

use super::{load_tickets, read_mapping};

pub fn run(input: &InputArgs, mapping: &MappingArgs, output: OutputFormat) -> Result<()> {
    let tickets = load_tickets(input)?;
    let mapping = read_mapping(&mapping.mapping)?;
    run_impl(&tickets, &mapping, output, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts parsed inputs for testing.
pub(crate) fn run_impl(
    tickets: &[TicketRecord],
    mapping: &KeyMapping,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let links = extract_links(tickets, mapping);
    match output {
        OutputFormat::Text => {
            if links.is_empty() {
                writeln!(out, "No links to create.")?;
            }
            for link in &links {
                writeln!(out, "{}", format_link(link))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&links)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
