// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tix_core::TicketRecord;

use crate::cli::{InputArgs, OutputFormat};
use crate::display::format_ticket;
use crate::error::Result;

use super::load_tickets;

pub fn run(input: &InputArgs, output: OutputFormat) -> Result<()> {
    let tickets = load_tickets(input)?;
    run_impl(&tickets, output, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts parsed tickets for testing.
pub(crate) fn run_impl(
    tickets: &[TicketRecord],
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            if tickets.is_empty() {
                writeln!(out, "No tickets found.")?;
                return Ok(());
            }
            for (i, ticket) in tickets.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", format_ticket(ticket))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(tickets)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
