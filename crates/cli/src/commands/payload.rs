// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use tix_core::{issue_payload, Document, JiraSettings, TicketRecord};

use crate::cli::InputArgs;
use crate::error::Result;

use super::{load_settings, load_tickets};

pub fn run(input: &InputArgs, config: Option<&Path>) -> Result<()> {
    let tickets = load_tickets(input)?;
    let settings = load_settings(config)?;
    run_impl(&tickets, &settings, &mut std::io::stdout().lock())
}

/// Writes one create-issue body per line, in ticket order.
pub(crate) fn run_impl(
    tickets: &[TicketRecord],
    settings: &JiraSettings,
    out: &mut impl Write,
) -> Result<()> {
    for ticket in tickets {
        let description = Document::from_markdown(&ticket.description);
        let body = issue_payload(ticket, &description, settings);
        writeln!(out, "{}", serde_json::to_string(&body)?)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
