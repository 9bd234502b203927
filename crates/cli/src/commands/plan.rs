// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use serde_json::json;
use tix_core::{run_import, DryRunTracker, ImportReport, JiraSettings, TicketRecord};

use crate::cli::{InputArgs, OutputFormat};
use crate::display::{format_link, format_report, format_ticket_line};
use crate::error::Result;

use super::{load_settings, load_tickets};

pub fn run(input: &InputArgs, output: OutputFormat, config: Option<&Path>) -> Result<()> {
    let tickets = load_tickets(input)?;
    let settings = load_settings(config)?;
    run_impl(&tickets, settings, output, &mut std::io::stdout().lock())
}

/// Runs the import against placeholder keys and writes what it would do.
pub(crate) fn run_impl(
    tickets: &[TicketRecord],
    settings: JiraSettings,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut tracker = DryRunTracker::new(settings);
    let report = run_import(tickets, &mut tracker);

    match output {
        OutputFormat::Text => write_text(tickets, &report, out)?,
        OutputFormat::Json => {
            let issues: Vec<_> = tracker
                .issues
                .iter()
                .map(|(key, body)| {
                    json!({
                        "key": key,
                        "external_key": report.mapping.get(key),
                        "request": body,
                    })
                })
                .collect();
            let plan = json!({
                "complete": report.is_complete(),
                "report": report,
                "issues": issues,
                "links": tracker.links,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
        }
    }
    Ok(())
}

fn write_text(tickets: &[TicketRecord], report: &ImportReport, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Dry run, nothing was sent to the tracker.")?;
    if !tickets.is_empty() {
        writeln!(out)?;
        writeln!(out, "Tickets:")?;
    }
    for ticket in tickets {
        let external = report.mapping.get(&ticket.key).map_or("?", String::as_str);
        let note = if ticket.existing_key().is_some() {
            " (existing)"
        } else {
            ""
        };
        writeln!(out, "  {}  {}{}", external, format_ticket_line(ticket), note)?;
    }
    if !report.links.is_empty() {
        writeln!(out)?;
        writeln!(out, "Links:")?;
    }
    for link in &report.links {
        writeln!(out, "  {}", format_link(link))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", format_report(report))?;
    Ok(())
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
