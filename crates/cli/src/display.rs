// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tix_core::{ImportReport, LinkRecord, TicketRecord};

/// Joins a list for display, or `-` when empty.
fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// One-line summary: `M1-DB-1 [Story] Create schema`.
pub fn format_ticket_line(ticket: &TicketRecord) -> String {
    format!("{} [{}] {}", ticket.key, ticket.issue_type, ticket.summary)
}

/// A ticket with its metadata, indented under the summary line.
pub fn format_ticket(ticket: &TicketRecord) -> String {
    let mut lines = vec![format_ticket_line(ticket)];
    lines.push(format!("    Priority: {}", ticket.priority));
    if let Some(points) = ticket.story_points {
        lines.push(format!("    Story Points: {}", points));
    }
    if let Some(parent) = &ticket.parent {
        lines.push(format!("    Parent: {}", parent));
    }
    if !ticket.labels.is_empty() {
        lines.push(format!("    Labels: {}", ticket.labels.join(", ")));
    }
    if !ticket.blocks.is_empty() || !ticket.blocked_by.is_empty() {
        lines.push(format!("    Blocks: {}", list_or_dash(&ticket.blocks)));
        lines.push(format!("    Blocked By: {}", list_or_dash(&ticket.blocked_by)));
    }
    if let Some(key) = ticket.existing_key() {
        lines.push(format!("    Jira Key: {}", key));
    }
    if !ticket.description.is_empty() {
        let first = ticket.description.lines().next().unwrap_or_default();
        let more = ticket.description.lines().count() > 1;
        lines.push(format!(
            "    Description: {}{}",
            first,
            if more { " ..." } else { "" }
        ));
    }
    lines.join("\n")
}

/// `PX-1 blocks PX-2  (M1-DB-1 -> M1-BL-1)`
pub fn format_link(link: &LinkRecord) -> String {
    format!(
        "{} blocks {}  ({} -> {})",
        link.blocker_external, link.blocked_external, link.blocker_logical, link.blocked_logical
    )
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Closing summary of an import run.
pub fn format_report(report: &ImportReport) -> String {
    let mut lines = Vec::new();
    let mut tickets = format!("Tickets: {} created", report.created);
    if report.existing > 0 {
        tickets.push_str(&format!(", {} already created", report.existing));
    }
    if !report.failed.is_empty() {
        tickets.push_str(&format!(
            ", {} failed ({})",
            report.failed.len(),
            report.failed.join(", ")
        ));
    }
    lines.push(tickets);

    let mut links = format!("Links: {} created", report.links_created);
    if report.links_skipped > 0 {
        links.push_str(&format!(", {} skipped", report.links_skipped));
    }
    if report.links_failed > 0 {
        links.push_str(&format!(", {} failed", report.links_failed));
    }
    lines.push(links);

    let tickets = report.created + report.existing;
    if report.links.is_empty() && tickets > 0 {
        lines.push(format!("No dependencies among {}", plural(tickets, "ticket")));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
