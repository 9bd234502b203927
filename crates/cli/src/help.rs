// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// clap styles matching the example colors.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(color(colors::codes::HEADER))
        .usage(color(colors::codes::HEADER))
        .literal(color(colors::codes::LITERAL))
        .placeholder(color(colors::codes::CONTEXT))
        .valid(color(colors::codes::CONTEXT))
}

/// Main help template with a colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_tickets}
  {parse}        Parse tickets from a plan (markdown or CSV)
  {doc}          Convert a markdown snippet to a structured document
  {links}        Resolve dependency links from a key mapping
  {apply_keys}   Write assigned keys back into the plan
  {payload}      Print tracker create-issue requests
  {plan}         Dry-run the full import

{header_setup}
  {config}       Show or validate configuration",
        header_tickets = colors::header("Tickets:"),
        header_setup = colors::header("Setup:"),
        parse = colors::literal("parse"),
        doc = colors::literal("doc"),
        links = colors::literal("links"),
        apply_keys = colors::literal("apply-keys"),
        payload = colors::literal("payload"),
        plan = colors::literal("plan"),
        config = colors::literal("config"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  tix parse plan.md                          List the tickets in a plan
  tix plan plan.md                           Preview what an import would create
  tix links plan.md --mapping keys.json      Show links between created tickets
  tix apply-keys plan.md --mapping keys.json --write
                                             Record the assigned keys in the plan",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
