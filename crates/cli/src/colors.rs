// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output and diagnostics.
//!
//! Respects `NO_COLOR=1` (disable) and `COLOR=1` (force even without a TTY).

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and descriptions: medium grey
    pub const CONTEXT: u8 = 245;
    /// Warning prefix: amber
    pub const WARNING: u8 = 214;
}

const RESET: &str = "\x1b[0m";

/// Whether stdout should be colored.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn should_colorize_stderr() -> bool {
    if env::no_color() {
        return false;
    }
    env::force_color() || std::io::stderr().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// The `warning:` prefix for stderr diagnostics.
pub fn warning_prefix() -> String {
    if should_colorize_stderr() {
        paint(codes::WARNING, "warning:")
    } else {
        "warning:".to_string()
    }
}

/// Splits an example line at the first run of two or more spaces.
pub fn split_example(line: &str) -> Option<(&str, &str)> {
    let start = line.find("  ")?;
    let rest = &line[start..];
    let desc = rest.trim_start();
    if desc.is_empty() {
        return None;
    }
    Some((&line[..start], &line[line.len() - desc.len()..]))
}

/// Colorizes an examples block: `Title:` lines as headers, and
/// `  command    description` lines with the command as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match split_example(trimmed) {
                Some((cmd, desc)) => {
                    let gap = &trimmed[cmd.len()..trimmed.len() - desc.len()];
                    format!("{indent}{}{gap}{}", literal(cmd), context(desc))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
