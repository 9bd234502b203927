// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Writes external keys back into the source markdown.
//!
//! The document is rewritten line by line rather than re-rendered from the
//! parsed tree so that everything outside the touched metadata lines
//! survives byte for byte.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::fields::{split_field_line, Field, FieldLine};
use crate::link::KeyMapping;
use crate::ticket::LOGICAL_KEY_PATTERN;

// Compile-time constant patterns, verified at test time.
static HEADER_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(&format!(r"^ {{0,3}}##[ \t]+({}):[ \t]+.*\S", LOGICAL_KEY_PATTERN)) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static HEADING_LINE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^ {0,3}#{1,6}(\s|$)") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Splits a trailing carriage return off a line.
fn split_cr(line: &str) -> (&str, &str) {
    match line.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (line, ""),
    }
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn fence_marker(line: &str) -> Option<char> {
    if indent_width(line) > 3 {
        return None;
    }
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some('`')
    } else if trimmed.starts_with("~~~") {
        Some('~')
    } else {
        None
    }
}

fn is_thematic_break(line: &str) -> bool {
    if indent_width(line) > 3 {
        return false;
    }
    let mut marker = None;
    let mut count = 0;
    for c in line.trim().chars() {
        if c == ' ' || c == '\t' {
            continue;
        }
        match marker {
            None if matches!(c, '-' | '*' | '_') => marker = Some(c),
            Some(m) if m == c => {}
            _ => return false,
        }
        count += 1;
    }
    count >= 3
}

/// Lines that end a ticket's metadata region.
fn is_boundary(line: &str) -> bool {
    HEADING_LINE_RE.is_match(line) || is_thematic_break(line) || fence_marker(line).is_some()
}

fn header_key(line: &str) -> Option<&str> {
    HEADER_LINE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Tracks fenced code blocks so headers inside them are left alone.
#[derive(Default)]
struct FenceTracker {
    open: Option<char>,
}

impl FenceTracker {
    /// Returns true if `line` opens, closes, or sits inside a fence.
    fn update(&mut self, line: &str) -> bool {
        match (self.open, fence_marker(line)) {
            (Some(open), Some(marker)) if open == marker => {
                self.open = None;
                true
            }
            (Some(_), _) => true,
            (None, Some(marker)) => {
                self.open = Some(marker);
                true
            }
            (None, None) => false,
        }
    }
}

/// Records the external key of every mapped ticket in `text`.
///
/// For each ticket header found in the mapping, an existing `Jira Key` line
/// has its value replaced. Otherwise a new line is inserted after the first
/// `Blocked By` line, else after the first `Blocks` line, else before the
/// first metadata line, else directly under the header. Inserted lines copy
/// the markup of the line they are placed next to.
///
/// Unmapped tickets and everything outside ticket metadata are untouched,
/// and applying the same mapping twice gives the same text as applying it
/// once.
pub fn apply_keys(text: &str, mapping: &KeyMapping) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len() + mapping.len());
    let mut fence = FenceTracker::default();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];
        out.push(Cow::Borrowed(line));
        cursor += 1;

        if fence.update(line) {
            continue;
        }
        let Some(key) = header_key(line) else {
            continue;
        };

        let end = lines[cursor..]
            .iter()
            .position(|l| is_boundary(l))
            .map_or(lines.len(), |offset| cursor + offset);
        let region = &lines[cursor..end];
        match mapping.get(key) {
            Some(external) => out.extend(annotate(line, region, external)),
            None => {
                tracing::debug!(key, "no external key, leaving ticket untouched");
                out.extend(region.iter().map(|l| Cow::Borrowed(*l)));
            }
        }
        cursor = end;
    }

    out.join("\n")
}

struct MetadataLine {
    index: usize,
    field: Field,
    split: FieldLine,
}

fn annotate<'a>(header: &'a str, region: &[&'a str], external: &str) -> Vec<Cow<'a, str>> {
    let mut out: Vec<Cow<'a, str>> = region.iter().map(|l| Cow::Borrowed(*l)).collect();
    let metadata: Vec<MetadataLine> = region
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let (body, _) = split_cr(line);
            let split = split_field_line(body)?;
            let field = split.field(body)?;
            Some(MetadataLine {
                index,
                field,
                split,
            })
        })
        .collect();
    let find = |field: Field| metadata.iter().find(|m| m.field == field);

    if let Some(existing) = find(Field::JiraKey) {
        out[existing.index] = Cow::Owned(replace_value(region[existing.index], &existing.split, external));
        return out;
    }

    let (position, line) = match find(Field::BlockedBy).or_else(|| find(Field::Blocks)) {
        Some(anchor) => (
            anchor.index + 1,
            styled_line(region[anchor.index], &anchor.split, external),
        ),
        None => match metadata.first() {
            Some(first) => (first.index, styled_line(region[first.index], &first.split, external)),
            None => {
                let (_, cr) = split_cr(header);
                (0, format!("**{}:** {}{}", Field::JiraKey.as_str(), external, cr))
            }
        },
    };
    out.insert(position, Cow::Owned(line));
    out
}

fn replace_value(line: &str, split: &FieldLine, external: &str) -> String {
    let (body, cr) = split_cr(line);
    let head = &body[..split.value.start];
    let mut updated = String::with_capacity(line.len() + external.len());
    updated.push_str(head);
    if !head.ends_with(char::is_whitespace) {
        updated.push(' ');
    }
    updated.push_str(external);
    updated.push_str(&body[split.value.end..]);
    updated.push_str(cr);
    updated
}

/// Builds a `Jira Key` line in the same markup as `anchor`.
fn styled_line(anchor: &str, split: &FieldLine, external: &str) -> String {
    let (body, cr) = split_cr(anchor);
    let prefix = &body[..split.name.start];
    let separator = &body[split.name.end..split.value.start];
    let mut line = format!("{}{}{}", prefix, Field::JiraKey.as_str(), separator);
    if !separator.ends_with(char::is_whitespace) {
        line.push(' ');
    }
    line.push_str(external);
    line.push_str(cr);
    line
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
