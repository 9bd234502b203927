// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inline formatting: splits a line into plain, strong and code spans.

use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::sync::LazyLock;

// `**bold**` or `` `code` ``, each with a non-empty interior.
static INLINE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\*\*(.+?)\*\*|`(.+?)`") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// The style carried by a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Strong,
    Code,
}

impl Mark {
    /// Returns the mark name used in the tracker's document format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Strong => "strong",
            Mark::Code => "code",
        }
    }
}

/// A run of text with at most one style mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub mark: Option<Mark>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            mark: None,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            mark: Some(Mark::Strong),
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            mark: Some(Mark::Code),
        }
    }
}

#[derive(Serialize)]
struct MarkNode {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.mark.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", "text")?;
        map.serialize_entry("text", &self.text)?;
        if let Some(mark) = self.mark {
            map.serialize_entry("marks", &[MarkNode { kind: mark.as_str() }])?;
        }
        map.end()
    }
}

/// Splits `text` into styled spans, scanning left to right for the earliest
/// `**bold**` or `` `code` `` pair.
///
/// Unmatched delimiters stay literal inside plain spans. Input without any
/// markup (including the empty string) yields exactly one plain span.
pub fn format(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pos = 0;

    for caps in INLINE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > pos {
            spans.push(Span::plain(&text[pos..whole.start()]));
        }
        if let Some(bold) = caps.get(1) {
            spans.push(Span::strong(bold.as_str()));
        } else if let Some(code) = caps.get(2) {
            spans.push(Span::code(code.as_str()));
        }
        pos = whole.end();
    }

    if pos < text.len() {
        spans.push(Span::plain(&text[pos..]));
    }
    if spans.is_empty() {
        spans.push(Span::plain(text));
    }
    spans
}

#[cfg(test)]
#[path = "inline_tests.rs"]
mod tests;
