// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured documents for ticket descriptions.
//!
//! [`build`] turns a block of description markdown into the small node
//! vocabulary the tracker's rich-text format accepts: headings (levels 2-6),
//! bullet lists, and paragraphs, each holding inline [`Span`]s. Task lists
//! are flattened into bullet lists because checkbox state cannot be expressed
//! inside child issues.

use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::sync::LazyLock;

use crate::inline::{format, Span};

// Compile-time constant patterns, verified at test time.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^(#{2,6})\s+(.+)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static TASK_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^-\s+\[[xX ]\]\s+(.+)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^-\s+([^\[].*)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// One entry of a bullet list: a single paragraph of spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem(pub Vec<Span>);

/// A block-level node of a structured document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    /// Heading with level 2 through 6.
    Heading { level: u8, content: Vec<Span> },
    BulletList(Vec<ListItem>),
    Paragraph(Vec<Span>),
}

/// A full structured document, serialized as `{"type": "doc", "version": 1, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub content: Vec<DocumentNode>,
}

impl Document {
    /// Builds the document for a description.
    pub fn from_markdown(markdown: &str) -> Self {
        Document {
            content: build(markdown),
        }
    }
}

#[derive(Serialize)]
struct HeadingAttrs {
    level: u8,
}

struct ParagraphNode<'a>(&'a [Span]);

impl Serialize for ParagraphNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "paragraph")?;
        map.serialize_entry("content", self.0)?;
        map.end()
    }
}

impl Serialize for ListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "listItem")?;
        map.serialize_entry("content", &[ParagraphNode(&self.0)])?;
        map.end()
    }
}

impl Serialize for DocumentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DocumentNode::Heading { level, content } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "heading")?;
                map.serialize_entry("attrs", &HeadingAttrs { level: *level })?;
                map.serialize_entry("content", content)?;
                map.end()
            }
            DocumentNode::BulletList(items) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "bulletList")?;
                map.serialize_entry("content", items)?;
                map.end()
            }
            DocumentNode::Paragraph(content) => ParagraphNode(content).serialize(serializer),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "doc")?;
        map.serialize_entry("version", &1)?;
        map.serialize_entry("content", &self.content)?;
        map.end()
    }
}

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Heading(u8, &'a str),
    Task(&'a str),
    Bullet(&'a str),
    Text,
}

impl LineKind<'_> {
    fn same_list_kind(&self, other: &LineKind<'_>) -> bool {
        matches!(
            (self, other),
            (LineKind::Task(_), LineKind::Task(_)) | (LineKind::Bullet(_), LineKind::Bullet(_))
        )
    }
}

fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(caps) = HEADING_RE.captures(line) {
        if let (Some(hashes), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineKind::Heading(hashes.as_str().len() as u8, text.as_str());
        }
    }
    if let Some(text) = TASK_RE.captures(line).and_then(|c| c.get(1)) {
        return LineKind::Task(text.as_str());
    }
    if let Some(text) = BULLET_RE.captures(line).and_then(|c| c.get(1)) {
        return LineKind::Bullet(text.as_str());
    }
    // Everything else, including list-looking lines that are neither a
    // valid task nor a bullet, continues a paragraph.
    LineKind::Text
}

/// Converts description markdown into document nodes, in source order.
///
/// Each line is consumed exactly once. Consecutive task items or consecutive
/// bullet items form one list; a blank line or a different kind of line ends
/// the run. Paragraph lines are joined with a single space before inline
/// formatting.
pub fn build(markdown: &str) -> Vec<DocumentNode> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut nodes = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let kind = classify(lines[cursor]);
        match kind {
            LineKind::Blank => cursor += 1,
            LineKind::Heading(level, text) => {
                nodes.push(DocumentNode::Heading {
                    level,
                    content: format(text),
                });
                cursor += 1;
            }
            LineKind::Task(_) | LineKind::Bullet(_) => {
                let mut items = Vec::new();
                while cursor < lines.len() {
                    let next = classify(lines[cursor]);
                    if !kind.same_list_kind(&next) {
                        break;
                    }
                    if let LineKind::Task(text) | LineKind::Bullet(text) = next {
                        items.push(ListItem(format(text)));
                    }
                    cursor += 1;
                }
                nodes.push(DocumentNode::BulletList(items));
            }
            LineKind::Text => {
                let start = cursor;
                while cursor < lines.len() && classify(lines[cursor]) == LineKind::Text {
                    cursor += 1;
                }
                let text = lines[start..cursor].join(" ");
                nodes.push(DocumentNode::Paragraph(format(&text)));
            }
        }
    }

    nodes
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
