// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown input adapter.
//!
//! Tickets are declared as level-2 headings of the form
//! `## M1-DB-1: Create schema`. The blocks that follow, up to the next
//! level-2 heading or thematic break, hold `Field: value` metadata and,
//! after a `### Description` (or `### Summary`) heading, the description
//! body.
//!
//! Parsing runs in two passes. The first uses pulldown-cmark to reduce the
//! document to its top-level [`Block`]s. The second feeds those blocks to a
//! small state machine:
//!
//! ```text
//!            ## KEY: summary             ### Description
//!   Idle ─────────────────────▶ InMetadata ─────────────────▶ InDescription
//!    ▲                              │                              │
//!    └──────── ## other / --- ──────┴──────────────────────────────┘
//! ```
//!
//! A level-2 heading always closes the open ticket; if it is itself a ticket
//! header the machine re-enters `InMetadata` for the new ticket.
//!
//! Only ATX headings declare tickets. Inside a ticket, lines underlined with
//! `---` are read as ticket content followed by a thematic break, which is
//! how [`crate::keys::apply_keys`] sees them too.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::fields::{apply_field, parse_field_line};
use crate::ticket::{Parsed, TicketRecord, LOGICAL_KEY_PATTERN};

// Compile-time constant patterns, verified at test time.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(&format!("^({}): (.+)$", LOGICAL_KEY_PATTERN)) {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        },
    );
static TASK_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^\[[ xX]\]\s*") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// List values in markdown metadata are comma-separated.
const LIST_SEPARATOR: char = ',';

/// A top-level block of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    /// ATX heading with its inline content as written (without the `#` markers).
    Heading { level: u8, text: String },
    /// Setext heading: paragraph lines followed by a `=` or `-` underline.
    /// `body` is the paragraph source without the underline.
    Setext { level: u8, body: &'a str },
    /// Paragraph source, line breaks included.
    Paragraph(&'a str),
    List(Vec<ListEntry>),
    Rule,
    /// Anything else (code blocks, quotes, tables, HTML), as written.
    Other(&'a str),
}

/// One top-level list item, flattened to a single line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ListEntry {
    /// `Some(checked)` for task items.
    pub task: Option<bool>,
    /// Item content as written, without the list or task marker and without
    /// nested lists.
    pub text: String,
    /// Source lines of nested lists, indented relative to the item.
    pub nested: Vec<String>,
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Reduces `text` to its top-level blocks, in source order.
pub(crate) fn blocks(text: &str) -> Vec<Block<'_>> {
    let mut collector = BlockCollector::new(text);
    for (event, range) in Parser::new_ext(text, parser_options()).into_offset_iter() {
        collector.process_event(event, range);
    }
    collector.blocks
}

/// Joins source ranges, keeping the original whitespace between adjacent
/// pieces and collapsing everything to a single line.
fn join_ranges(source: &str, parts: &[Range<usize>]) -> String {
    let mut joined = String::new();
    let mut prev_end: Option<usize> = None;
    for part in parts {
        if let Some(end) = prev_end {
            match source.get(end..part.start) {
                Some(gap) if gap.chars().all(char::is_whitespace) => joined.push_str(gap),
                _ => joined.push(' '),
            }
        }
        joined.push_str(&source[part.clone()]);
        prev_end = Some(part.end);
    }
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Source of a setext heading without its underline, `None` for ATX headings.
fn setext_body(source: &str) -> Option<&str> {
    let (body, underline) = source.trim_end().rsplit_once('\n')?;
    let underline = underline.trim();
    let marker = underline.chars().next()?;
    let is_underline = matches!(marker, '=' | '-') && underline.chars().all(|c| c == marker);
    is_underline.then_some(body.trim_end())
}

/// Full source lines of `range`, dedented to the shallowest line.
fn nested_lines(source: &str, range: Range<usize>) -> Vec<String> {
    let start = source
        .get(..range.start)
        .and_then(|before| before.rfind('\n'))
        .map_or(0, |i| i + 1);
    let lines: Vec<&str> = source
        .get(start..range.end)
        .unwrap_or_default()
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    let indent = |line: &str| line.len() - line.trim_start_matches([' ', '\t']).len();
    let shallowest = lines.iter().map(|line| indent(line)).min().unwrap_or(0);
    lines.iter().map(|line| line[shallowest..].to_string()).collect()
}

enum OpenBlock {
    Heading {
        level: u8,
        range: Range<usize>,
        parts: Vec<Range<usize>>,
    },
    List {
        entries: Vec<ListEntry>,
        item: Option<OpenItem>,
    },
    /// Already emitted at its start event; only the depth is tracked.
    Emitted,
}

struct OpenItem {
    task: Option<bool>,
    parts: Vec<Range<usize>>,
    nested: Vec<String>,
}

/// Folds the pulldown-cmark event stream into top-level blocks.
///
/// Start events carry the range of the whole element, so paragraphs and
/// opaque blocks are emitted as soon as they open. Headings and lists need
/// their children and are emitted when they close.
struct BlockCollector<'a> {
    source: &'a str,
    blocks: Vec<Block<'a>>,
    depth: usize,
    open: Option<OpenBlock>,
}

impl<'a> BlockCollector<'a> {
    fn new(source: &'a str) -> Self {
        BlockCollector {
            source,
            blocks: Vec::new(),
            depth: 0,
            open: None,
        }
    }

    fn process_event(&mut self, event: Event<'_>, range: Range<usize>) {
        // Depth of the element containing this event.
        let parent = self.depth;
        match event {
            Event::Start(tag) => {
                self.depth += 1;
                if parent == 0 {
                    self.open_block(&tag, range);
                } else {
                    self.add_child(parent, Some(&tag), range);
                }
            }
            Event::End(tag) => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.close_block();
                } else if self.depth == 1 && tag == TagEnd::Item {
                    self.close_item();
                }
            }
            Event::Rule if parent == 0 => self.blocks.push(Block::Rule),
            Event::TaskListMarker(checked) => {
                if let Some(OpenBlock::List {
                    item: Some(item), ..
                }) = &mut self.open
                {
                    item.task = Some(checked);
                }
            }
            _ if parent == 0 => {
                let source = self.source.get(range).unwrap_or_default();
                if !source.trim().is_empty() {
                    self.blocks.push(Block::Other(source));
                }
            }
            _ => self.add_child(parent, None, range),
        }
    }

    fn open_block(&mut self, tag: &Tag<'_>, range: Range<usize>) {
        let source = self.source.get(range.clone()).unwrap_or_default();
        self.open = Some(match tag {
            Tag::Heading { level, .. } => OpenBlock::Heading {
                level: *level as u8,
                range,
                parts: Vec::new(),
            },
            Tag::List(_) => OpenBlock::List {
                entries: Vec::new(),
                item: None,
            },
            Tag::Paragraph => {
                self.blocks.push(Block::Paragraph(source));
                OpenBlock::Emitted
            }
            _ => {
                self.blocks.push(Block::Other(source));
                OpenBlock::Emitted
            }
        });
    }

    fn add_child(&mut self, parent: usize, tag: Option<&Tag<'_>>, range: Range<usize>) {
        let source = self.source;
        match &mut self.open {
            Some(OpenBlock::Heading { parts, .. }) if parent == 1 => parts.push(range),
            Some(OpenBlock::List { item, .. }) => {
                if parent == 1 && matches!(tag, Some(Tag::Item)) {
                    *item = Some(OpenItem {
                        task: None,
                        parts: Vec::new(),
                        nested: Vec::new(),
                    });
                } else if parent == 2 {
                    if let Some(item) = item {
                        if matches!(tag, Some(Tag::List(_))) {
                            item.nested.extend(nested_lines(source, range));
                        } else {
                            item.parts.push(range);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn close_item(&mut self) {
        let source = self.source;
        if let Some(OpenBlock::List { entries, item }) = &mut self.open {
            if let Some(item) = item.take() {
                let mut text = join_ranges(source, &item.parts);
                if item.task.is_some() {
                    // Loose task items keep the marker inside their paragraph.
                    text = TASK_MARKER_RE.replace(&text, "").into_owned();
                }
                entries.push(ListEntry {
                    task: item.task,
                    text,
                    nested: item.nested,
                });
            }
        }
    }

    fn close_block(&mut self) {
        match self.open.take() {
            Some(OpenBlock::Heading {
                level,
                range,
                parts,
            }) => {
                let source = self.source;
                let block = match setext_body(source.get(range).unwrap_or_default()) {
                    Some(body) => Block::Setext { level, body },
                    None => Block::Heading {
                        level,
                        text: join_ranges(source, &parts),
                    },
                };
                self.blocks.push(block);
            }
            Some(OpenBlock::List { entries, .. }) => self.blocks.push(Block::List(entries)),
            Some(OpenBlock::Emitted) | None => {}
        }
    }
}

/// Position of the ticket parser within the current ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any ticket.
    Idle,
    /// After a ticket header, reading `Field: value` lines.
    InMetadata,
    /// After a description heading, collecting the body.
    InDescription,
}

struct Draft {
    record: TicketRecord,
    description: Vec<String>,
}

struct TicketParser {
    state: State,
    draft: Option<Draft>,
    parsed: Parsed,
}

impl TicketParser {
    fn new() -> Self {
        TicketParser {
            state: State::Idle,
            draft: None,
            parsed: Parsed::default(),
        }
    }

    fn process_block(&mut self, block: Block<'_>) {
        match (&block, self.state) {
            (Block::Heading { level: 2, text }, _) => {
                self.close_ticket();
                self.open_ticket(text);
            }
            (Block::Rule, _) => self.close_ticket(),
            (_, State::Idle) => {}
            // Inside a ticket the underlined lines are ticket content and a
            // `-` underline ends the ticket like a thematic break.
            (Block::Setext { level, body }, _) => {
                let level = *level;
                self.process_block(Block::Paragraph(*body));
                if level == 2 {
                    self.close_ticket();
                }
            }
            (Block::Heading { level: 3, text }, State::InMetadata)
                if text == "Description" || text == "Summary" =>
            {
                self.state = State::InDescription;
            }
            (_, State::InMetadata) => self.read_metadata(&block),
            (_, State::InDescription) => self.append_description(&block),
        }
    }

    fn open_ticket(&mut self, heading: &str) {
        let Some(caps) = HEADER_RE.captures(heading) else {
            return;
        };
        let (Some(key), Some(summary)) = (caps.get(1), caps.get(2)) else {
            return;
        };
        tracing::debug!(key = key.as_str(), "found ticket header");
        self.draft = Some(Draft {
            record: TicketRecord::new(key.as_str(), summary.as_str().trim()),
            description: Vec::new(),
        });
        self.state = State::InMetadata;
    }

    fn read_metadata(&mut self, block: &Block<'_>) {
        let Some(draft) = &mut self.draft else {
            return;
        };
        let lines: Vec<&str> = match block {
            Block::Paragraph(source) => source.lines().collect(),
            Block::List(entries) => entries.iter().map(|e| e.text.as_str()).collect(),
            _ => return,
        };
        for line in lines {
            if let Some((field, value)) = parse_field_line(line) {
                apply_field(
                    &mut draft.record,
                    field,
                    value,
                    LIST_SEPARATOR,
                    &mut self.parsed,
                );
            }
        }
    }

    fn append_description(&mut self, block: &Block<'_>) {
        let Some(draft) = &mut self.draft else {
            return;
        };
        let part = match block {
            Block::Heading { level, text } => format!("{} {}", "#".repeat(*level as usize), text),
            Block::Paragraph(source) => source
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
            Block::List(entries) => entries
                .iter()
                .flat_map(|entry| {
                    std::iter::once(format!("- {}", entry.text))
                        .chain(entry.nested.iter().map(|line| format!("  {}", line)))
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Other(source) => source.trim().to_string(),
            Block::Rule | Block::Setext { .. } => return,
        };
        if !part.is_empty() {
            draft.description.push(part);
        }
    }

    fn close_ticket(&mut self) {
        self.state = State::Idle;
        if let Some(Draft {
            mut record,
            description,
        }) = self.draft.take()
        {
            record.description = description.join("\n\n");
            self.parsed.push(record);
        }
    }

    fn finish(mut self) -> Parsed {
        self.close_ticket();
        self.parsed
    }
}

/// Parses every ticket declared in a markdown document.
///
/// Never fails: unrecognized headings and fields are skipped, and data
/// problems are reported through [`Parsed::warnings`].
pub fn parse(text: &str) -> Parsed {
    let mut parser = TicketParser::new();
    for block in blocks(text) {
        parser.process_block(block);
    }
    let parsed = parser.finish();
    tracing::debug!(
        tickets = parsed.tickets.len(),
        warnings = parsed.warnings.len(),
        "parsed markdown"
    );
    parsed
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
