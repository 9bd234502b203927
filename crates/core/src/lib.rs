// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tix-core: ticket planning documents to tracker-ready data.
//!
//! This crate holds the pure transformations behind the `tix` CLI: reading
//! ticket records out of markdown or CSV, expanding descriptions into
//! structured documents, resolving dependency declarations into links, and
//! writing assigned keys back into the source. Nothing here performs I/O;
//! the tracker is reached through the [`IssueTracker`] trait.

pub mod csv_rows;
pub mod deps;
pub mod document;
pub mod error;
pub mod fields;
pub mod import;
pub mod inline;
pub mod keys;
pub mod link;
pub mod markdown;
pub mod payload;
pub mod source;
pub mod ticket;

pub use deps::extract_links;
pub use document::{Document, DocumentNode, ListItem};
pub use error::{Error, Result};
pub use fields::Field;
pub use import::{run_import, DryRunTracker, ImportReport, IssueTracker, LinkOutcome};
pub use inline::{Mark, Span};
pub use keys::apply_keys;
pub use link::{KeyMapping, LinkRecord};
pub use payload::{issue_payload, link_payload, JiraSettings};
pub use source::SourceFormat;
pub use ticket::{is_logical_key, ParseWarning, Parsed, TicketRecord};
