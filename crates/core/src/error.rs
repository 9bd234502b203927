// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tix-core operations.
//!
//! The markdown parser and document builder are total and never produce
//! these; they surface data-entry problems as [`ParseWarning`](crate::ParseWarning)
//! values instead.

use thiserror::Error;

/// All possible errors that can occur in tix-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing column '{0}'\n  hint: the header row must contain a '{0}' column")]
    MissingColumn(String),

    #[error("unknown source format: '{0}'\n  hint: valid formats are: md, csv")]
    UnknownFormat(String),

    #[error("tracker error: {0}")]
    Tracker(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tix-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
