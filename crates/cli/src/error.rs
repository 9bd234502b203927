// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the tixrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid mapping file {path}: {reason}\n  hint: expected a JSON object like {{\"M1-DB-1\": \"PX-101\"}}")]
    InvalidMapping { path: String, reason: String },

    #[error("cannot write to standard input\n  hint: pass a file path to use --write")]
    WriteToStdin,

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid configuration ({0} error(s))")]
    InvalidConfig(usize),

    #[error("{0}")]
    Core(#[from] tix_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// A specialized Result type for tixrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
