// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by every command that
//! reads a plan or a key mapping.

use std::path::PathBuf;

use clap::Args;
use tix_core::SourceFormat;

fn parse_format(s: &str) -> Result<SourceFormat, String> {
    s.parse().map_err(|e: tix_core::Error| e.to_string())
}

/// A plan document and its format.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// Plan file, or - for standard input
    pub file: String,

    /// Input format (md, csv); detected from the extension when omitted
    #[arg(long, value_parser = parse_format)]
    pub format: Option<SourceFormat>,
}

impl InputArgs {
    pub fn new(file: impl Into<String>) -> Self {
        InputArgs {
            file: file.into(),
            format: None,
        }
    }

    /// The explicit format, else the one implied by the file name.
    pub fn source_format(&self) -> SourceFormat {
        self.format
            .unwrap_or_else(|| SourceFormat::detect(std::path::Path::new(&self.file)))
    }

    pub fn is_stdin(&self) -> bool {
        self.file == "-"
    }
}

/// A JSON file mapping logical keys to tracker keys.
#[derive(Args, Clone, Debug)]
pub struct MappingArgs {
    /// JSON object of logical key to tracker key
    #[arg(long, short = 'm', value_name = "JSON")]
    pub mapping: PathBuf,
}
