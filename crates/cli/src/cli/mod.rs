// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

pub use args::{InputArgs, MappingArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "tix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Turn a markdown ticket plan into issue tracker tickets and links")]
#[command(
    long_about = "Turn a markdown ticket plan into issue tracker tickets and links.\n\n\
    Parses ticket headings out of a plan, builds the tracker's request bodies, \
    resolves dependency links, and records the assigned keys back in the plan."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the discovered tix.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Tickets
    // ─────────────────────────────────────────────────────────────────────────
    /// Parse tickets from a plan (markdown or CSV)
    #[command(after_help = colors::examples("\
Examples:
  tix parse plan.md                  List tickets with their fields
  tix parse plan.md -o json          Print tickets as JSON
  tix parse tickets.csv              Read the CSV layout
  cat plan.md | tix parse -          Read from standard input"))]
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Convert a markdown snippet to a structured document (JSON)
    #[command(after_help = colors::examples("\
Examples:
  tix doc notes.md                    Print the document for a file
  echo '- [ ] a' | tix doc -          Convert standard input"))]
    Doc {
        /// Markdown file, or - for standard input
        file: String,
    },

    /// Resolve dependency links from a key mapping
    Links {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        mapping: MappingArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Write assigned keys back into the plan
    #[command(after_help = colors::examples("\
Examples:
  tix apply-keys plan.md --mapping keys.json           Print the annotated plan
  tix apply-keys plan.md --mapping keys.json --write   Update plan.md in place"))]
    ApplyKeys {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        mapping: MappingArgs,

        /// Overwrite the input file instead of printing
        #[arg(long, short = 'w')]
        write: bool,
    },

    /// Print tracker create-issue requests, one JSON object per line
    Payload {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Dry-run the full import with placeholder keys
    Plan {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Show or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration and where it came from
    Show,

    /// Validate a config file (defaults to the discovered one)
    Validate {
        /// Config file to check
        path: Option<PathBuf>,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
