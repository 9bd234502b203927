// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tixrs - the library behind the `tix` CLI.
//!
//! `tix` reads a ticket plan written in markdown (or CSV), prepares the
//! tracker's request bodies, resolves dependency links between tickets once
//! they have keys, and writes those keys back into the plan. The parsing and
//! transformation logic lives in [`tix_core`]; this crate adds the command
//! line, configuration and output formatting.
//!
//! # Main Components
//!
//! - [`Cli`] - clap definition of the command line
//! - [`Config`] - `tix.toml` tracker settings
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use tixrs::{run, Cli};
//!
//! let cli = Cli::parse_from(["tix", "parse", "plan.md"]);
//! run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, ConfigCommand, InputArgs, MappingArgs, OutputFormat};
pub use config::{load_config, Config};
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Parse { input, output } => commands::parse::run(&input, output),
        Command::Doc { file } => commands::doc::run(&file),
        Command::Links {
            input,
            mapping,
            output,
        } => commands::links::run(&input, &mapping, output),
        Command::ApplyKeys {
            input,
            mapping,
            write,
        } => commands::apply_keys::run(&input, &mapping, write),
        Command::Payload { input } => commands::payload::run(&input, config),
        Command::Plan { input, output } => commands::plan::run(&input, output, config),
        Command::Config(cmd) => commands::config::run(cmd, config),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
