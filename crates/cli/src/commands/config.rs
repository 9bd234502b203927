// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::ConfigCommand;
use crate::colors;
use crate::config::{load_config, Config, LoadedConfig, Validation};
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand, config: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let loaded = load_config(config)?;
            run_show(&loaded, &mut std::io::stdout().lock())
        }
        ConfigCommand::Validate { path } => {
            let loaded = match path.as_deref() {
                Some(path) => LoadedConfig {
                    config: Config::load(path)?,
                    path: Some(path.to_path_buf()),
                },
                None => load_config(config)?,
            };
            run_validate(&loaded, &mut std::io::stdout().lock())
        }
    }
}

fn source_label(loaded: &LoadedConfig) -> String {
    match &loaded.path {
        Some(path) => path.display().to_string(),
        None => "defaults".to_string(),
    }
}

/// Prints the effective configuration as TOML, defaults filled in.
pub(crate) fn run_show(loaded: &LoadedConfig, out: &mut impl Write) -> Result<()> {
    let effective = Config {
        jira: Some(loaded.config.jira.clone().unwrap_or_default()),
    };
    let text = toml::to_string_pretty(&effective)
        .map_err(|e| Error::Config(format!("failed to render config: {}", e)))?;
    writeln!(out, "# source: {}", source_label(loaded))?;
    write!(out, "{}", text)?;
    Ok(())
}

/// Reports problems; fails when any error was found.
pub(crate) fn run_validate(loaded: &LoadedConfig, out: &mut impl Write) -> Result<()> {
    let Validation { errors, warnings } = loaded.config.validate();
    for warning in &warnings {
        eprintln!("{} {}", colors::warning_prefix(), warning);
    }
    for error in &errors {
        eprintln!("error: {}", error);
    }
    if !errors.is_empty() {
        return Err(Error::InvalidConfig(errors.len()));
    }
    writeln!(out, "{}: configuration is valid", source_label(loaded))?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
