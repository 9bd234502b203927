// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker configuration.
//!
//! Configuration lives in `tix.toml`:
//!
//! ```toml
//! [jira]
//! default_project_key = "PX"
//!
//! [jira.custom_fields]
//! story_points = "customfield_10115"
//! ```
//!
//! The file is looked up in this order: `--config`, `$TIX_CONFIG`, the
//! nearest `tix.toml` walking up from the working directory, then
//! `<user config dir>/tix/tix.toml`. Without any file the defaults apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tix_core::payload::{DEFAULT_PROJECT_KEY, DEFAULT_STORY_POINTS_FIELD};
use tix_core::JiraSettings;

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "tix.toml";
const CONFIG_DIR_NAME: &str = "tix";
const CUSTOM_FIELD_PREFIX: &str = "customfield_";

/// Contents of `tix.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracker settings; absent in a file that only exists to mark a project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraConfig {
    /// Project used for tickets without a parent.
    pub default_project_key: String,
    pub custom_fields: CustomFields,
}

impl Default for JiraConfig {
    fn default() -> Self {
        JiraConfig {
            default_project_key: DEFAULT_PROJECT_KEY.to_string(),
            custom_fields: CustomFields::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomFields {
    /// Custom field id that stores story points.
    pub story_points: String,
}

impl Default for CustomFields {
    fn default() -> Self {
        CustomFields {
            story_points: DEFAULT_STORY_POINTS_FIELD.to_string(),
        }
    }
}

/// Problems found by [`Config::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Config {
    /// Parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Parses configuration text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Settings handed to payload building.
    pub fn settings(&self) -> JiraSettings {
        let jira = self.jira.clone().unwrap_or_default();
        JiraSettings {
            default_project_key: jira.default_project_key,
            story_points_field: jira.custom_fields.story_points,
        }
    }

    /// Checks values the tracker would reject.
    pub fn validate(&self) -> Validation {
        let mut validation = Validation::default();
        let Some(jira) = &self.jira else {
            validation
                .warnings
                .push("no [jira] section, using default tracker settings".to_string());
            return validation;
        };

        if !jira.custom_fields.story_points.starts_with(CUSTOM_FIELD_PREFIX) {
            validation.errors.push(format!(
                "jira.custom_fields.story_points must start with '{}'",
                CUSTOM_FIELD_PREFIX
            ));
        }

        let key = &jira.default_project_key;
        let has_upper = key.chars().any(char::is_uppercase);
        let has_lower = key.chars().any(char::is_lowercase);
        if !has_upper || has_lower {
            validation
                .errors
                .push("jira.default_project_key must be uppercase".to_string());
        } else if !(2..=10).contains(&key.chars().count()) {
            validation
                .errors
                .push("jira.default_project_key must be 2-10 characters".to_string());
        }

        validation
    }
}

/// Effective configuration and the file it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
}

/// Finds the nearest `tix.toml`, walking up from `start`.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Loads the effective configuration.
///
/// An explicit path must exist. Discovered files are optional: without one
/// the defaults are returned and a warning is logged.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let explicit = explicit.map(Path::to_path_buf).or_else(env::config_path);
    let path = match explicit {
        Some(path) => Some(path),
        None => find_config_from(&std::env::current_dir()?).or_else(user_config_path),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let config = Config::load(&path)?;
            Ok(LoadedConfig {
                config,
                path: Some(path),
            })
        }
        None => {
            tracing::warn!("no config file found, using defaults");
            Ok(LoadedConfig::default())
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
