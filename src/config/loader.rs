// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, GateError, Result};
use std::path::{Path, PathBuf};

use super::schema::{GateConfig, ValidatorConfig};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["commitgate.toml", ".commitgate.toml", ".config/commitgate.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    None
}

/// User-wide configuration file in the XDG config directory, if present.
pub fn global_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("commitgate").join("config.toml");
    path.exists().then_some(path)
}

/// Load configuration from the default locations.
///
/// The user-wide file is the base; a project file found from the current
/// directory is layered on top of it.
pub fn load_config() -> Result<GateConfig> {
    let global = global_config_file()
        .map(|path| load_config_from(&path))
        .transpose()?;
    let project = find_config_file()
        .map(|path| load_config_from(&path))
        .transpose()?;

    match (global, project) {
        (Some(global), Some(project)) => Ok(merge_configs(global, project)),
        (Some(config), None) | (None, Some(config)) => Ok(config),
        (None, None) => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(GateConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<GateConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GateError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GateError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// Only syntax is checked here; rule consistency is checked when a
/// validator is built from the result.
pub fn parse_config(content: &str) -> Result<GateConfig> {
    toml::from_str(content).map_err(|e| {
        GateError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Merge two configurations, with the overlay taking precedence.
///
/// Overlay rule values equal to the built-in default are treated as unset.
pub fn merge_configs(base: GateConfig, overlay: GateConfig) -> GateConfig {
    GateConfig {
        rules: merge_rules_config(base.rules, overlay.rules),
        hooks: overlay.hooks,
        ui: overlay.ui,
    }
}

fn merge_rules_config(base: ValidatorConfig, overlay: ValidatorConfig) -> ValidatorConfig {
    let defaults = ValidatorConfig::default();

    fn pick<T: PartialEq>(base: T, overlay: T, default: &T) -> T {
        if overlay != *default {
            overlay
        } else {
            base
        }
    }

    ValidatorConfig {
        prefix: pick(base.prefix, overlay.prefix, &defaults.prefix),
        allowed_types: pick(base.allowed_types, overlay.allowed_types, &defaults.allowed_types),
        max_subject_length: pick(
            base.max_subject_length,
            overlay.max_subject_length,
            &defaults.max_subject_length,
        ),
        max_body_line_length: pick(
            base.max_body_line_length,
            overlay.max_body_line_length,
            &defaults.max_body_line_length,
        ),
        max_input_length: pick(
            base.max_input_length,
            overlay.max_input_length,
            &defaults.max_input_length,
        ),
        vague_phrases: pick(base.vague_phrases, overlay.vague_phrases, &defaults.vague_phrases),
        imperative_mood: overlay.imperative_mood || base.imperative_mood,
    }
}
