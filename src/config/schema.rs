// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from commitgate.toml.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Type used by the sentinel message.
pub const SENTINEL_TYPE: &str = "chore";

/// Subject used by the sentinel message.
pub const SENTINEL_SUBJECT: &str = "empty commit";

/// The main configuration structure for commitgate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Validator rule configuration.
    pub rules: ValidatorConfig,

    /// Hook configuration.
    pub hooks: HooksConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl GateConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration consumed by the validator.
///
/// Built once per process and passed explicitly into every validation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Literal that must open every subject line, followed by `- `.
    pub prefix: String,

    /// Closed set of allowed commit types. Matching is case-sensitive.
    pub allowed_types: Vec<String>,

    /// Maximum subject length in characters (inclusive).
    pub max_subject_length: usize,

    /// Maximum body line length in characters (inclusive).
    pub max_body_line_length: usize,

    /// Inputs longer than this many characters are rejected outright.
    pub max_input_length: usize,

    /// Subjects that say nothing about the change.
    pub vague_phrases: Vec<String>,

    /// Flag subjects opening with a non-imperative verb form.
    pub imperative_mood: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            prefix: "HLDTDOR".to_string(),
            allowed_types: [
                "feat", "fix", "refactor", "perf", "test", "docs", "chore", "revert",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
            max_subject_length: 72,
            max_body_line_length: 100,
            max_input_length: 10_000,
            vague_phrases: [
                "update",
                "updates",
                "update code",
                "update files",
                "fix bug",
                "fix bugs",
                "fix issue",
                "fix issues",
                "changes",
                "minor changes",
                "small fix",
                "misc",
                "wip",
                "various fixes",
                "cleanup",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            imperative_mood: false,
        }
    }
}

impl ValidatorConfig {
    /// Check that the configuration is internally consistent.
    ///
    /// The validator refuses to run on a configuration that fails here.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "rules.prefix".to_string(),
            });
        }
        if self.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                key: "rules.prefix".to_string(),
                message: format!("'{}' must not contain whitespace", self.prefix),
            });
        }
        if self.allowed_types.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "rules.allowed_types".to_string(),
                message: "at least one commit type is required".to_string(),
            });
        }
        if let Some(bad) = self
            .allowed_types
            .iter()
            .find(|t| t.is_empty() || t.chars().any(|c| c.is_whitespace() || c == '(' || c == ':'))
        {
            return Err(ConfigError::InvalidValue {
                key: "rules.allowed_types".to_string(),
                message: format!("'{}' is not a usable commit type", bad),
            });
        }

        for (key, value) in [
            ("rules.max_subject_length", self.max_subject_length),
            ("rules.max_body_line_length", self.max_body_line_length),
            ("rules.max_input_length", self.max_input_length),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }

        Ok(())
    }

    /// The single message accepted when there is no change to describe.
    pub fn sentinel(&self) -> String {
        format!("{}- {}: {}", self.prefix, SENTINEL_TYPE, SENTINEL_SUBJECT)
    }

    /// Whether a commit type belongs to the allowed set.
    pub fn is_allowed_type(&self, commit_type: &str) -> bool {
        self.allowed_types.iter().any(|t| t == commit_type)
    }
}

/// Hooks configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Strip `#` comment lines from message files before checking.
    pub strip_comments: bool,

    /// Additional arguments passed to `commitgate check` by the hook.
    pub args: Vec<String>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            strip_comments: true,
            args: Vec::new(),
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to show fix suggestions under each violation.
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            hints: true,
        }
    }
}
