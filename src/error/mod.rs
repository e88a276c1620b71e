// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitgate.
//!
//! Rule violations are not errors: they are returned as data inside a
//! [`ValidationResult`](crate::rules::ValidationResult). The types here cover
//! everything that stops a call from running at all, such as a broken
//! configuration or an unreadable repository.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitgate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Validation failures surfaced to the CLI
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Commit message handling errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl GateError {
    /// Process exit code for this error.
    ///
    /// A rejected message exits with 1; anything that prevented the check
    /// from running exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::Validation(_) => 1,
            _ => 2,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Validation outcomes that the CLI reports as failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{count} rule violation(s) found")]
    Failed { count: usize },
}

/// Commit message handling errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Subject line does not match '<prefix>- <type>(<scope>): <subject>': {line}")]
    InvalidFormat { line: String },

    #[error("Failed to read commit message from {source_name}: {message}")]
    ReadFailed {
        source_name: String,
        message: String,
    },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for commitgate operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GateError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/commitgate.toml"),
        };
        assert!(err.to_string().contains("/path/to/commitgate.toml"));
    }

    #[test]
    fn test_gate_error_from_config_error() {
        let config_err = ConfigError::MissingRequired {
            key: "rules.prefix".to_string(),
        };
        let err: GateError = config_err.into();
        assert!(err.to_string().contains("rules.prefix"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_validation_failure_exit_code() {
        let err: GateError = ValidationError::Failed { count: 3 }.into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("3 rule violation"));
    }

    #[test]
    fn test_context_wraps_source_message() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let err = io.context("read message").unwrap_err();
        assert_eq!(err.to_string(), "read message: missing file");
    }
}
