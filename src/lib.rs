// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitgate - structural gate for commit messages
//!
//! Checks that a commit message follows
//! `<prefix>- <type>(<scope>): <subject>` with a properly laid out body,
//! and reports every rule it breaks in a fixed order.
//!
//! # Features
//!
//! - **Validator**: Pure, deterministic rule engine over the message text
//! - **Formatter**: Repairs the mechanically fixable problems
//! - **History**: Checks commits and ranges already in a repository
//! - **Git Hooks**: Installs a `commit-msg` hook that runs the gate
//!
//! # Example
//!
//! ```
//! use commitgate::config::ValidatorConfig;
//! use commitgate::rules::{validate, RuleId};
//!
//! let config = ValidatorConfig::default();
//!
//! let result = validate("HLDTDOR- feat(parser): add header grammar", &config).unwrap();
//! assert!(result.is_valid());
//!
//! let result = validate("HLDTDOR- feat: Update.", &config).unwrap();
//! assert_eq!(
//!     result.rules(),
//!     vec![
//!         RuleId::MissingScope,
//!         RuleId::SubjectNotLowercase,
//!         RuleId::SubjectTrailingPeriod,
//!         RuleId::VagueSubject,
//!     ]
//! );
//! ```

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

pub use config::{GateConfig, ValidatorConfig};
pub use error::{GateError, Result};
pub use rules::{validate, RuleId, RuleViolation, Severity, ValidationResult, Validator};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitgate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = GIT_SHA.map(|sha| &sha[..7.min(sha.len())]);
        match (short, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, sha, date),
            (Some(sha), None) => format!("{} ({})", VERSION, sha),
            _ => VERSION.to_string(),
        }
    }
}
