// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message validation.

use crate::commit::{split_message, Header};
use crate::config::ValidatorConfig;
use crate::error::{ConfigError, Result};
use crate::git;

use super::builtin::{apply_body_rules, apply_subject_rules};
use super::violation::{RuleId, RuleViolation, ValidationResult};

/// Validate a commit message against a configuration.
///
/// Malformed messages come back as violations. The only error is a
/// configuration that fails [`ValidatorConfig::check`].
pub fn validate(
    text: &str,
    config: &ValidatorConfig,
) -> std::result::Result<ValidationResult, ConfigError> {
    config.check()?;
    Ok(run_rules(text, config))
}

/// Validator bound to a checked configuration.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator, refusing an inconsistent configuration.
    pub fn new(config: ValidatorConfig) -> std::result::Result<Self, ConfigError> {
        config.check()?;
        Ok(Self { config })
    }

    /// The configuration this validator runs with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a commit message.
    pub fn validate(&self, text: &str) -> ValidationResult {
        run_rules(text, &self.config)
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<ValidationResult> {
        let (sha, message) = git::get_commit(reference)?;
        let mut result = self.validate(&message);
        result.commit_sha = Some(sha);
        Ok(result)
    }

    /// Check a range of commits, newest first.
    pub fn check_range(&self, range: &str) -> Result<Vec<ValidationResult>> {
        let commits = git::get_commit_range(range)?;
        tracing::debug!("Checking {} commit(s) in {}", commits.len(), range);

        Ok(commits
            .into_iter()
            .map(|(sha, message)| {
                let mut result = self.validate(&message);
                result.commit_sha = Some(sha);
                result
            })
            .collect())
    }
}

fn run_rules(text: &str, config: &ValidatorConfig) -> ValidationResult {
    let first_line = text.split('\n').next().unwrap_or("");
    let mut result = ValidationResult::new(first_line.trim_end_matches('\r'));

    // Byte length bounds the character count from above.
    let length = if text.len() > config.max_input_length {
        text.chars().count()
    } else {
        0
    };
    if length > config.max_input_length {
        result.violations.push(
            RuleViolation::new(
                RuleId::InputTooLarge,
                format!(
                    "Message is too large: {} characters (max: {})",
                    length, config.max_input_length
                ),
            )
            .with_suggestion("Move details to the pull request or issue description"),
        );
        return result;
    }

    if is_sentinel(text, config) {
        return result;
    }

    if text.trim().is_empty() {
        result.violations.push(
            RuleViolation::new(RuleId::MalformedSubject, "Commit message is empty")
                .at_line(1)
                .with_suggestion(format!(
                    "Use '{}' when there is nothing to describe",
                    config.sentinel()
                )),
        );
        return result;
    }

    let (line, body) = split_message(text);
    match Header::parse(line, &config.prefix) {
        Some(header) => result
            .violations
            .extend(apply_subject_rules(&header, config)),
        None => result.violations.push(
            RuleViolation::new(
                RuleId::MalformedSubject,
                format!(
                    "Subject line does not match '{}- <type>(<scope>): <subject>'",
                    config.prefix
                ),
            )
            .at_line(1)
            .with_suggestion(format!(
                "Example: {}- feat(payments): add refund endpoint",
                config.prefix
            )),
        ),
    }

    if let Some(body) = body {
        result.violations.extend(apply_body_rules(&body, config));
    }

    tracing::debug!(
        "Validated '{}': {} violation(s)",
        result.subject_line,
        result.violations.len()
    );

    result
}

/// The sentinel, optionally followed by one line ending.
fn is_sentinel(text: &str, config: &ValidatorConfig) -> bool {
    let text = text
        .strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text);
    text == config.sentinel()
}
