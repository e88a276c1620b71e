// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use console::{style, Style};
use serde::Serialize;

/// Identifies one structural rule.
///
/// Variants are declared in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    InputTooLarge,
    MalformedSubject,
    MissingPrefix,
    UnknownType,
    MissingScope,
    SubjectNotLowercase,
    SubjectTooLong,
    SubjectTrailingPeriod,
    VagueSubject,
    NonImperativeSubject,
    BodyBlankLine,
    BodyLineTooLong,
}

impl RuleId {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            RuleId::InputTooLarge => "input-too-large",
            RuleId::MalformedSubject => "malformed-subject",
            RuleId::MissingPrefix => "missing-prefix",
            RuleId::UnknownType => "unknown-type",
            RuleId::MissingScope => "missing-scope",
            RuleId::SubjectNotLowercase => "subject-not-lowercase",
            RuleId::SubjectTooLong => "subject-too-long",
            RuleId::SubjectTrailingPeriod => "subject-trailing-period",
            RuleId::VagueSubject => "vague-subject",
            RuleId::NonImperativeSubject => "non-imperative-subject",
            RuleId::BodyBlankLine => "body-blank-line",
            RuleId::BodyLineTooLong => "body-line-too-long",
        }
    }

    /// One-line description of what the rule enforces.
    pub fn description(&self) -> &'static str {
        match self {
            RuleId::InputTooLarge => "Message must not exceed the input size bound",
            RuleId::MalformedSubject => {
                "Subject line must read '<prefix>- <type>(<scope>): <subject>'"
            }
            RuleId::MissingPrefix => "Subject line must start with the configured prefix",
            RuleId::UnknownType => "Commit type must be one of the allowed types",
            RuleId::MissingScope => "Scope must be present and non-empty",
            RuleId::SubjectNotLowercase => "Subject must start with a lowercase letter",
            RuleId::SubjectTooLong => "Subject must fit the maximum subject length",
            RuleId::SubjectTrailingPeriod => "Subject must not end with a period",
            RuleId::VagueSubject => "Subject must not be a vague phrase",
            RuleId::NonImperativeSubject => "Subject should open with an imperative verb",
            RuleId::BodyBlankLine => "Body must follow exactly one blank line",
            RuleId::BodyLineTooLong => "Body lines must fit the maximum body line length",
        }
    }

    /// Severity reported for violations of this rule.
    pub fn severity(&self) -> Severity {
        match self {
            RuleId::NonImperativeSubject => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// All rules in check order.
    pub fn all() -> &'static [RuleId] {
        &[
            RuleId::InputTooLarge,
            RuleId::MalformedSubject,
            RuleId::MissingPrefix,
            RuleId::UnknownType,
            RuleId::MissingScope,
            RuleId::SubjectNotLowercase,
            RuleId::SubjectTooLong,
            RuleId::SubjectTrailingPeriod,
            RuleId::VagueSubject,
            RuleId::NonImperativeSubject,
            RuleId::BodyBlankLine,
            RuleId::BodyLineTooLong,
        ]
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    /// Rule that was violated.
    pub rule: RuleId,
    /// Human-readable message.
    pub message: String,
    /// Severity of the violation.
    pub severity: Severity,
    /// 1-based line the violation refers to.
    pub line: Option<usize>,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
}

impl RuleViolation {
    /// Create a violation with the rule's default severity.
    pub fn new(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
            severity: rule.severity(),
            line: None,
            suggestion: None,
        }
    }

    /// Set the line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Format the violation for terminal output.
    pub fn format(&self, hints: bool) -> String {
        let (prefix, code_style) = match self.severity {
            Severity::Error => (style("✗").red().bold(), Style::new().red()),
            Severity::Warning => (style("⚠").yellow().bold(), Style::new().yellow()),
        };

        let location = self
            .line
            .map(|line| format!("{}:", line))
            .unwrap_or_default();

        let mut output = format!(
            "{} {}{} {}",
            prefix,
            style(location).dim(),
            code_style.apply_to(self.rule.code()),
            self.message
        );

        if hints {
            if let Some(ref suggestion) = self.suggestion {
                output.push_str(&format!(
                    "\n  {} {}",
                    style("→").dim(),
                    style(suggestion).dim()
                ));
            }
        }

        output
    }
}

/// Result of validating one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// First line of the validated message.
    pub subject_line: String,
    /// Commit SHA if validating an existing commit.
    pub commit_sha: Option<String>,
    /// Violations in check order.
    pub violations: Vec<RuleViolation>,
}

impl ValidationResult {
    /// Create an empty result for the given subject line.
    pub fn new(subject_line: impl Into<String>) -> Self {
        Self {
            subject_line: subject_line.into(),
            commit_sha: None,
            violations: Vec::new(),
        }
    }

    /// True iff no violation was found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Rule ids in report order.
    pub fn rules(&self) -> Vec<RuleId> {
        self.violations.iter().map(|v| v.rule).collect()
    }

    /// Whether a violation of the given rule was reported.
    pub fn has(&self, rule: RuleId) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    /// Number of violations with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// Print in text format.
    pub fn print_text(&self, hints: bool) {
        if let Some(ref sha) = self.commit_sha {
            let short_sha = &sha[..7.min(sha.len())];
            let status = if self.is_valid() {
                style("✓").green().bold()
            } else {
                style("✗").red().bold()
            };
            println!("{} {} {}", status, style(short_sha).cyan(), self.subject_line);
        }

        for violation in &self.violations {
            println!("  {}", violation.format(hints));
        }
    }

    /// JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "subject": self.subject_line,
            "violations": self.violations,
        })
    }
}
