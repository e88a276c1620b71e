// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::{Body, Header};
use crate::config::ValidatorConfig;

use super::violation::{RuleId, RuleViolation};

/// A check over a parsed subject line.
pub type SubjectCheck = fn(&Header, &ValidatorConfig) -> Option<RuleViolation>;

/// Subject line rules in the order they are reported.
///
/// Every rule runs; one failing does not stop the next.
pub const SUBJECT_RULES: &[(RuleId, SubjectCheck)] = &[
    (RuleId::MissingPrefix, check_prefix),
    (RuleId::UnknownType, check_type),
    (RuleId::MissingScope, check_scope),
    (RuleId::SubjectNotLowercase, check_subject_case),
    (RuleId::SubjectTooLong, check_subject_length),
    (RuleId::SubjectTrailingPeriod, check_subject_trailing_period),
    (RuleId::VagueSubject, check_vague_subject),
    (RuleId::NonImperativeSubject, check_imperative_mood),
];

/// Apply all subject line rules.
pub fn apply_subject_rules(header: &Header, config: &ValidatorConfig) -> Vec<RuleViolation> {
    SUBJECT_RULES
        .iter()
        .filter_map(|(_, check)| check(header, config))
        .collect()
}

/// Apply the body rules: separator first, then line lengths top to bottom.
pub fn apply_body_rules(body: &Body, config: &ValidatorConfig) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    if let Some(violation) = check_body_separator(body) {
        violations.push(violation);
    }
    violations.extend(check_body_line_length(body, config));

    violations
}

/// Check the subject line opens with the configured prefix.
fn check_prefix(header: &Header, config: &ValidatorConfig) -> Option<RuleViolation> {
    if header.has_prefix(&config.prefix) {
        return None;
    }

    let message = match header.issue_prefix {
        Some(ref found) => format!(
            "Subject line starts with '{}- ' instead of '{}- '",
            found, config.prefix
        ),
        None => format!("Subject line must start with '{}- '", config.prefix),
    };

    Some(
        RuleViolation::new(RuleId::MissingPrefix, message)
            .at_line(1)
            .with_suggestion(format!("Start the subject line with '{}- '", config.prefix)),
    )
}

/// Check the commit type is in the allowed set.
fn check_type(header: &Header, config: &ValidatorConfig) -> Option<RuleViolation> {
    if config.is_allowed_type(&header.commit_type) {
        return None;
    }

    Some(
        RuleViolation::new(
            RuleId::UnknownType,
            format!("Commit type '{}' is not allowed", header.commit_type),
        )
        .at_line(1)
        .with_suggestion(format!("Use one of: {}", config.allowed_types.join(", "))),
    )
}

/// Check a non-blank scope is present.
fn check_scope(header: &Header, _config: &ValidatorConfig) -> Option<RuleViolation> {
    if header.effective_scope().is_some() {
        return None;
    }

    let message = if header.scope.is_some() {
        "Scope is empty"
    } else {
        "Scope is required but not provided"
    };

    Some(
        RuleViolation::new(RuleId::MissingScope, message)
            .at_line(1)
            .with_suggestion(format!(
                "Add a scope in parentheses: {}(scope): {}",
                header.commit_type, header.subject
            )),
    )
}

/// Check the subject starts lowercase.
fn check_subject_case(header: &Header, _config: &ValidatorConfig) -> Option<RuleViolation> {
    let first_char = header.subject.chars().next()?;

    if first_char.is_uppercase() {
        Some(
            RuleViolation::new(
                RuleId::SubjectNotLowercase,
                "Subject should start with lowercase",
            )
            .at_line(1)
            .with_suggestion("Start the subject with a lowercase letter"),
        )
    } else {
        None
    }
}

/// Check maximum subject length.
fn check_subject_length(header: &Header, config: &ValidatorConfig) -> Option<RuleViolation> {
    let max = config.max_subject_length;
    let len = header.subject_len();

    if len > max {
        Some(
            RuleViolation::new(
                RuleId::SubjectTooLong,
                format!("Subject is too long: {} characters (max: {})", len, max),
            )
            .at_line(1)
            .with_suggestion(format!("Shorten the subject to {} characters or less", max)),
        )
    } else {
        None
    }
}

/// Check the subject does not end with a period.
fn check_subject_trailing_period(
    header: &Header,
    _config: &ValidatorConfig,
) -> Option<RuleViolation> {
    if header.subject.trim_end().ends_with('.') {
        Some(
            RuleViolation::new(
                RuleId::SubjectTrailingPeriod,
                "Subject should not end with a period",
            )
            .at_line(1)
            .with_suggestion("Remove the trailing period"),
        )
    } else {
        None
    }
}

/// Check the subject is not one of the vague phrases.
fn check_vague_subject(header: &Header, config: &ValidatorConfig) -> Option<RuleViolation> {
    let subject = normalize_phrase(&header.subject);

    if config
        .vague_phrases
        .iter()
        .any(|phrase| normalize_phrase(phrase) == subject)
    {
        Some(
            RuleViolation::new(
                RuleId::VagueSubject,
                format!("Subject '{}' is too vague", header.subject.trim()),
            )
            .at_line(1)
            .with_suggestion("Say what changed and why, e.g. 'add retry to payment client'"),
        )
    } else {
        None
    }
}

/// Lowercase, drop trailing periods and collapse whitespace.
fn normalize_phrase(text: &str) -> String {
    text.trim()
        .trim_end_matches('.')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Check if subject starts with imperative mood.
fn check_imperative_mood(header: &Header, config: &ValidatorConfig) -> Option<RuleViolation> {
    if !config.imperative_mood {
        return None;
    }

    let first_word = header.subject.split_whitespace().next()?;
    let lower = first_word.to_lowercase();

    let non_imperative = [
        "added",
        "adding",
        "adds",
        "fixed",
        "fixing",
        "fixes",
        "updated",
        "updating",
        "updates",
        "removed",
        "removing",
        "removes",
        "changed",
        "changing",
        "changes",
        "implemented",
        "implementing",
        "implements",
        "created",
        "creating",
        "creates",
        "refactored",
        "refactoring",
        "refactors",
    ];

    if non_imperative.contains(&lower.as_str()) {
        Some(
            RuleViolation::new(
                RuleId::NonImperativeSubject,
                format!(
                    "Subject should use imperative mood (found '{}')",
                    first_word
                ),
            )
            .at_line(1)
            .with_suggestion(format!(
                "Use imperative form like 'add' instead of '{}'",
                first_word
            )),
        )
    } else {
        None
    }
}

/// Check exactly one blank line separates subject and body.
fn check_body_separator(body: &Body) -> Option<RuleViolation> {
    match body.separator_lines {
        1 => None,
        0 => Some(
            RuleViolation::new(
                RuleId::BodyBlankLine,
                "Body must be separated from the subject line by a blank line",
            )
            .at_line(2)
            .with_suggestion("Insert an empty line after the subject line"),
        ),
        n => Some(
            RuleViolation::new(
                RuleId::BodyBlankLine,
                format!(
                    "Body is separated from the subject line by {} blank lines (expected 1)",
                    n
                ),
            )
            .at_line(2)
            .with_suggestion("Keep a single empty line after the subject line"),
        ),
    }
}

/// Check every body line fits the width limit.
fn check_body_line_length(body: &Body, config: &ValidatorConfig) -> Vec<RuleViolation> {
    let max = config.max_body_line_length;

    body.lines
        .iter()
        .filter(|line| line.char_len() > max)
        .map(|line| {
            RuleViolation::new(
                RuleId::BodyLineTooLong,
                format!(
                    "Body line is too long: {} characters (max: {})",
                    line.char_len(),
                    max
                ),
            )
            .at_line(line.number)
            .with_suggestion(format!("Wrap body text at {} characters", max))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::split_message;

    fn header(line: &str) -> Header {
        Header::parse(line, "HLDTDOR").expect("test header should parse")
    }

    fn body(text: &str) -> Body {
        split_message(text).1.expect("test message should have a body")
    }

    #[test]
    fn test_prefix() {
        let config = ValidatorConfig::default();
        assert!(check_prefix(&header("HLDTDOR- feat(a): add b"), &config).is_none());

        let missing = check_prefix(&header("feat(a): add b"), &config).unwrap();
        assert!(missing.message.contains("must start with 'HLDTDOR- '"));

        let wrong = check_prefix(&header("ABC-1- feat(a): add b"), &config).unwrap();
        assert!(wrong.message.contains("'ABC-1- '"));
    }

    #[test]
    fn test_type_is_case_sensitive() {
        let config = ValidatorConfig::default();
        assert!(check_type(&header("HLDTDOR- feat(a): add b"), &config).is_none());
        assert!(check_type(&header("HLDTDOR- Feat(a): add b"), &config).is_some());
        assert!(check_type(&header("HLDTDOR- feature(a): add b"), &config).is_some());
    }

    #[test]
    fn test_scope() {
        let config = ValidatorConfig::default();
        assert!(check_scope(&header("HLDTDOR- fix(db): close pool"), &config).is_none());

        let absent = check_scope(&header("HLDTDOR- fix: close pool"), &config).unwrap();
        assert_eq!(absent.message, "Scope is required but not provided");

        let empty = check_scope(&header("HLDTDOR- fix(): close pool"), &config).unwrap();
        assert_eq!(empty.message, "Scope is empty");

        assert!(check_scope(&header("HLDTDOR- fix( ): close pool"), &config).is_some());
    }

    #[test]
    fn test_subject_case() {
        let config = ValidatorConfig::default();
        assert!(check_subject_case(&header("HLDTDOR- feat(a): Add b"), &config).is_some());
        assert!(check_subject_case(&header("HLDTDOR- feat(a): add b"), &config).is_none());
        assert!(check_subject_case(&header("HLDTDOR- feat(a): 2fa support"), &config).is_none());
    }

    #[test]
    fn test_subject_length_boundary() {
        let config = ValidatorConfig::default();
        let at_limit = format!("HLDTDOR- feat(a): {}", "a".repeat(72));
        let over_limit = format!("HLDTDOR- feat(a): {}", "a".repeat(73));

        assert!(check_subject_length(&header(&at_limit), &config).is_none());
        assert!(check_subject_length(&header(&over_limit), &config).is_some());
    }

    #[test]
    fn test_subject_length_counts_characters() {
        let config = ValidatorConfig::default();
        let turkish = format!("HLDTDOR- feat(a): {}", "ş".repeat(72));
        assert!(check_subject_length(&header(&turkish), &config).is_none());
    }

    #[test]
    fn test_trailing_period() {
        let config = ValidatorConfig::default();
        assert!(
            check_subject_trailing_period(&header("HLDTDOR- feat(a): add b."), &config).is_some()
        );
        assert!(
            check_subject_trailing_period(&header("HLDTDOR- feat(a): add b"), &config).is_none()
        );
    }

    #[test]
    fn test_vague_subject() {
        let config = ValidatorConfig::default();
        assert!(check_vague_subject(&header("HLDTDOR- fix(a): fix bug"), &config).is_some());
        assert!(check_vague_subject(&header("HLDTDOR- fix(a): Fix  Bug."), &config).is_some());
        assert!(check_vague_subject(
            &header("HLDTDOR- fix(a): fix bug in retry backoff"),
            &config
        )
        .is_none());
    }

    #[test]
    fn test_imperative_mood_opt_in() {
        let mut config = ValidatorConfig::default();
        let added = header("HLDTDOR- feat(a): added new feature");
        assert!(check_imperative_mood(&added, &config).is_none());

        config.imperative_mood = true;
        let violation = check_imperative_mood(&added, &config).unwrap();
        assert_eq!(violation.severity, crate::rules::Severity::Warning);
        assert!(check_imperative_mood(&header("HLDTDOR- feat(a): add new feature"), &config)
            .is_none());
    }

    #[test]
    fn test_body_separator() {
        assert!(check_body_separator(&body("s\n\nbody")).is_none());
        assert!(check_body_separator(&body("s\nbody")).is_some());

        let double = check_body_separator(&body("s\n\n\nbody")).unwrap();
        assert!(double.message.contains("2 blank lines"));
    }

    #[test]
    fn test_body_line_length() {
        let config = ValidatorConfig::default();
        let text = format!("s\n\n{}\n{}\n\n{}", "a".repeat(100), "b".repeat(101), "c".repeat(120));
        let violations = check_body_line_length(&body(&text), &config);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].line, Some(4));
        assert_eq!(violations[1].line, Some(6));
    }

    #[test]
    fn test_rule_table_follows_rule_order() {
        let table: Vec<RuleId> = SUBJECT_RULES.iter().map(|(id, _)| *id).collect();
        let ordered: Vec<RuleId> = RuleId::all()
            .iter()
            .copied()
            .filter(|id| table.contains(id))
            .collect();
        assert_eq!(table, ordered);
    }
}
