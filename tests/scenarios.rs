// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end checks of the validator and formatter through the public API.

use commitgate::commit::format_message;
use commitgate::config::ValidatorConfig;
use commitgate::rules::{validate, RuleId, Severity};

fn check(text: &str) -> commitgate::ValidationResult {
    validate(text, &ValidatorConfig::default()).unwrap()
}

#[test]
fn conforming_message_is_valid() {
    let result = check("HLDTDOR- feat(kurumsal-vob): add vob position calculation");
    assert!(result.is_valid(), "{:?}", result.violations);
    assert!(result.violations.is_empty());
}

#[test]
fn missing_scope_is_reported_once() {
    let result = check("HLDTDOR- fix: handle race condition");
    assert_eq!(result.rules(), vec![RuleId::MissingScope]);
}

#[test]
fn empty_scope_is_reported_regardless_of_other_fields() {
    for text in [
        "HLDTDOR- fix(): handle race condition",
        "HLDTDOR- fix(  ): Handle race condition.",
        "fix: update",
        "JIRA-12- nope: Bad.",
    ] {
        let result = check(text);
        assert!(result.has(RuleId::MissingScope), "{}: {:?}", text, result.rules());
    }
}

#[test]
fn capitalized_subject_with_period() {
    let result = check("HLDTDOR- feat(auth): Add login support.");
    assert_eq!(
        result.rules(),
        vec![RuleId::SubjectNotLowercase, RuleId::SubjectTrailingPeriod]
    );
}

#[test]
fn empty_message_versus_sentinel() {
    let empty = check("");
    assert_eq!(empty.rules(), vec![RuleId::MalformedSubject]);

    assert!(check("HLDTDOR- chore: empty commit").is_valid());
}

#[test]
fn blank_or_space_led_subject_is_malformed() {
    for text in [
        "HLDTDOR- feat(auth):  ",
        "HLDTDOR- feat(auth):  Add login",
        "HLDTDOR- feat(auth):   Add login support",
    ] {
        let result = check(text);
        assert!(!result.is_valid(), "{:?}", text);
        assert_eq!(result.rules(), vec![RuleId::MalformedSubject], "{:?}", text);
    }
}

#[test]
fn long_body_line_fails_only_body_rule() {
    let paragraph = "a".repeat(120);
    let text = format!("HLDTDOR- feat(core): add new feature\n\n{}", paragraph);
    let result = check(&text);

    assert_eq!(result.rules(), vec![RuleId::BodyLineTooLong]);
    assert_eq!(result.violations[0].line, Some(3));
}

#[test]
fn subject_length_boundary() {
    let prefix = "HLDTDOR- feat(core): ";

    let ok = format!("{}{}", prefix, "a".repeat(72));
    assert!(check(&ok).is_valid());

    let too_long = format!("{}{}", prefix, "a".repeat(73));
    assert_eq!(check(&too_long).rules(), vec![RuleId::SubjectTooLong]);
}

#[test]
fn validation_is_deterministic() {
    let text = "ABC- Feature: Updates.\nno separator\n\n\nx";
    let first = check(text);
    let second = check(text);
    assert_eq!(first, second);
    assert!(!first.violations.is_empty());
}

#[test]
fn violations_follow_check_order() {
    let text = format!(
        "JIRA-1- wip: Update.\nbody starts too early {}",
        "x".repeat(100)
    );
    let result = check(&text);

    assert_eq!(
        result.rules(),
        vec![
            RuleId::MissingPrefix,
            RuleId::UnknownType,
            RuleId::MissingScope,
            RuleId::SubjectNotLowercase,
            RuleId::SubjectTrailingPeriod,
            RuleId::VagueSubject,
            RuleId::BodyBlankLine,
            RuleId::BodyLineTooLong,
        ]
    );

    let order: Vec<usize> = result
        .rules()
        .iter()
        .map(|rule| RuleId::all().iter().position(|r| r == rule).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn malformed_subject_still_checks_body() {
    let text = format!("no structure here\n\n{}", "b".repeat(101));
    let result = check(&text);
    assert_eq!(
        result.rules(),
        vec![RuleId::MalformedSubject, RuleId::BodyLineTooLong]
    );
}

#[test]
fn imperative_mood_is_an_opt_in_warning() {
    let text = "HLDTDOR- feat(api): added pagination";
    assert!(check(text).is_valid());

    let config = ValidatorConfig {
        imperative_mood: true,
        ..Default::default()
    };
    let result = validate(text, &config).unwrap();
    assert_eq!(result.rules(), vec![RuleId::NonImperativeSubject]);
    assert_eq!(result.count(Severity::Warning), 1);
    assert_eq!(result.count(Severity::Error), 0);
}

#[test]
fn custom_prefix_and_types() {
    let config = ValidatorConfig {
        prefix: "ACME".to_string(),
        allowed_types: vec!["feat".to_string()],
        ..Default::default()
    };

    assert!(validate("ACME- feat(ui): add dark mode", &config)
        .unwrap()
        .is_valid());
    assert_eq!(
        validate("HLDTDOR- fix(ui): add dark mode", &config)
            .unwrap()
            .rules(),
        vec![RuleId::MissingPrefix, RuleId::UnknownType]
    );
    assert!(validate("ACME- chore: empty commit", &config)
        .unwrap()
        .is_valid());
}

#[test]
fn formatted_message_passes_fixable_rules() {
    let text = format!(
        "HLDTDOR- feat(auth): Add login support.\n\n\n{}",
        "word ".repeat(40).trim_end()
    );
    assert!(!check(&text).is_valid());

    let formatted = format_message(&text, &ValidatorConfig::default());
    let result = check(&formatted.message);
    assert!(result.is_valid(), "{:?}", result.violations);

    let again = format_message(&formatted.message, &ValidatorConfig::default());
    assert!(again.is_unchanged());
    assert_eq!(again.message, formatted.message);
}
