// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Validation is a pure function of the message text and a
//! [`ValidatorConfig`](crate::config::ValidatorConfig): every rule runs
//! independently and every violation is reported, in a fixed order.

mod builtin;
mod engine;
mod violation;

pub use builtin::{apply_body_rules, apply_subject_rules, SubjectCheck, SUBJECT_RULES};
pub use engine::{validate, Validator};
pub use violation::{RuleId, RuleViolation, Severity, ValidationResult};
