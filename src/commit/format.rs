// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Mechanical repair of commit messages.
//!
//! Only problems with a single correct fix are touched: subject casing,
//! trailing periods, blank-line layout and over-long body lines. Prefix,
//! type and scope need a human decision and are left as written.

use crate::config::ValidatorConfig;

use super::message::{split_message, Header};

/// Output of [`format_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// The repaired message, without a trailing newline.
    pub message: String,
    /// Human-readable description of each applied change, in order.
    pub changes: Vec<String>,
}

impl Formatted {
    /// Whether the input was already well formed.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Repair the fixable structural problems of a commit message.
///
/// Formatting is idempotent. A subject line that does not parse is kept
/// verbatim apart from trailing whitespace.
pub fn format_message(text: &str, config: &ValidatorConfig) -> Formatted {
    let mut changes = Vec::new();
    let (line, body) = split_message(text);

    let header = match Header::parse(line, &config.prefix) {
        Some(mut header) => {
            fix_subject(&mut header, &mut changes);
            header.format()
        }
        None => line.trim_end().to_string(),
    };

    let mut message = header;

    if let Some(body) = body {
        if body.separator_lines != 1 {
            changes.push(format!(
                "separated body from subject with one blank line (was {})",
                body.separator_lines
            ));
        }

        let mut paragraphs: Vec<Vec<String>> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut collapsed = false;
        let mut previous_blank = false;

        for body_line in &body.lines {
            if body_line.is_blank() {
                if previous_blank {
                    collapsed = true;
                } else if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
                previous_blank = true;
                continue;
            }
            previous_blank = false;

            let text = body_line.text.trim_end();
            if body_line.char_len() > config.max_body_line_length {
                let wrapped = wrap_line(text, config.max_body_line_length);
                if wrapped.len() > 1 {
                    changes.push(format!("wrapped line {}", body_line.number));
                }
                current.extend(wrapped);
            } else {
                current.push(text.to_string());
            }
        }

        if !current.is_empty() {
            paragraphs.push(current);
        }
        if collapsed {
            changes.push("collapsed repeated blank lines in body".to_string());
        }

        let rendered: Vec<String> = paragraphs.into_iter().map(|p| p.join("\n")).collect();

        message.push_str("\n\n");
        message.push_str(&rendered.join("\n\n"));
    }

    Formatted { message, changes }
}

fn fix_subject(header: &mut Header, changes: &mut Vec<String>) {
    let trimmed = header.subject.trim_end().trim_end_matches('.').trim_end();
    if trimmed.len() != header.subject.len() && !trimmed.is_empty() {
        if header.subject.trim_end().ends_with('.') {
            changes.push("removed trailing period from subject".to_string());
        }
        header.subject = trimmed.to_string();
    }

    let mut chars = header.subject.chars();
    if let Some(first) = chars.next() {
        // "API ..." and similar acronyms keep their case.
        let acronym = chars.next().map(char::is_uppercase).unwrap_or(false);
        if first.is_uppercase() && !acronym {
            let rest = &header.subject[first.len_utf8()..];
            header.subject = first.to_lowercase().chain(rest.chars()).collect();
            changes.push("lowercased first letter of subject".to_string());
        }
    }
}

/// Break a line on word boundaries so each piece fits `width` characters.
///
/// Leading indentation is kept, and continuation lines of a `- ` or `* `
/// bullet are indented under the bullet text. A single word longer than
/// `width` ends up alone on its line.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let content = line.trim_start();
    let indent = &line[..line.len() - content.len()];
    let hanging = if content.starts_with("- ") || content.starts_with("* ") {
        format!("{}  ", indent)
    } else {
        indent.to_string()
    };

    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_len = current.chars().count();
    let mut has_word = false;

    for word in content.split_whitespace() {
        let word_len = word.chars().count();
        if has_word && current_len + 1 + word_len > width {
            lines.push(std::mem::replace(&mut current, hanging.clone()));
            current_len = hanging.chars().count();
            has_word = false;
        }
        if has_word {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
        has_word = true;
    }

    if has_word {
        lines.push(current);
    }

    lines
}
