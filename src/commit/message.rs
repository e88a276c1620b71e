// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{CommitError, GateError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Header grammar after the issue prefix: `<type>(<scope>): <subject>`.
    ///
    /// The type stops at the first `(` or `:`, the scope at the first `)`.
    /// Exactly one space follows the colon; the subject starts at a
    /// non-whitespace character.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>[^\s(:]+)(?:\((?P<scope>[^)]*)\))?: (?P<subject>\S.*)$").unwrap();
}

/// Marker line git writes above the diff in verbose commit templates.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// The parsed subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Token written before `- `, which may differ from the configured prefix.
    pub issue_prefix: Option<String>,
    /// Commit type (feat, fix, etc.).
    pub commit_type: String,
    /// Scope as written between the parentheses, if any.
    pub scope: Option<String>,
    /// Text after `): `.
    pub subject: String,
}

impl Header {
    /// Parse a subject line against the header grammar.
    ///
    /// Returns `None` when the line does not have the
    /// `<type>(<scope>): <subject>` shape at all. A missing or wrong prefix
    /// is not a parse failure: it shows up as `issue_prefix` not matching
    /// the configured one.
    pub fn parse(line: &str, prefix: &str) -> Option<Self> {
        let (issue_prefix, rest) = split_issue_prefix(line, prefix);
        let captures = HEADER_REGEX.captures(rest)?;

        Some(Self {
            issue_prefix: issue_prefix.map(str::to_string),
            commit_type: captures["type"].to_string(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            subject: captures["subject"].to_string(),
        })
    }

    /// Whether the header carries exactly the given prefix.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.issue_prefix.as_deref() == Some(prefix)
    }

    /// Scope with surrounding whitespace removed, `None` when blank.
    pub fn effective_scope(&self) -> Option<&str> {
        self.scope
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Subject length in characters.
    pub fn subject_len(&self) -> usize {
        self.subject.chars().count()
    }

    /// Render the subject line.
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(ref prefix) = self.issue_prefix {
            result.push_str(prefix);
            result.push_str("- ");
        }

        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        result.push_str(": ");
        result.push_str(&self.subject);

        result
    }
}

/// Split the issue prefix off a subject line.
///
/// The configured prefix is consumed when present. Otherwise a leading token
/// ending in `- ` that holds no `(`, `:` or whitespace is taken as a prefix
/// written wrong.
fn split_issue_prefix<'a>(line: &'a str, prefix: &'a str) -> (Option<&'a str>, &'a str) {
    if let Some(rest) = line
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix("- "))
    {
        return (Some(prefix), rest);
    }

    if let Some(idx) = line.find("- ") {
        let token = &line[..idx];
        let looks_like_prefix = !token.is_empty()
            && !token
                .chars()
                .any(|c| c == '(' || c == ':' || c.is_whitespace());
        if looks_like_prefix {
            return (Some(token), &line[idx + 2..]);
        }
    }

    (None, line)
}

/// A single body line with its 1-based line number in the whole message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLine {
    pub number: usize,
    pub text: String,
}

impl BodyLine {
    /// Whether the line holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Line length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Everything after the subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    /// Blank lines between the subject line and the first body line.
    pub separator_lines: usize,
    /// Body lines from the first to the last non-blank one.
    pub lines: Vec<BodyLine>,
}

impl Body {
    /// Paragraphs in order, each with its lines joined by `\n`.
    pub fn paragraphs(&self) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in &self.lines {
            if line.is_blank() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(&line.text);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n"));
        }

        paragraphs
    }
}

/// Split raw text into its subject line and body.
///
/// `\r\n` line endings are accepted. Trailing blank lines are ignored, so a
/// message ending in a newline has no body.
pub fn split_message(text: &str) -> (&str, Option<Body>) {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let header = lines.first().copied().unwrap_or("");
    let rest = lines.get(1..).unwrap_or(&[]);

    let is_blank = |l: &&str| l.trim().is_empty();
    let (first, last) = match (
        rest.iter().position(|l| !is_blank(l)),
        rest.iter().rposition(|l| !is_blank(l)),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => return (header, None),
    };

    let body_lines = rest[first..=last]
        .iter()
        .enumerate()
        .map(|(i, text)| BodyLine {
            // Line 1 is the header, rest[0] is line 2.
            number: first + i + 2,
            text: text.to_string(),
        })
        .collect();

    (
        header,
        Some(Body {
            separator_lines: first,
            lines: body_lines,
        }),
    )
}

/// Remove `#` comment lines and anything below git's scissors line.
pub fn strip_comments(text: &str) -> String {
    let mut kept = Vec::new();

    for line in text.lines() {
        if line.starts_with('#') {
            if line.contains(SCISSORS) {
                break;
            }
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}

/// A structured commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Parsed subject line.
    pub header: Header,
    /// Optional body.
    pub body: Option<Body>,
}

impl CommitMessage {
    /// Parse a commit message.
    ///
    /// Fails when the text is blank or the subject line does not follow the
    /// header grammar. Rule checks are the validator's job; this only
    /// decomposes.
    pub fn parse(text: &str, prefix: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(GateError::Commit(CommitError::EmptyMessage));
        }

        let (line, body) = split_message(text);
        let header = Header::parse(line, prefix).ok_or_else(|| {
            GateError::Commit(CommitError::InvalidFormat {
                line: line.to_string(),
            })
        })?;

        Ok(Self { header, body })
    }

    /// Format the commit message as a string.
    pub fn format(&self) -> String {
        let mut result = self.header.format();

        if let Some(ref body) = self.body {
            result.push_str("\n\n");
            result.push_str(&body.paragraphs().join("\n\n"));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let header = Header::parse(
            "HLDTDOR- feat(kurumsal-vob): add vob position calculation",
            "HLDTDOR",
        )
        .unwrap();
        assert!(header.has_prefix("HLDTDOR"));
        assert_eq!(header.commit_type, "feat");
        assert_eq!(header.scope.as_deref(), Some("kurumsal-vob"));
        assert_eq!(header.subject, "add vob position calculation");
    }

    #[test]
    fn test_parse_header_without_scope() {
        let header = Header::parse("HLDTDOR- fix: handle race condition", "HLDTDOR").unwrap();
        assert_eq!(header.commit_type, "fix");
        assert!(header.scope.is_none());
        assert!(header.effective_scope().is_none());
    }

    #[test]
    fn test_blank_scope_is_not_effective() {
        let header = Header::parse("HLDTDOR- fix(  ): handle it", "HLDTDOR").unwrap();
        assert_eq!(header.scope.as_deref(), Some("  "));
        assert!(header.effective_scope().is_none());
    }

    #[test]
    fn test_parse_header_missing_prefix() {
        let header = Header::parse("feat(auth): add login", "HLDTDOR").unwrap();
        assert!(header.issue_prefix.is_none());
        assert_eq!(header.commit_type, "feat");
    }

    #[test]
    fn test_parse_header_wrong_prefix() {
        let header = Header::parse("JIRA-42- feat(auth): add login", "HLDTDOR").unwrap();
        assert_eq!(header.issue_prefix.as_deref(), Some("JIRA-42"));
        assert!(!header.has_prefix("HLDTDOR"));
        assert_eq!(header.scope.as_deref(), Some("auth"));
    }

    #[test]
    fn test_dash_inside_subject_is_not_a_prefix() {
        let header = Header::parse("feat(api): add re- entry guard", "HLDTDOR").unwrap();
        assert!(header.issue_prefix.is_none());
        assert_eq!(header.subject, "add re- entry guard");
    }

    #[test]
    fn test_parse_header_malformed() {
        assert!(Header::parse("", "HLDTDOR").is_none());
        assert!(Header::parse("HLDTDOR- just some words", "HLDTDOR").is_none());
        assert!(Header::parse("HLDTDOR- feat(auth):no space", "HLDTDOR").is_none());
        assert!(Header::parse("HLDTDOR- feat (auth): spaced", "HLDTDOR").is_none());
        assert!(Header::parse("HLDTDOR- feat(auth): ", "HLDTDOR").is_none());
        assert!(Header::parse("HLDTDOR- feat(auth):   ", "HLDTDOR").is_none());
        assert!(Header::parse("HLDTDOR- feat(auth):  Add login", "HLDTDOR").is_none());
    }

    #[test]
    fn test_header_format() {
        let header = Header::parse("HLDTDOR- docs(readme): describe install", "HLDTDOR").unwrap();
        assert_eq!(header.format(), "HLDTDOR- docs(readme): describe install");
    }

    #[test]
    fn test_split_without_body() {
        let (header, body) = split_message("HLDTDOR- fix(core): guard null\n");
        assert_eq!(header, "HLDTDOR- fix(core): guard null");
        assert!(body.is_none());
    }

    #[test]
    fn test_split_with_body() {
        let (_, body) = split_message("subject\n\nfirst line\nsecond line\n\nnext paragraph\n\n");
        let body = body.unwrap();
        assert_eq!(body.separator_lines, 1);
        assert_eq!(body.lines.first().unwrap().number, 3);
        assert_eq!(body.lines.last().unwrap().number, 6);
        assert_eq!(
            body.paragraphs(),
            vec!["first line\nsecond line".to_string(), "next paragraph".to_string()]
        );
    }

    #[test]
    fn test_split_counts_separator_lines() {
        let (_, body) = split_message("subject\nbody right away");
        assert_eq!(body.unwrap().separator_lines, 0);

        let (_, body) = split_message("subject\r\n\r\n\r\nbody");
        let body = body.unwrap();
        assert_eq!(body.separator_lines, 2);
        assert_eq!(body.lines[0].text, "body");
        assert_eq!(body.lines[0].number, 4);
    }

    #[test]
    fn test_strip_comments() {
        let text = concat!(
            "HLDTDOR- feat(x): add y\n",
            "# Please enter the commit message\n",
            "\n",
            "body\n",
            "# ------------------------ >8 ------------------------\n",
            "diff --git a b",
        );
        assert_eq!(strip_comments(text), "HLDTDOR- feat(x): add y\n\nbody");
    }

    #[test]
    fn test_commit_message_parse_and_format() {
        let msg = CommitMessage::parse(
            "HLDTDOR- feat(api): add endpoint\n\n\nexplain why\n",
            "HLDTDOR",
        )
        .unwrap();
        assert_eq!(msg.header.commit_type, "feat");
        assert_eq!(
            msg.format(),
            "HLDTDOR- feat(api): add endpoint\n\nexplain why"
        );
    }

    #[test]
    fn test_commit_message_parse_errors() {
        assert!(matches!(
            CommitMessage::parse("  \n", "HLDTDOR"),
            Err(GateError::Commit(CommitError::EmptyMessage))
        ));
        assert!(matches!(
            CommitMessage::parse("not a conventional commit", "HLDTDOR"),
            Err(GateError::Commit(CommitError::InvalidFormat { .. }))
        ));
    }
}
