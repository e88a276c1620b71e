// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and the files written by `init`.

use super::schema::GateConfig;

/// Get the default configuration.
pub fn default_config() -> GateConfig {
    GateConfig::default()
}

/// Smallest useful configuration: only the prefix is spelled out.
pub fn minimal_config() -> &'static str {
    r#"# commitgate configuration (minimal)
[rules]
prefix = "HLDTDOR"
"#
}

/// Defaults plus the imperative-mood heuristic, for CI gates.
pub fn strict_config() -> &'static str {
    r#"# commitgate configuration (strict)
[rules]
prefix = "HLDTDOR"
allowed_types = ["feat", "fix", "refactor", "perf", "test", "docs", "chore", "revert"]
max_subject_length = 72
max_body_line_length = 100
imperative_mood = true

[hooks]
strip_comments = true
"#
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commitgate configuration

# Subject line: <prefix>- <type>(<scope>): <subject>
[rules]
prefix = "HLDTDOR"
allowed_types = ["feat", "fix", "refactor", "perf", "test", "docs", "chore", "revert"]
max_subject_length = 72
max_body_line_length = 100
max_input_length = 10000
imperative_mood = false
vague_phrases = [
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

# commit-msg hook
[hooks]
strip_comments = true
args = []

# Terminal output
[ui]
color = true
hints = true
"#
}
