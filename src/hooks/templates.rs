// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg hook script generation.

use crate::config::HooksConfig;

/// Marker written into every hook commitgate generates.
pub const HOOK_MARKER: &str = "commitgate commit-msg hook";

/// File name of the hook inside `.git/hooks`.
pub const HOOK_FILENAME: &str = "commit-msg";

/// Generator for the commit-msg hook script.
#[derive(Debug, Clone)]
pub struct HookTemplate<'a> {
    settings: &'a HooksConfig,
}

impl<'a> HookTemplate<'a> {
    /// Create a template from hook settings.
    pub fn new(settings: &'a HooksConfig) -> Self {
        Self { settings }
    }

    /// Render the POSIX shell script.
    pub fn generate(&self) -> String {
        let mut command = String::from("commitgate check --file \"$1\"");
        if self.settings.strip_comments {
            command.push_str(" --strip-comments");
        }
        for arg in &self.settings.args {
            command.push(' ');
            command.push_str(&shell_quote(arg));
        }

        format!(
            "#!/bin/sh\n\
             # {marker}\n\
             # Generated by commitgate v{version}. Remove with: commitgate hooks uninstall\n\
             exec {command}\n",
            marker = HOOK_MARKER,
            version = crate::version::VERSION,
            command = command,
        )
    }
}

/// Single-quote an argument for `sh`.
fn shell_quote(arg: &str) -> String {
    if !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_=./:".contains(c))
    {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
