// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// commitgate - structural gate for commit messages
///
/// Checks that every commit message reads
/// `<prefix>- <type>(<scope>): <subject>` and that its body is laid out
/// properly. Exits with 1 when a message is rejected.
#[derive(Parser, Debug)]
#[command(name = "commitgate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Structural gate for commit messages", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "COMMITGATE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a commit message (default command)
    Check(CheckArgs),

    /// Repair the mechanically fixable problems of a message
    Fmt(FmtArgs),

    /// List the rules in the order they are checked
    Rules,

    /// Manage the commit-msg git hook
    Hooks(HooksArgs),

    /// Initialize commitgate configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Where to read a message from. Standard input when nothing is given.
#[derive(Args, Debug, Default, Clone)]
pub struct MessageSource {
    /// Message text
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// File holding the message (e.g. .git/COMMIT_EDITMSG)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Drop '#' comment lines and everything below git's scissors line
    #[arg(long)]
    pub strip_comments: bool,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: MessageSource,

    /// Check an existing commit or an `a..b` range instead
    #[arg(long, conflicts_with_all = ["message", "file"])]
    pub rev: Option<String>,
}

/// Arguments for the fmt command.
#[derive(Parser, Debug, Default, Clone)]
pub struct FmtArgs {
    #[command(flatten)]
    pub source: MessageSource,

    /// Rewrite the file in place instead of printing
    #[arg(short, long, requires = "file")]
    pub write: bool,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install the commit-msg hook
    Install {
        /// Replace a hook installed by another tool (it is backed up)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long, value_enum)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Only the prefix
    Minimal,
    /// Every option with its default value (recommended)
    Standard,
    /// Standard plus the imperative-mood check
    Strict,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }

    /// Whether JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}
