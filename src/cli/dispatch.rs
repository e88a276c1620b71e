// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use console::style;

use crate::commit::{format_message, strip_comments};
use crate::config::{default, GateConfig};
use crate::error::{CommitError, ConfigError, GateError, Result, ResultExt, ValidationError};
use crate::hooks::{HookManager, HookStatus};
use crate::rules::{RuleId, Validator};

use super::args::{
    CheckArgs, Cli, Commands, ConfigPreset, FmtArgs, HooksAction, HooksArgs, InitArgs,
    MessageSource,
};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        GateConfig::load_from(config_path)?
    } else {
        GateConfig::load()?
    };

    // Terminal detection still decides when color is left on.
    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Fmt(args) => run_fmt(&config, args),
        Commands::Rules => run_rules(&cli),
        Commands::Hooks(args) => run_hooks(&config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Read the message from the argument, the file or standard input.
fn read_message(source: &MessageSource) -> Result<String> {
    let text = if let Some(ref message) = source.message {
        message.clone()
    } else if let Some(ref path) = source.file {
        std::fs::read_to_string(path).map_err(|e| {
            GateError::Commit(CommitError::ReadFailed {
                source_name: path.display().to_string(),
                message: e.to_string(),
            })
        })?
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map_err(|e| {
            GateError::Commit(CommitError::ReadFailed {
                source_name: "stdin".to_string(),
                message: e.to_string(),
            })
        })?;
        buffer
    };

    if source.strip_comments {
        Ok(strip_comments(&text))
    } else {
        Ok(text)
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &GateConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let validator = Validator::new(config.rules.clone())?;

    let is_range = args.rev.as_deref().is_some_and(|rev| rev.contains(".."));
    let results = match args.rev {
        Some(ref rev) if is_range => validator.check_range(rev)?,
        Some(ref rev) => vec![validator.check_commit(rev)?],
        None => vec![validator.validate(&read_message(&args.source)?)],
    };

    if cli.wants_json() {
        let json = match results.as_slice() {
            [single] if !is_range => single.to_json(),
            _ => serde_json::Value::Array(results.iter().map(|r| r.to_json()).collect()),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    } else {
        for result in &results {
            result.print_text(config.ui.hints);
        }
    }

    let count: usize = results.iter().map(|r| r.violations.len()).sum();
    if count > 0 {
        return Err(GateError::Validation(ValidationError::Failed { count }));
    }

    if !cli.wants_json() && args.rev.is_none() {
        println!("{} commit message is valid", style("✓").green().bold());
    }

    Ok(())
}

/// Run the fmt command.
fn run_fmt(config: &GateConfig, args: FmtArgs) -> Result<()> {
    tracing::debug!("Running fmt command with args: {:?}", args);

    config.rules.check()?;
    let text = read_message(&args.source)?;
    let formatted = format_message(&text, &config.rules);

    for change in &formatted.changes {
        eprintln!("  {} {}", style("→").dim(), change);
    }

    match args.source.file {
        Some(ref path) if args.write => {
            if !formatted.is_unchanged() {
                std::fs::write(path, format!("{}\n", formatted.message))
                    .context(format!("Failed to write {}", path.display()))?;
            }
            eprintln!(
                "{} {} ({} change(s))",
                style("✓").green().bold(),
                path.display(),
                formatted.changes.len()
            );
        }
        _ => println!("{}", formatted.message),
    }

    Ok(())
}

/// Run the rules command.
fn run_rules(cli: &Cli) -> Result<()> {
    if cli.wants_json() {
        let json: Vec<serde_json::Value> = RuleId::all()
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "rule": rule,
                    "severity": rule.severity(),
                    "description": rule.description(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    for (index, rule) in RuleId::all().iter().enumerate() {
        println!(
            "{:>2}. {:<24} {:<8} {}",
            index + 1,
            style(rule.code()).cyan(),
            rule.severity(),
            rule.description()
        );
    }

    Ok(())
}

/// Run the hooks command.
fn run_hooks(config: &GateConfig, args: HooksArgs) -> Result<()> {
    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { force } => {
            manager.install(&config.hooks, force)?;
            println!("{} Installed commit-msg hook", style("✓").green().bold());
        }
        HooksAction::Uninstall => {
            manager.uninstall()?;
            println!("{} Uninstalled commit-msg hook", style("✓").green().bold());
        }
        HooksAction::Status => {
            let (icon, label) = match manager.status()? {
                HookStatus::Installed => (style("✓").green(), "installed"),
                HookStatus::Foreign => (style("⚠").yellow(), "installed by another tool"),
                HookStatus::Missing => (style("✗").red(), "not installed"),
            };
            println!("{} commit-msg: {}", icon, label);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("commitgate {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("commitgate.toml");

    if config_path.exists() && !args.force {
        return Err(GateError::Config(ConfigError::InvalidValue {
            key: config_path.display().to_string(),
            message: "Configuration file already exists. Use --force to overwrite.".to_string(),
        }));
    }

    let config_content = match args.preset {
        Some(ConfigPreset::Minimal) => default::minimal_config(),
        Some(ConfigPreset::Strict) => default::strict_config(),
        Some(ConfigPreset::Standard) | None => default::example_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write commitgate.toml")?;

    println!("{} Created commitgate.toml", style("✓").green().bold());

    Ok(())
}
