//! Command-line interface for vibe.
//!
//! The CLI takes a single positional target name and deploys the canonical
//! MCP settings to it:
//!
//! ```bash
//! vibe claude           # Deploy to Claude Desktop
//! vibe codex            # Deploy to Codex CLI
//! vibe gemini           # Deploy to Gemini
//! vibe all              # Deploy to all targets
//! vibe -v claude        # Deploy with verbose output
//! ```
//!
//! Run without arguments to choose a target from an interactive menu.
//!
//! The target is parsed as a free-form string and validated by the target
//! lookup, so an unrecognized name reports an unknown-target error with exit
//! code 1 rather than a usage error.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use tracing_subscriber::EnvFilter;

use crate::core::{VibeError, user_friendly_error};
use crate::mcp::targets::{TARGET_NAMES, deploy_to_target};

/// Menu entries offered in interactive mode, paired with the target name
/// each one deploys.
const MENU_CHOICES: &[(&str, &str)] = &[
    ("Claude Desktop", "claude"),
    ("Codex CLI", "codex"),
    ("Gemini", "gemini"),
    ("All targets", "all"),
];

/// Main CLI structure for vibe.
///
/// Verbosity flags control the tracing filter: `--verbose` enables debug
/// breadcrumbs from the locator and loader, `--quiet` suppresses logging
/// entirely. User-facing deployment output is unaffected by either.
#[derive(Parser)]
#[command(
    name = "vibe",
    about = "Deploy MCP configurations to AI coding assistants",
    version,
    after_help = "Examples:\n  \
        vibe claude           Deploy to Claude Desktop\n  \
        vibe codex            Deploy to Codex CLI\n  \
        vibe gemini           Deploy to Gemini\n  \
        vibe all              Deploy to all targets\n  \
        vibe -v claude        Deploy with verbose output\n\n\
        Run without arguments for interactive mode."
)]
pub struct Cli {
    /// Deployment target: claude, codex, gemini, or all (interactive menu
    /// when omitted)
    target: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Whether `--verbose` was given.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Install the tracing subscriber according to the verbosity flags.
    ///
    /// `RUST_LOG` is honored when neither flag is given; the default filter
    /// is `info`.
    pub fn init_logging(&self) {
        let filter = if self.quiet {
            return;
        } else if self.verbose {
            EnvFilter::new("debug")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new("info")
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(true)
            .try_init();
    }

    /// Execute the requested deployment.
    ///
    /// Resolves the target name (prompting interactively when none was
    /// given), then deploys it. `all` deploys every target in fixed order
    /// with per-target failure isolation: each failure is reported as it
    /// happens, the remaining targets still run, and the overall run fails
    /// if any target failed.
    pub fn execute(self) -> Result<()> {
        let target = match &self.target {
            Some(name) => name.to_lowercase(),
            None => prompt_for_target()?.to_string(),
        };

        if target == "all" {
            deploy_all()
        } else {
            deploy_to_target(&target)
        }
    }
}

/// Deploy every target in fixed order, isolating per-target failures.
fn deploy_all() -> Result<()> {
    let mut failed = 0;

    for name in TARGET_NAMES {
        if let Err(e) = deploy_to_target(name) {
            user_friendly_error(e).display();
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(VibeError::Other {
            message: format!("{failed} of {} deployments failed", TARGET_NAMES.len()),
        }
        .into());
    }
    Ok(())
}

/// Interactive mode: choose a deployment target from a numbered menu.
///
/// Fails with a plain error when no interactive terminal is available.
fn prompt_for_target() -> Result<&'static str> {
    println!("{}", "Vibe - MCP Configuration Deployment".bold());
    println!();

    let items: Vec<&str> = MENU_CHOICES.iter().map(|(label, _)| *label).collect();

    let selection = Select::new()
        .with_prompt("Choose a deployment target")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| VibeError::Other {
            message: format!("Terminal not available for interactive mode: {e}"),
        })?;

    Ok(MENU_CHOICES[selection].1)
}
