//! Vibe CLI entry point
//!
//! This is the main executable for the vibe MCP configuration deployment tool.
//! It handles command-line argument parsing, error display, and deployment
//! execution.
//!
//! The CLI accepts a single deployment target:
//! - `claude` - Deploy to Claude Desktop
//! - `codex` - Deploy to Codex CLI
//! - `gemini` - Deploy to Gemini
//! - `all` - Deploy to every target in turn
//!
//! Run without arguments to pick a target from an interactive menu.

use anyhow::Result;
use clap::Parser;
use vibe::cli;
use vibe::core::user_friendly_error;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    cli.init_logging();
    let verbose = cli.verbose();

    // Execute the deployment
    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            if verbose {
                eprintln!("{e:?}");
            }
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
