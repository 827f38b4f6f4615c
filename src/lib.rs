//! Vibe - MCP configuration deployment
//!
//! Vibe copies a canonical MCP (Model Context Protocol) server configuration
//! file into the format and location expected by an AI coding assistant. The
//! canonical file lives in a dotfiles directory as `mcp-settings.json`; each
//! supported assistant consumes it either verbatim or translated into its
//! native configuration syntax.
//!
//! # Supported Targets
//!
//! | Target | Destination | Format |
//! |--------|-------------|--------|
//! | Claude Desktop | `<config dir>/Claude/claude_desktop_config.json` | JSON (verbatim) |
//! | Codex CLI | `~/.codex/config.toml` | TOML (translated) |
//! | Gemini | `~/.gemini/settings.json` | JSON (verbatim) |
//!
//! # Deployment Flow
//!
//! Each deployment runs the same sequence:
//!
//! 1. Locate the dotfiles directory (`DOTFILES_DIR` override, then a fixed
//!    search list under the home directory)
//! 2. Load and parse `mcp-settings.json`
//! 3. Render the document in the target's native format
//! 4. Back up any existing destination file into a sibling `backups/`
//!    directory with a timestamped name
//! 5. Write the new configuration atomically (temp file + rename)
//!
//! The destination is never overwritten without first backing up whatever
//! currently occupies that path, and an interrupted run can never leave a
//! truncated destination file behind.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface and interactive target menu
//! - [`config`] - Dotfiles directory discovery
//! - [`core`] - Error types and user-friendly error reporting
//! - [`mcp`] - Settings document model, format conversion, and deployment
//!   targets
//! - [`utils`] - Atomic file writes and timestamped backups
//!
//! # Source Format (mcp-settings.json)
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "filesystem": {
//!       "command": "npx",
//!       "args": ["-y", "@modelcontextprotocol/server-filesystem"],
//!       "env": { "ROOT": "/tmp" }
//!     }
//!   }
//! }
//! ```
//!
//! Every field of a server entry is optional; an absent field is omitted from
//! every output format rather than defaulted.

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod utils;
