//! Deployment targets for supported AI coding assistants.
//!
//! Each assistant has its own expected config file path and format. The
//! target set is fixed and small, so it is modeled as a closed enum of
//! concrete targets sharing the [`DeployTarget`] capability contract rather
//! than open-ended dynamic dispatch.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{McpSettings, convert};
use crate::config;
use crate::core::VibeError;
use crate::utils::backup::create_backup;
use crate::utils::fs::{ensure_dir, safe_write};

/// Target names accepted on the command line, in `all` deployment order.
pub const TARGET_NAMES: &[&str] = &["claude", "codex", "gemini"];

/// Capability contract shared by all deployment targets.
///
/// A target knows its display name, its destination file, and how to render
/// the settings document in its native format. [`DeployTarget::deploy`] is
/// the shared pipeline: render, ensure the destination directory, back up
/// the existing file, write atomically.
pub trait DeployTarget {
    /// Display name shown in deployment output (e.g., "Claude Desktop").
    fn name(&self) -> &str;

    /// Destination configuration file for this target.
    fn config_path(&self) -> &Path;

    /// Render the settings document in this target's native format.
    fn render(&self, settings: &McpSettings) -> Result<String>;

    /// Deploy the settings document, returning the written path.
    ///
    /// Rendering failures abort before the filesystem is touched; backup
    /// failures abort before the destination is overwritten; and the final
    /// write is atomic, so an interrupt never leaves a truncated file.
    fn deploy(&self, settings: &McpSettings) -> Result<PathBuf> {
        let content = self.render(settings)?;
        let dest = self.config_path();

        if let Some(parent) = dest.parent() {
            ensure_dir(parent).map_err(|e| VibeError::DeploymentFailed {
                operation: "create destination directory".to_string(),
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        if let Some(backup_path) = create_backup(dest)? {
            println!("{} Backed up to: {}", "✓".green(), backup_path.display());
        }

        safe_write(dest, &content).map_err(|e| VibeError::DeploymentFailed {
            operation: "write configuration".to_string(),
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!("wrote {} bytes to {}", content.len(), dest.display());
        Ok(dest.to_path_buf())
    }
}

/// Claude Desktop: verbatim JSON in the platform configuration directory.
#[derive(Debug)]
pub struct ClaudeTarget {
    config_path: PathBuf,
}

impl ClaudeTarget {
    /// Create a target pointing at the real Claude Desktop config location.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .context("could not determine the platform configuration directory")?;
        Ok(Self {
            config_path: config_dir.join("Claude").join("claude_desktop_config.json"),
        })
    }

    /// Create a target with an explicit destination, for tests.
    pub fn with_config_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

impl DeployTarget for ClaudeTarget {
    fn name(&self) -> &str {
        "Claude Desktop"
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn render(&self, settings: &McpSettings) -> Result<String> {
        convert::render_verbatim(settings)
    }
}

/// Codex CLI: settings translated into `~/.codex/config.toml`.
#[derive(Debug)]
pub struct CodexTarget {
    config_path: PathBuf,
}

impl CodexTarget {
    /// Create a target pointing at the real Codex CLI config location.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().context("could not determine the home directory")?;
        Ok(Self {
            config_path: home.join(".codex").join("config.toml"),
        })
    }

    /// Create a target with an explicit destination, for tests.
    pub fn with_config_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

impl DeployTarget for CodexTarget {
    fn name(&self) -> &str {
        "Codex CLI"
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn render(&self, settings: &McpSettings) -> Result<String> {
        convert::render_codex_toml(settings)
    }
}

/// Gemini: verbatim JSON in `~/.gemini/settings.json`.
#[derive(Debug)]
pub struct GeminiTarget {
    config_path: PathBuf,
}

impl GeminiTarget {
    /// Create a target pointing at the real Gemini config location.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().context("could not determine the home directory")?;
        Ok(Self {
            config_path: home.join(".gemini").join("settings.json"),
        })
    }

    /// Create a target with an explicit destination, for tests.
    pub fn with_config_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

impl DeployTarget for GeminiTarget {
    fn name(&self) -> &str {
        "Gemini"
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn render(&self, settings: &McpSettings) -> Result<String> {
        convert::render_verbatim(settings)
    }
}

/// Closed set of supported deployment targets.
#[derive(Debug)]
pub enum ConcreteTarget {
    /// Claude Desktop target
    Claude(ClaudeTarget),
    /// Codex CLI target
    Codex(CodexTarget),
    /// Gemini target
    Gemini(GeminiTarget),
}

impl DeployTarget for ConcreteTarget {
    fn name(&self) -> &str {
        match self {
            Self::Claude(t) => t.name(),
            Self::Codex(t) => t.name(),
            Self::Gemini(t) => t.name(),
        }
    }

    fn config_path(&self) -> &Path {
        match self {
            Self::Claude(t) => t.config_path(),
            Self::Codex(t) => t.config_path(),
            Self::Gemini(t) => t.config_path(),
        }
    }

    fn render(&self, settings: &McpSettings) -> Result<String> {
        match self {
            Self::Claude(t) => t.render(settings),
            Self::Codex(t) => t.render(settings),
            Self::Gemini(t) => t.render(settings),
        }
    }
}

/// Look up the deployment target for a command-line name.
///
/// # Errors
///
/// [`VibeError::UnknownTarget`] for names outside the fixed target set. No
/// filesystem access happens on the failure path.
pub fn target_for(name: &str) -> Result<ConcreteTarget> {
    match name {
        "claude" => Ok(ConcreteTarget::Claude(ClaudeTarget::new()?)),
        "codex" => Ok(ConcreteTarget::Codex(CodexTarget::new()?)),
        "gemini" => Ok(ConcreteTarget::Gemini(GeminiTarget::new()?)),
        _ => Err(VibeError::UnknownTarget {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Deploy the canonical MCP settings to a single named target.
///
/// Runs the full pipeline: locate the dotfiles directory, load the settings
/// document, look up the target, and hand off to
/// [`DeployTarget::deploy`]. Each step short-circuits the rest on failure.
pub fn deploy_to_target(name: &str) -> Result<()> {
    let dotfiles_dir = config::find_dotfiles_dir()?;
    let settings = McpSettings::load(&dotfiles_dir)?;
    let target = target_for(name)?;

    let written = target.deploy(&settings)?;

    println!(
        "{} Configuration deployed to {}",
        "✓".green(),
        target.name()
    );
    println!("{} Location: {}", "ℹ".blue(), written.display());

    if matches!(target, ConcreteTarget::Codex(_)) {
        println!(
            "{} Deployed {} MCP server(s) to {}",
            "✓".green(),
            settings.servers().len(),
            target.name()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_settings() -> McpSettings {
        McpSettings::parse(
            r#"{"mcpServers":{"fs":{"command":"npx","args":["-y","server-fs"]}}}"#,
            "test",
        )
        .unwrap()
    }

    #[test]
    fn test_target_for_known_names() {
        assert_eq!(target_for("claude").unwrap().name(), "Claude Desktop");
        assert_eq!(target_for("codex").unwrap().name(), "Codex CLI");
        assert_eq!(target_for("gemini").unwrap().name(), "Gemini");
    }

    #[test]
    fn test_target_for_unknown_name() {
        let err = target_for("cursor").unwrap_err();
        let vibe_err = err.downcast_ref::<VibeError>().unwrap();
        assert!(matches!(
            vibe_err,
            VibeError::UnknownTarget { name } if name == "cursor"
        ));
    }

    #[test]
    fn test_deploy_writes_destination() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("nested").join("config.toml");
        let target = CodexTarget::with_config_path(dest.clone());

        let written = target.deploy(&sample_settings()).unwrap();

        assert_eq!(written, dest);
        let content = fs::read_to_string(&dest).unwrap();
        assert!(content.starts_with("[mcp_servers.fs]"));
    }

    #[test]
    fn test_deploy_backs_up_existing_destination() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("config.toml");
        fs::write(&dest, "previous content").unwrap();
        let target = CodexTarget::with_config_path(dest.clone());

        target.deploy(&sample_settings()).unwrap();

        let backups: Vec<_> = fs::read_dir(temp.path().join("backups"))
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "previous content");
        assert!(fs::read_to_string(&dest).unwrap().starts_with("[mcp_servers.fs]"));
    }

    #[test]
    fn test_deploy_rejects_empty_mapping_before_writing() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("config.toml");
        let target = CodexTarget::with_config_path(dest.clone());
        let empty = McpSettings::parse(r#"{"mcpServers":{}}"#, "test").unwrap();

        assert!(target.deploy(&empty).is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_claude_deploy_round_trips_the_document() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("claude_desktop_config.json");
        let target = ClaudeTarget::with_config_path(dest.clone());
        let settings = sample_settings();

        target.deploy(&settings).unwrap();

        let reparsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(&reparsed, settings.raw());
    }
}
