//! MCP (Model Context Protocol) settings document handling for vibe.
//!
//! This module owns the in-memory representation of the canonical
//! `mcp-settings.json` file and its loading rules:
//! - The raw document is kept as parsed JSON so verbatim targets can
//!   re-encode it faithfully, unknown fields included
//! - The `mcpServers` mapping is additionally extracted into a typed,
//!   order-preserving view for the structural TOML translation
//!
//! Once loaded, a settings document is immutable for the duration of a
//! deployment.

pub mod convert;
pub mod targets;

use anyhow::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::config::SETTINGS_FILE_NAME;
use crate::core::VibeError;

/// A single MCP server entry from the settings file.
///
/// Every field is optional; absence means the field is omitted from every
/// output format, never defaulted. Fields beyond these three are ignored by
/// the typed view (the raw document still carries them for verbatim output).
///
/// `args` elements and `env` values are kept as JSON values: the translation
/// stringifies non-string scalars via their JSON textual representation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct McpServerEntry {
    /// The command to execute to start the server
    pub command: Option<String>,

    /// Arguments to pass to the command, in order
    pub args: Option<Vec<Value>>,

    /// Environment variables to set when running the server
    pub env: Option<IndexMap<String, Value>>,
}

/// Typed shape of the settings file used to extract the server mapping.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    /// Map of server names to their configurations
    #[serde(rename = "mcpServers", default)]
    mcp_servers: IndexMap<String, McpServerEntry>,
}

/// The parsed canonical MCP settings document.
#[derive(Debug, Clone)]
pub struct McpSettings {
    /// The complete document as parsed, key order preserved
    raw: Value,
    /// The `mcpServers` mapping in document order
    servers: IndexMap<String, McpServerEntry>,
}

impl McpSettings {
    /// Load and parse `mcp-settings.json` from a dotfiles directory.
    ///
    /// A missing `mcpServers` key yields an empty server mapping, not an
    /// error; targets that require at least one server reject the empty
    /// mapping during conversion instead.
    ///
    /// # Errors
    ///
    /// - [`VibeError::ConfigurationNotFound`] if the file is absent
    /// - [`VibeError::ConfigurationInvalid`] if it cannot be read or is not
    ///   well-formed JSON
    pub fn load(dotfiles_dir: &Path) -> Result<Self> {
        let path = dotfiles_dir.join(SETTINGS_FILE_NAME);

        if !path.exists() {
            return Err(VibeError::ConfigurationNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| VibeError::ConfigurationInvalid {
                path: path.display().to_string(),
                reason: format!("failed to read file: {e}"),
            })?;

        let settings = Self::parse(&content, &path.display().to_string())?;
        debug!(
            "loaded {} MCP server(s) from {}",
            settings.servers.len(),
            path.display()
        );
        Ok(settings)
    }

    /// Parse settings from JSON text, reporting `origin` in error messages.
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let raw: Value =
            serde_json::from_str(content).map_err(|e| VibeError::ConfigurationInvalid {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        let parsed: RawSettings =
            serde_json::from_value(raw.clone()).map_err(|e| VibeError::ConfigurationInvalid {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            raw,
            servers: parsed.mcp_servers,
        })
    }

    /// The complete document as parsed.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The `mcpServers` mapping, in document order.
    pub fn servers(&self) -> &IndexMap<String, McpServerEntry> {
        &self.servers
    }
}
