//! Format conversion for deployment targets.
//!
//! Two serialization rules exist, selected per target:
//! - **Verbatim**: the document re-encoded as indented JSON, key order
//!   preserved (Claude Desktop, Gemini)
//! - **Structural translation**: the server mapping rewritten as TOML
//!   `[mcp_servers.<name>]` sections (Codex CLI)
//!
//! The translation is a narrowing one: only `command`, `args`, and `env` are
//! carried over, and its output is re-parsed as TOML before anything is
//! written so a malformed server name can never produce a broken config
//! file.

use anyhow::Result;
use serde_json::Value;

use super::McpSettings;
use crate::config::SETTINGS_FILE_NAME;
use crate::core::VibeError;

/// Re-encode the document as pretty-printed JSON.
///
/// Used by targets whose destination expects the same representation family
/// as the source. Unknown top-level keys and entry fields pass through
/// untouched.
pub fn render_verbatim(settings: &McpSettings) -> Result<String> {
    Ok(serde_json::to_string_pretty(settings.raw())?)
}

/// Translate the server mapping into Codex CLI's TOML configuration.
///
/// Emits one `[mcp_servers.<name>]` section per server in document order.
/// `command`, `args`, and `env` lines appear only when the field is present;
/// sections are separated by exactly one blank line and the output ends with
/// a single trailing newline.
///
/// # Errors
///
/// [`VibeError::ConfigurationInvalid`] when the server mapping is empty
/// (deploying an empty config would silently disconnect every server) or
/// when the rendered text fails to parse as TOML.
pub fn render_codex_toml(settings: &McpSettings) -> Result<String> {
    if settings.servers().is_empty() {
        return Err(VibeError::ConfigurationInvalid {
            path: SETTINGS_FILE_NAME.to_string(),
            reason: "No MCP servers found in configuration".to_string(),
        }
        .into());
    }

    let mut lines = Vec::new();

    for (name, entry) in settings.servers() {
        lines.push(format!("[mcp_servers.{name}]"));

        if let Some(command) = &entry.command {
            lines.push(format!("command = \"{}\"", escape(command)));
        }

        if let Some(args) = &entry.args {
            let rendered = args
                .iter()
                .map(|arg| format!("\"{}\"", escape(&scalar_text(arg))))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("args = [{rendered}]"));
        }

        if let Some(env) = &entry.env {
            let pairs = env
                .iter()
                .map(|(key, value)| {
                    format!("\"{}\" = \"{}\"", escape(key), escape(&scalar_text(value)))
                })
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("env = {{ {pairs} }}"));
        }

        // Empty line between servers
        lines.push(String::new());
    }

    let output = lines.join("\n");

    // Syntactic-correctness gate: never deploy text Codex cannot parse
    toml::from_str::<toml::Value>(&output).map_err(|e| VibeError::ConfigurationInvalid {
        path: SETTINGS_FILE_NAME.to_string(),
        reason: format!("translated TOML failed to parse: {e}"),
    })?;

    Ok(output)
}

/// Textual representation of a scalar value.
///
/// Strings render as their content; other scalars as their JSON text
/// (`true`, `3`, `null`). The source corpus never nests objects here.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escape a value for embedding in a TOML basic string.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
