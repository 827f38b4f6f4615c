//! Common test utilities and fixtures for vibe integration tests
//!
//! Every test gets an isolated home directory inside a tempdir; the binary
//! runs with a cleared environment so neither the real dotfiles nor the real
//! assistant configs are ever touched.

// Allow dead code because these utilities are shared across test files and
// not every test file uses all of them
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A well-formed settings fixture with two servers: one fully populated, one
/// without `env`.
pub const SAMPLE_SETTINGS: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem"],
      "env": {
        "ROOT": "/tmp"
      }
    },
    "fetch": {
      "command": "uvx",
      "args": ["mcp-server-fetch"]
    }
  }
}"#;

/// Isolated home directory with a dotfiles fixture for one test.
pub struct TestHome {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    home: PathBuf,
}

impl TestHome {
    /// Create a test home containing an empty `~/dotfiles` directory, which
    /// the locator's search list picks up without any override.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().join("home");
        fs::create_dir_all(home.join("dotfiles")).unwrap();
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    pub fn home_path(&self) -> &Path {
        &self.home
    }

    pub fn dotfiles_path(&self) -> PathBuf {
        self.home.join("dotfiles")
    }

    /// Write the canonical settings file into the dotfiles directory.
    pub fn write_settings(&self, content: &str) {
        fs::write(self.dotfiles_path().join("mcp-settings.json"), content).unwrap();
    }

    /// Destination the Claude Desktop target resolves to under this home.
    pub fn claude_config_path(&self) -> PathBuf {
        if cfg!(target_os = "macos") {
            self.home
                .join("Library/Application Support/Claude/claude_desktop_config.json")
        } else {
            self.home.join(".config/Claude/claude_desktop_config.json")
        }
    }

    pub fn codex_config_path(&self) -> PathBuf {
        self.home.join(".codex/config.toml")
    }

    pub fn gemini_config_path(&self) -> PathBuf {
        self.home.join(".gemini/settings.json")
    }

    /// Build a `vibe` invocation isolated to this test home.
    pub fn vibe(&self, args: &[&str]) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("vibe").unwrap();
        cmd.env_clear();
        cmd.env("HOME", &self.home);
        cmd.args(args);
        cmd
    }

    /// Like [`vibe`](Self::vibe), with `DOTFILES_DIR` pointing at an
    /// explicit directory.
    pub fn vibe_with_dotfiles(&self, dotfiles: &Path, args: &[&str]) -> assert_cmd::Command {
        let mut cmd = self.vibe(args);
        cmd.env("DOTFILES_DIR", dotfiles);
        cmd
    }
}

/// List the backup files next to a destination config, if any.
pub fn backups_for(config_path: &Path) -> Vec<PathBuf> {
    let backup_dir = config_path.parent().unwrap().join("backups");
    if !backup_dir.exists() {
        return Vec::new();
    }
    fs::read_dir(backup_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}
