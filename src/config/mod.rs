//! Dotfiles directory discovery for vibe.
//!
//! The canonical MCP settings file lives in a dotfiles directory. Resolution
//! order:
//!
//! 1. The `DOTFILES_DIR` environment variable (tilde-expanded), used only if
//!    it names an existing directory
//! 2. The first existing directory from a fixed search list under the home
//!    directory: `Developer/repo/dotfiles`, `.dotfiles`, `dotfiles`
//!
//! All environment and filesystem lookups are isolated behind
//! [`find_dotfiles_dir`] so the rest of the crate never touches process-wide
//! state directly; tests inject an explicit home directory through
//! [`find_dotfiles_dir_from`].

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::VibeError;

/// Name of the canonical settings file inside the dotfiles directory.
pub const SETTINGS_FILE_NAME: &str = "mcp-settings.json";

/// Environment variable that overrides the dotfiles search list.
pub const DOTFILES_ENV_VAR: &str = "DOTFILES_DIR";

/// Conventional dotfiles locations, relative to the home directory, in
/// preference order.
const SEARCH_LOCATIONS: &[&str] = &["Developer/repo/dotfiles", ".dotfiles", "dotfiles"];

/// Locate the dotfiles directory containing the MCP settings file.
///
/// Checks the `DOTFILES_DIR` override first, then falls back to the fixed
/// search list. Purely a lookup: nothing is created or modified.
///
/// # Errors
///
/// Returns [`VibeError::ConfigurationNotFound`] listing the searched
/// locations when no candidate directory exists.
pub fn find_dotfiles_dir() -> Result<PathBuf> {
    if let Ok(value) = std::env::var(DOTFILES_ENV_VAR)
        && !value.is_empty()
    {
        let expanded = PathBuf::from(shellexpand::tilde(&value).into_owned());
        if expanded.is_dir() {
            debug!(
                "using dotfiles directory from {}: {}",
                DOTFILES_ENV_VAR,
                expanded.display()
            );
            return Ok(expanded);
        }
        debug!(
            "{} points to {} which does not exist, falling back to search list",
            DOTFILES_ENV_VAR,
            expanded.display()
        );
    }

    let home = dirs::home_dir().ok_or_else(|| VibeError::ConfigurationNotFound {
        path: "home directory could not be determined".to_string(),
    })?;
    find_dotfiles_dir_from(&home)
}

/// Search the conventional dotfiles locations under an explicit home
/// directory.
///
/// This is the injectable seam used by [`find_dotfiles_dir`] and by tests;
/// it never consults the environment.
pub fn find_dotfiles_dir_from(home: &Path) -> Result<PathBuf> {
    for location in SEARCH_LOCATIONS {
        let candidate = home.join(location);
        if candidate.is_dir() {
            debug!("found dotfiles directory: {}", candidate.display());
            return Ok(candidate);
        }
    }

    let searched = SEARCH_LOCATIONS
        .iter()
        .map(|location| home.join(location).display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(VibeError::ConfigurationNotFound { path: searched }.into())
}
