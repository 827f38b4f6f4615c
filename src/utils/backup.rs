//! Timestamped backups of destination files.
//!
//! Before a deployment overwrites a destination config, the previous version
//! is copied into a `backups/` directory next to it, under
//! `<name>.backup.<YYYYMMDD_HHMMSS>`. Backups are never pruned or read back
//! programmatically; they exist purely for manual recovery.

use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::VibeError;
use crate::utils::fs::ensure_dir;

/// Directory created next to a destination file to hold its backups.
const BACKUP_DIR_NAME: &str = "backups";

/// Copy an existing file aside before it is overwritten.
///
/// Returns the backup path, or `None` when `path` does not currently exist.
/// Content and permission bits are preserved by the copy.
///
/// # Errors
///
/// [`VibeError::DeploymentFailed`] when the backup directory or the copy
/// cannot be created. The caller must abort the deployment in that case so
/// the previous configuration is never lost.
pub fn create_backup(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        debug!("no existing file to back up: {}", path.display());
        return Ok(None);
    }

    let parent = path.parent().ok_or_else(|| VibeError::DeploymentFailed {
        operation: "resolve backup directory".to_string(),
        path: path.display().to_string(),
        reason: "destination has no parent directory".to_string(),
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| VibeError::DeploymentFailed {
            operation: "resolve backup name".to_string(),
            path: path.display().to_string(),
            reason: "destination has no file name".to_string(),
        })?;

    let backup_dir = parent.join(BACKUP_DIR_NAME);
    ensure_dir(&backup_dir).map_err(|e| VibeError::DeploymentFailed {
        operation: "create backup directory".to_string(),
        path: backup_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = backup_dir.join(format!("{file_name}.backup.{timestamp}"));

    std::fs::copy(path, &backup_path).map_err(|e| VibeError::DeploymentFailed {
        operation: "create backup".to_string(),
        path: backup_path.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!(
        "backed up {} to {}",
        path.display(),
        backup_path.display()
    );
    Ok(Some(backup_path))
}
