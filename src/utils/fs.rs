//! Filesystem helpers with atomic write semantics.
//!
//! Writes go through a temp-and-rename strategy so an interrupted deployment
//! can never leave a partially written destination file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create a directory and any missing parents.
///
/// Succeeds silently when the directory already exists; fails when the path
/// exists but is not a directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        anyhow::bail!("Path exists but is not a directory: {}", path.display());
    }
    Ok(())
}

/// Safely write a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`]; the file either contains the
/// new content or the old content, never a partial write.
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically write bytes to a file using a write-then-rename strategy.
///
/// 1. Write content to a temporary file (`.tmp` extension)
/// 2. Sync the temporary file to disk
/// 3. Atomically rename the temporary file to the target path
///
/// Parent directories are created if they don't exist.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().context("Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
