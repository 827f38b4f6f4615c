//! Error formatting utilities for vibe
//!
//! This module converts internal errors into clear, actionable messages for
//! users. Every deployment failure funnels through [`user_friendly_error`]
//! at the binary boundary before the process exits nonzero.

use super::error::{ErrorContext, VibeError};

/// Convert any error into a user-friendly format with contextual suggestions
///
/// This function walks the error chain looking for a typed [`VibeError`] and
/// builds an [`ErrorContext`] with a per-variant suggestion. Raw I/O errors
/// and unknown error types fall back to generic guidance.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(vibe_error) = error.downcast_ref::<VibeError>() {
        return create_error_context(vibe_error);
    }

    // Walk the error chain to find a VibeError wrapped by anyhow context
    let mut current_error: &dyn std::error::Error = error.as_ref();
    loop {
        if let Some(vibe_error) = current_error.downcast_ref::<VibeError>() {
            return create_error_context(vibe_error);
        }

        match current_error.source() {
            Some(source) => current_error = source,
            None => break,
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let context = match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                ErrorContext::new(VibeError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion(
                    "Check file permissions and try running with appropriate privileges",
                )
            }
            std::io::ErrorKind::NotFound => ErrorContext::new(VibeError::Other {
                message: format!("File not found: {io_error}"),
            })
            .with_suggestion("Check that the path exists and is spelled correctly"),
            _ => ErrorContext::new(VibeError::Other {
                message: format!("IO error: {io_error}"),
            })
            .with_suggestion("Check file permissions and disk space"),
        };
        return context;
    }

    // Default fallback for unknown errors
    ErrorContext::new(VibeError::Other {
        message: error.to_string(),
    })
    .with_suggestion("Check the error message above for more details")
    .with_details("An unexpected error occurred. Please report this issue if it persists.")
}

/// Create a user-friendly error context from a [`VibeError`]
///
/// Each variant gets a suggestion tailored to the failure: where to put the
/// settings file, how the search list works, what the valid target names
/// are, and so on.
pub fn create_error_context(error: &VibeError) -> ErrorContext {
    match error {
        VibeError::ConfigurationNotFound { path } => {
            ErrorContext::new(VibeError::ConfigurationNotFound { path: path.clone() })
                .with_suggestion(
                    "Create mcp-settings.json in your dotfiles directory, or point \
                     DOTFILES_DIR at the directory that contains it",
                )
                .with_details(
                    "Vibe checks DOTFILES_DIR first, then ~/Developer/repo/dotfiles, \
                     ~/.dotfiles, and ~/dotfiles",
                )
        }
        VibeError::ConfigurationInvalid { path, reason } => {
            ErrorContext::new(VibeError::ConfigurationInvalid {
                path: path.clone(),
                reason: reason.clone(),
            })
            .with_suggestion(format!("Check the content of '{path}' - it must be valid JSON with an \"mcpServers\" object"))
            .with_details(format!("Configuration was rejected because: {reason}"))
        }
        VibeError::UnknownTarget { name } => {
            ErrorContext::new(VibeError::UnknownTarget { name: name.clone() })
                .with_suggestion("Valid targets are: claude, codex, gemini, all")
        }
        VibeError::DeploymentFailed {
            operation,
            path,
            reason,
        } => ErrorContext::new(VibeError::DeploymentFailed {
            operation: operation.clone(),
            path: path.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Check file permissions and available disk space, then retry")
        .with_details(format!("Failed to {operation} at {path}: {reason}")),
        // Default fallback for unhandled error types
        _ => ErrorContext::new(VibeError::Other {
            message: error.to_string(),
        })
        .with_suggestion("Check the error message above for more details"),
    }
}
