//! Error handling for vibe
//!
//! This module provides the error types and user-friendly error reporting for
//! the deployment tool. The error system is designed around two core
//! principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Error Categories
//!
//! Every failure a deployment can hit falls into one of four classes:
//! - [`VibeError::ConfigurationNotFound`] - the dotfiles directory or the
//!   settings file is missing
//! - [`VibeError::ConfigurationInvalid`] - the settings file is malformed or
//!   semantically insufficient for the requested target
//! - [`VibeError::UnknownTarget`] - the requested target name is not
//!   recognized
//! - [`VibeError::DeploymentFailed`] - an I/O failure during backup or write
//!
//! All of these are user-recoverable conditions, never process crashes: each
//! is caught at the deployment boundary, reported as a single colored block,
//! and converted to a nonzero exit status.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vibe::core::{VibeError, ErrorContext};
//!
//! let error = VibeError::UnknownTarget { name: "cursor".to_string() };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Valid targets are: claude, codex, gemini, all");
//!
//! // Display with colors on stderr
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for vibe operations
///
/// Each variant represents a specific failure mode and carries the context
/// needed to explain it: file paths, target names, and underlying reasons.
/// Variants map one-to-one onto exit-code-1 user reports; none of them are
/// ever allowed to escape as a panic.
#[derive(Error, Debug)]
pub enum VibeError {
    /// The dotfiles directory or the canonical settings file is missing.
    ///
    /// Raised by the locator when no search candidate exists, and by the
    /// settings loader when `mcp-settings.json` is absent from the located
    /// directory.
    #[error("Configuration not found: {path}")]
    ConfigurationNotFound {
        /// The missing path, or the list of searched locations
        path: String,
    },

    /// The settings file exists but its content cannot be used.
    ///
    /// Covers malformed JSON, unreadable files, and a server mapping that is
    /// empty when the requested target requires at least one entry.
    #[error("Invalid configuration in {path}: {reason}")]
    ConfigurationInvalid {
        /// Path of the offending file
        path: String,
        /// Why the content was rejected
        reason: String,
    },

    /// The requested deployment target name is not recognized.
    #[error("Unknown target: {name}")]
    UnknownTarget {
        /// The unrecognized name as typed on the command line
        name: String,
    },

    /// A backup or write operation failed partway through a deployment.
    ///
    /// The deployment aborts before the destination is overwritten, so the
    /// previous configuration is never lost.
    #[error("Deployment failed: could not {operation} ({path})")]
    DeploymentFailed {
        /// The operation that failed (e.g., "create backup", "write configuration")
        operation: String,
        /// The path involved in the failure
        path: String,
        /// The underlying failure reason
        reason: String,
    },

    /// Standard I/O error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic fallback for errors that do not fit the taxonomy
    #[error("{message}")]
    Other {
        /// Description of the error
        message: String,
    },
}

/// Wrapper that pairs a [`VibeError`] with user-facing guidance
///
/// The context carries an optional suggestion (an actionable next step,
/// shown in green) and optional details (extra explanation, shown in
/// yellow). Built by [`create_error_context`](crate::core::create_error_context)
/// for each error variant.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: VibeError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no additional guidance
    #[must_use]
    pub const fn new(error: VibeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions should be actionable steps the user can take; they are
    /// displayed in green to draw attention.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    ///
    /// Details provide context about why the error occurred; they are
    /// displayed in yellow, less prominent than the error itself.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}
