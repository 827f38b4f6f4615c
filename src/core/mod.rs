//! Core types and error handling for vibe.
//!
//! The error system consists of two main types:
//! - [`VibeError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and
//!   suggestions for CLI display
//!
//! Use [`user_friendly_error`] at the binary boundary to convert any error
//! into a single colored report with a contextual suggestion.

pub mod error;
pub mod error_formatting;

pub use error::{ErrorContext, VibeError};
pub use error_formatting::{create_error_context, user_friendly_error};
