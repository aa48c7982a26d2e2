//! Error types for token computation.
//!
//! Only two things can genuinely fail: a malformed hex color and an
//! unusable scale configuration. Everything numeric (hues past 360, negative
//! saturation, ...) is normalized instead of rejected.

use thiserror::Error;

/// Errors produced by the token engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The input is not a 6-digit hex color.
    #[error("Invalid color format '{input}': {reason}")]
    InvalidFormat {
        /// The rejected input, as given.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A named preset or option could not be resolved.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TokenError {
    /// Creates an [`TokenError::InvalidFormat`] for `input`.
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`TokenError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Convenience alias for engine results.
pub type TokenResult<T> = Result<T, TokenError>;
