//! Custom error types for centavos
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for centavos operations
#[derive(Error, Debug)]
pub enum MaskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Strict parsing rejected an amount string
    #[error("Invalid amount: '{input}'")]
    InvalidAmount { input: String },
}

impl MaskError {
    /// Create an invalid-amount error
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
        }
    }

    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MaskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MaskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for centavos operations
pub type MaskResult<T> = Result<T, MaskError>;
