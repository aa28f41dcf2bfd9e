//! Error types for geoheat.
//!
//! Structural problems (bad samples, bad grid, bad parameters) surface as
//! typed errors. Numerical edge cases such as a degenerate value range or a
//! query point sitting exactly on a sample are recovered where they occur
//! and never show up here.

use thiserror::Error;

/// The main error type for geoheat operations.
#[derive(Error, Debug)]
pub enum GeoheatError {
    /// Invalid samples, grid dimensions or rendering parameters
    #[error("Invalid input: {param} - {message}")]
    InvalidInput { param: String, message: String },

    /// Interpolation errors
    #[error("Interpolation error: {message}")]
    Interpolation { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Image buffer or encoding errors
    #[error("Image generation error: {message}")]
    ImageGeneration { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeoheatError {
    /// Shorthand for an `InvalidInput` error on the named parameter
    pub fn invalid_input(param: &str, message: impl Into<String>) -> Self {
        GeoheatError::InvalidInput {
            param: param.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with GeoheatError
pub type Result<T> = std::result::Result<T, GeoheatError>;
