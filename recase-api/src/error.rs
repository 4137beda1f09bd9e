//! API error types

use recase_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Input is not a string
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
