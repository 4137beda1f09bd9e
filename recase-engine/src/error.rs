//! Engine error types
//!
//! The pipeline itself is total over `&str`; the only fallible engine
//! operation is parsing a convention from its name.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Convention name not recognised
    #[error("unknown naming convention '{name}'")]
    UnknownConvention {
        /// The name that failed to parse
        name: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
