//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use recase_engine::{NamingConvention, SourceStrategy, WordSequence};

/// Input source for a conversion session
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Raw text string
    Text(String),
    /// Raw bytes (must be UTF-8)
    Bytes(Vec<u8>),
    /// JSON value (must be a JSON string)
    #[cfg(feature = "serde")]
    Value(serde_json::Value),
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a JSON value
    #[cfg(feature = "serde")]
    pub fn from_value(value: serde_json::Value) -> Self {
        Input::Value(value)
    }

    /// Read the text content, rejecting anything that is not a string
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(|e| ApiError::InvalidInput {
                reason: format!("bytes are not valid UTF-8: {e}"),
            }),
            #[cfg(feature = "serde")]
            Input::Value(serde_json::Value::String(text)) => Ok(text),
            #[cfg(feature = "serde")]
            Input::Value(other) => Err(ApiError::InvalidInput {
                reason: format!("expected a JSON string, found {}", json_kind(&other)),
            }),
        }
    }
}

#[cfg(feature = "serde")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Input {
    fn from(value: serde_json::Value) -> Self {
        Input::Value(value)
    }
}

/// One converted form of the input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConventionOutput {
    /// Target convention
    pub convention: NamingConvention,
    /// Converted identifier
    pub output: String,
}

/// Everything a session knows about its input, for inspection
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Original input
    pub input: String,
    /// Strategy used to split the input
    pub strategy: SourceStrategy,
    /// Words found in the input
    pub words: WordSequence,
    /// The input converted to every convention
    pub conversions: Vec<ConventionOutput>,
}
