//! Shared Error Types
//!
//! Errors that describe bad client input. They carry no server-side detail and
//! are safe to echo back in a response body, which is why they serialize.
//!
//! # Error Categories
//!
//! - `ValidationError` - A single field failed a validation rule
//! - `MalformedInput` - The request body could not be read at all
//!
//! # Usage
//!
//! ```rust
//! use credgate::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! assert_eq!(error.field(), Some("email"));
//! ```
use serde::Serialize;
use thiserror::Error;

/// Client input errors
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Body was missing, not JSON, or did not match the expected shape
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed input error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// The offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::MalformedInput { .. } => None,
        }
    }
}
