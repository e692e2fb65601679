//! Shared Module
//!
//! Platform-agnostic pieces that do not depend on the HTTP server: client
//! input errors and the validation rules for credential forms.

/// Shared error types
pub mod error;

/// Credential form validation
pub mod validation;

pub use error::SharedError;
pub use validation::{validate_login, validate_signup, MAX_PASSWORD_BYTES, MIN_PASSWORD_LENGTH};
