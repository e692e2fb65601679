/**
 * Backend Error Types
 *
 * Every failure a handler can produce, and the HTTP status each maps to.
 *
 * # Error Categories
 *
 * | Variant              | Status | Body message                  |
 * |----------------------|--------|-------------------------------|
 * | `Validation`         | 400    | `Invalid input data` + details |
 * | `Unauthenticated`    | 401    | from `AuthError`              |
 * | `InvalidCredentials` | 401    | `Invalid credentials`         |
 * | `NotFound`           | 404    | `User not found`              |
 * | `RouteNotFound`      | 404    | `Route not found`             |
 * | `Conflict`           | 409    | `User already exists`         |
 * | `Internal`           | 500    | `Internal server error`       |
 *
 * `InvalidCredentials` is a single variant: an unknown email
 * and a wrong password must be indistinguishable to the client.
 *
 * `Internal` keeps its detail for the logs only; the response never
 * includes it.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::HashError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;
use crate::backend::middleware::auth::AuthError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body missing, malformed, or failing validation rules
    #[error("Invalid input data")]
    Validation {
        /// One entry per problem found
        details: Vec<SharedError>,
    },

    /// No usable token on a protected route
    #[error(transparent)]
    Unauthenticated(#[from] AuthError),

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Email already registered
    #[error("User already exists")]
    Conflict,

    /// Token is valid but its user is gone
    #[error("User not found")]
    NotFound,

    /// No route matches the request path
    #[error("Route not found")]
    RouteNotFound,

    /// Anything unexpected: store down, hashing or signing failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a validation error
    pub fn validation(details: Vec<SharedError>) -> Self {
        Self::Validation { details }
    }

    /// Create an internal error carrying a diagnostic message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Validation details, if any
    pub fn details(&self) -> Option<&[SharedError]> {
        match self {
            Self::Validation { details } => Some(details),
            _ => None,
        }
    }
}

impl From<Vec<SharedError>> for BackendError {
    fn from(details: Vec<SharedError>) -> Self {
        Self::validation(details)
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(vec![SharedError::malformed(rejection.body_text())])
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail { .. } => Self::Conflict,
            StoreError::Database(e) => Self::internal(format!("user store: {e}")),
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        Self::internal(format!("token issuance: {err}"))
    }
}

impl From<HashError> for BackendError {
    fn from(err: HashError) -> Self {
        Self::internal(err.to_string())
    }
}
