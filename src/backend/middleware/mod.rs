//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Token gate for protected routes, exposed as the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,no_run
//! use credgate::backend::middleware::AuthUser;
//!
//! async fn protected(AuthUser(user): AuthUser) -> String {
//!     user.user_id.to_string()
//! }
//! ```

pub mod auth;

pub use auth::{session_cookie, AuthError, AuthGate, AuthUser, AuthenticatedUser, SESSION_COOKIE};
