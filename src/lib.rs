//! credgate - Credential Issuing Service
//!
//! A small HTTP service that lets clients create an account with email and
//! password, log in, and prove who they are on later requests with a signed,
//! short-lived token.
//!
//! # Module Structure
//!
//! - **`shared`** - Input validation and client-facing error details. No
//!   server dependencies.
//! - **`backend`** - Axum server, user stores, hashing, tokens, handlers.
//!   Only compiled with the `ssr` feature (on by default).
//!
//! # Endpoints
//!
//! | Method | Path      | Auth | Success                          |
//! |--------|-----------|------|----------------------------------|
//! | POST   | `/signin` | no   | 201, token body + `token` cookie |
//! | POST   | `/login`  | no   | 200, token body + `token` cookie |
//! | GET    | `/me`     | yes  | 200, user record (hash hidden)   |
//! | GET    | `/test`   | no   | 200, fixed message               |
//!
//! # Configuration
//!
//! Read from the environment (a `.env` file is loaded if present):
//!
//! - `JWT_SECRET` - required, HS256 signing secret
//! - `SERVER_PORT` - listen port, default 4000
//! - `DATABASE_URL` - PostgreSQL URL; without it users live in memory
//! - `BCRYPT_COST` - bcrypt work factor, default 10
//! - `RUST_LOG` - log filter, default `info`
//!
//! # Usage
//!
//! ```rust,no_run
//! use credgate::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::new("change-me")).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and validation
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
