//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, layers, and fallback
//! - **`api_routes`** - Credential and liveness endpoints
//!
//! # Routes
//!
//! - `POST /signin` - User registration
//! - `POST /login` - User login
//! - `GET /me` - Get current user (requires a token)
//! - `GET /test` - Liveness
//!
//! Anything else gets a 404 JSON error.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
