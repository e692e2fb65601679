//! Authentication Handlers Module
//!
//! HTTP handlers for the credential endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── me.rs       - Get current user handler
//! └── health.rs   - Liveness route
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signin - User registration
//! - **`login`** - POST /login - User authentication
//! - **`get_me`** - GET /me - Get current user info
//! - **`health_check`** - GET /test - Liveness
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email, password, confirmation → user created → token returned and set as cookie
//! 2. **Login**: email and password → credentials verified → token returned and set as cookie
//! 3. **Get Me**: token in header or cookie → token verified → user record returned
//!
//! # Example
//!
//! ```rust,no_run
//! use credgate::backend::auth::handlers::{signup, login, get_me};
//! use credgate::backend::server::AppState;
//! use axum::{routing::post, routing::get, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/signin", post(signup))
//!     .route("/login", post(login))
//!     .route("/me", get(get_me));
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Liveness handler
pub mod health;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, MeResponse, MessageResponse, SignupRequest, UserResponse};

// Re-export handlers
pub use health::health_check;
pub use login::login;
pub use me::get_me;
pub use signup::signup;
