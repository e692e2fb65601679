//! Server Module
//!
//! Server initialization, configuration, and shared state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── config.rs  - ServerConfig loading, user store selection
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - create_app
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` (fails without `JWT_SECRET`)
//! 2. **Store Selection**: PostgreSQL when `DATABASE_URL` is set, memory otherwise
//! 3. **State Creation**: token service, hasher, auth gate
//! 4. **Router Creation**: routes, tracing layer, fallback

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
