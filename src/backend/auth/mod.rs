//! Authentication Module
//!
//! User registration, login, and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User record and the `UserStore` interface (PostgreSQL, in-memory)
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - HS256 token issuance and verification
//! - **`handlers`** - HTTP handlers for the credential endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and stores
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and expire one hour after issue
//! - Invalid credentials return 401 without saying which part was wrong
//! - The password hash never appears in a response

/// User data model and stores
pub mod users;

/// Password hashing
pub mod password;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, health_check, login, signup};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenService};
pub use users::{MemoryUserStore, PgUserStore, User, UserStore};
