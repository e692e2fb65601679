/**
 * Application State Management
 *
 * `AppState` is built once at startup from `ServerConfig` and cloned into
 * every request. Everything in it is read-only after construction; the user
 * store handles its own synchronization.
 *
 * # State Extraction
 *
 * `FromRef` lets the `AuthUser` extractor pull out just the `AuthGate`
 * instead of the whole state.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::middleware::auth::AuthGate;
use crate::backend::server::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User persistence
    pub users: Arc<dyn UserStore>,

    /// Token issuance and verification, keyed by the configured secret
    pub tokens: TokenService,

    /// Password hashing with the configured work factor
    pub hasher: PasswordHasher,

    /// Request authentication for protected routes
    pub auth_gate: AuthGate,
}

impl AppState {
    /// Wire the services from configuration and a user store
    pub fn new(config: &ServerConfig, users: Arc<dyn UserStore>) -> Self {
        let tokens = TokenService::new(&config.jwt_secret);

        Self {
            users,
            auth_gate: AuthGate::new(tokens.clone()),
            tokens,
            hasher: PasswordHasher::new(config.bcrypt_cost),
        }
    }
}

impl FromRef<AppState> for AuthGate {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_gate.clone()
    }
}
