/**
 * Server Initialization
 *
 * Turns a `ServerConfig` into a ready-to-serve router.
 *
 * # Initialization Process
 *
 * 1. Select and prepare the user store (PostgreSQL or in-memory)
 * 2. Build `AppState` (token service, hasher, auth gate)
 * 3. Assemble the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_user_store, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Fails if the configured database cannot be reached or migrated.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing credgate server");

    let users = load_user_store(&config).await?;
    let app_state = AppState::new(&config, users);

    tracing::info!("Router configured");
    Ok(create_router(app_state))
}
