/**
 * API Route Handlers
 *
 * Credential endpoints and the liveness route.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /signin` - User registration
 * - `POST /login` - User login
 * - `GET /me` - Get current user info
 *
 * ## Liveness
 * - `GET /test`
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, health_check, login, signup};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/me` requires a token, taken from `Authorization: Bearer <token>` or the
/// `token` cookie. The gate runs as part of the handler's `AuthUser`
/// argument. All other routes are public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/signin", post(signup))
        .route("/login", post(login))
        .route("/me", get(get_me))
        // Liveness
        .route("/test", get(health_check))
}
