/**
 * Router Configuration
 *
 * Combines the route groups into a single Axum router, adds request
 * tracing, and installs the 404 fallback.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Layers
///
/// Every request gets a tracing span with method, path, status, and latency.
///
/// # Fallback
///
/// Unknown paths return 404 with the standard JSON error body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(|| async { BackendError::RouteNotFound })
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
