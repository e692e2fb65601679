/**
 * Liveness Handler
 *
 * GET /test answers without touching state or requiring a token.
 */

use axum::Json;

use crate::backend::auth::handlers::types::MessageResponse;

/// Liveness check
pub async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Test route is working!".to_string(),
    })
}
