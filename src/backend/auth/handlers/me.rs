/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /me, which returns the record
 * of the user named in the request's token.
 *
 * # Authentication
 *
 * The `AuthUser` argument makes the auth gate run first; this handler is
 * never reached without a valid token.
 *
 * # Response
 *
 * The stored record with the password hash replaced by a fixed placeholder.
 */

use axum::{extract::State, Json};

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Token missing or invalid (raised by the gate)
/// * `404 Not Found` - Token is valid but the user no longer exists
/// * `500 Internal Server Error` - Store failure
///
/// # Example Response
///
/// ```json
/// {
///   "filteredUser": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "email": "a@x.com",
///     "password": "Nah, you can't see this!",
///     "createdAt": "2025-01-01T00:00:00Z"
///   }
/// }
/// ```
pub async fn get_me(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<MeResponse>, BackendError> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", identity.user_id);
            BackendError::NotFound
        })?;

    tracing::debug!("Returning profile for user {}", user.id);

    Ok(Json(MeResponse {
        filtered_user: user.into(),
    }))
}
