/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Validate email format and password length
 * 2. Look up user by email
 * 3. Verify password using bcrypt
 * 4. Issue a session token and set it as an HTTP-only cookie
 *
 * # Security
 *
 * An unknown email and a wrong password produce the same
 * `BackendError::InvalidCredentials`, so responses cannot be used to probe
 * which emails are registered. An unknown email still pays for one bcrypt
 * run, so the two cases also take about as long. Which check failed is only
 * logged.
 */

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use axum_extra::extract::CookieJar;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::session_cookie;
use crate::backend::server::state::AppState;
use crate::shared::validate_login;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Body is malformed or fails validation
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store or token failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "longpassword1" }
/// ```
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<AuthResponse>), BackendError> {
    let Json(request) = payload.inspect_err(|e| {
        tracing::warn!("Unreadable login body: {}", e);
    })?;

    validate_login(&request.email, &request.password).inspect_err(|details| {
        tracing::warn!("Validation error during login: {} problem(s)", details.len());
    })?;

    let Some(user) = state.users.find_by_email(&request.email).await? else {
        // Same bcrypt work as a wrong password
        state.hasher.verify_missing_async(request.password).await;
        tracing::warn!("Login error: no user found with email {}", request.email);
        return Err(BackendError::InvalidCredentials);
    };

    if !state
        .hasher
        .verify_async(request.password, user.password_hash.clone())
        .await
    {
        tracing::warn!("Login error: invalid password for email {}", request.email);
        return Err(BackendError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id)?;
    let cookie = session_cookie(&token, state.tokens.lifetime());

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok((
        jar.add(cookie),
        Json(AuthResponse {
            message: "Login successful".to_string(),
            token,
        }),
    ))
}
