/**
 * Signup Handler
 *
 * This module implements the account creation handler for POST /signin.
 *
 * # Registration Process
 *
 * 1. Validate email format, password length, and confirmation
 * 2. Reject if a user with the email already exists
 * 3. Hash password using bcrypt
 * 4. Create user in the store
 * 5. Issue a session token and set it as an HTTP-only cookie
 *
 * # Security
 *
 * - Passwords are hashed with the configured bcrypt cost
 * - Passwords and tokens are never logged
 * - An existing account is never overwritten
 */

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::users::NewUser;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::session_cookie;
use crate::backend::server::state::AppState;
use crate::shared::validate_signup;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Body is malformed or fails validation
/// * `409 Conflict` - A user with this email already exists
/// * `500 Internal Server Error` - Store, hashing, or token failure
///
/// # Example Request
///
/// ```http
/// POST /signin HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "password": "longpassword1",
///   "confirmPassword": "longpassword1"
/// }
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 201 Created
/// Set-Cookie: token=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...; HttpOnly; Path=/; Max-Age=3600
///
/// { "message": "User created successfully", "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), BackendError> {
    let Json(request) = payload.inspect_err(|e| {
        tracing::warn!("Unreadable signup body: {}", e);
    })?;

    validate_signup(&request.email, &request.password, &request.confirm_password).inspect_err(
        |details| {
            tracing::warn!("Validation error during signup: {} problem(s)", details.len());
        },
    )?;

    if state.users.find_by_email(&request.email).await?.is_some() {
        tracing::warn!("Signup rejected: user with email {} already exists", request.email);
        return Err(BackendError::Conflict);
    }

    let password_hash = state.hasher.hash_async(request.password).await?;

    // A concurrent signup may have taken the email since the lookup; the store
    // reports that as DuplicateEmail, which maps to Conflict as well.
    let user = state
        .users
        .create(NewUser {
            email: request.email,
            password_hash,
        })
        .await?;

    let token = state.tokens.issue(user.id)?;
    let cookie = session_cookie(&token, state.tokens.lifetime());

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            token,
        }),
    ))
}
