/**
 * Authentication Handler Types
 *
 * Request and response bodies for the signup, login, and current-user
 * handlers. Field names follow the JSON the service speaks (camelCase).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Shown in place of the password hash whenever a user record is returned
pub const PASSWORD_PLACEHOLDER: &str = "Nah, you can't see this!";

/// Sign up request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Must repeat `password`
    pub confirm_password: String,
}

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login. The same token is also set as the
/// session cookie.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}

/// User record safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    /// Always `PASSWORD_PLACEHOLDER`
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            password: PASSWORD_PLACEHOLDER.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Body of `GET /me`
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub filtered_user: UserResponse,
}

/// Plain message body
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
