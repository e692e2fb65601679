/**
 * Authentication Gate
 *
 * Protects routes that require a signed-in user. The gate finds a candidate
 * token, verifies it with the `TokenService`, and hands the decoded identity
 * to the handler as an `AuthUser` argument. It keeps no state of its own and
 * never consults the user store.
 *
 * # Token Sources
 *
 * Checked in order, first match wins:
 * 1. `Authorization: Bearer <token>` (scheme is case-insensitive)
 * 2. the `token` session cookie
 *
 * Any other `Authorization` scheme is ignored and the cookie is tried.
 *
 * # Rejections
 *
 * - No candidate token: 401 `Unauthorized: Token not provided`
 * - Bad signature, malformed, expired: 401 `Unauthorized: Invalid token`
 *
 * The reason a token was rejected is logged, never returned.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::sessions::{TokenError, TokenService};
use crate::backend::error::BackendError;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Authentication failures
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unauthorized: Token not provided")]
    MissingToken,

    #[error("Unauthorized: Invalid token")]
    InvalidToken(#[source] TokenError),
}

/// Authenticated user data extracted from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    /// Unix timestamp the token was issued at
    pub issued_at: i64,
    /// Unix timestamp the token stops being valid
    pub expires_at: i64,
}

/// Token extraction and verification for incoming requests
#[derive(Clone, Debug)]
pub struct AuthGate {
    tokens: TokenService,
}

impl AuthGate {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }

    /// Find a candidate token in the request headers
    pub fn extract_token(&self, headers: &HeaderMap) -> Option<String> {
        if let Some(token) = bearer_token(headers) {
            return Some(token.to_string());
        }

        CookieJar::from_headers(headers)
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Authenticate a request from its headers
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthenticatedUser, AuthError> {
        let token = self.extract_token(headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(&token).map_err(AuthError::InvalidToken)?;

        Ok(AuthenticatedUser {
            user_id: claims.user_id,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}

/// Second space-delimited field of a `Bearer` authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut fields = value.split(' ');
    let scheme = fields.next()?;
    let token = fields.next()?;

    (scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty()).then_some(token)
}

/// Build the HTTP-only session cookie for `token`
///
/// `Max-Age` matches the token lifetime so the browser drops the cookie when
/// the token inside it stops verifying.
pub fn session_cookie(token: &str, lifetime: Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::seconds(lifetime.num_seconds()))
        .build()
}

/// Axum extractor for the authenticated user
///
/// Put it in a handler's arguments to require a valid token. The handler
/// only runs if the gate accepted the request.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let gate = AuthGate::from_ref(state);

        match gate.authenticate(&parts.headers) {
            Ok(user) => Ok(AuthUser(user)),
            Err(e) => {
                match &e {
                    AuthError::MissingToken => tracing::warn!("Request without token"),
                    AuthError::InvalidToken(reason) => tracing::warn!("Token rejected: {}", reason),
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::{header::COOKIE, HeaderValue};
    use pretty_assertions::assert_eq;

    fn gate() -> AuthGate {
        AuthGate::new(TokenService::new("gate_test_secret"))
    }

    fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_no_token() {
        let result = gate().authenticate(&HeaderMap::new());
        assert_matches!(result, Err(AuthError::MissingToken));
    }

    #[test]
    fn test_bearer_header() {
        let gate = gate();
        let user_id = Uuid::new_v4();
        let token = gate.tokens.issue(user_id).unwrap();

        let user = gate
            .authenticate(&headers(&[(AUTHORIZATION, &format!("Bearer {token}"))]))
            .unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.expires_at - user.issued_at, 3600);
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let gate = gate();
        let token = gate.tokens.issue(Uuid::new_v4()).unwrap();

        let found = gate.extract_token(&headers(&[(AUTHORIZATION, &format!("bearer {token}"))]));
        assert_eq!(found, Some(token));
    }

    #[test]
    fn test_cookie() {
        let gate = gate();
        let user_id = Uuid::new_v4();
        let token = gate.tokens.issue(user_id).unwrap();

        let user = gate
            .authenticate(&headers(&[(COOKIE, &format!("theme=dark; token={token}"))]))
            .unwrap();

        assert_eq!(user.user_id, user_id);
    }

    #[test]
    fn test_header_wins_over_cookie() {
        let gate = gate();
        let header_user = Uuid::new_v4();
        let cookie_user = Uuid::new_v4();
        let header_token = gate.tokens.issue(header_user).unwrap();
        let cookie_token = gate.tokens.issue(cookie_user).unwrap();

        let user = gate
            .authenticate(&headers(&[
                (AUTHORIZATION, &format!("Bearer {header_token}")),
                (COOKIE, &format!("token={cookie_token}")),
            ]))
            .unwrap();

        assert_eq!(user.user_id, header_user);
    }

    #[test]
    fn test_invalid_header_token_does_not_fall_back() {
        let gate = gate();
        let cookie_token = gate.tokens.issue(Uuid::new_v4()).unwrap();

        let result = gate.authenticate(&headers(&[
            (AUTHORIZATION, "Bearer garbage"),
            (COOKIE, &format!("token={cookie_token}")),
        ]));

        assert_matches!(result, Err(AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_other_scheme_falls_back_to_cookie() {
        let gate = gate();
        let user_id = Uuid::new_v4();
        let token = gate.tokens.issue(user_id).unwrap();

        let user = gate
            .authenticate(&headers(&[
                (AUTHORIZATION, "Basic dXNlcjpwYXNz"),
                (COOKIE, &format!("token={token}")),
            ]))
            .unwrap();

        assert_eq!(user.user_id, user_id);
    }

    #[test]
    fn test_bare_scheme_is_no_token() {
        assert_matches!(
            gate().authenticate(&headers(&[(AUTHORIZATION, "Bearer")])),
            Err(AuthError::MissingToken)
        );
        assert_matches!(
            gate().authenticate(&headers(&[(AUTHORIZATION, "Bearer ")])),
            Err(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_token_from_other_secret() {
        let token = TokenService::new("another_secret").issue(Uuid::new_v4()).unwrap();
        let result = gate().authenticate(&headers(&[(AUTHORIZATION, &format!("Bearer {token}"))]));

        assert_matches!(result, Err(AuthError::InvalidToken(TokenError::Invalid(_))));
    }

    #[test]
    fn test_empty_cookie_is_no_token() {
        let result = gate().authenticate(&headers(&[(COOKIE, "token=")]));
        assert_matches!(result, Err(AuthError::MissingToken));
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc.def.ghi", Duration::hours(1));

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc.def.ghi");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age().map(|age| age.whole_seconds()), Some(3600));
        assert_eq!(
            cookie.to_string(),
            "token=abc.def.ghi; HttpOnly; Path=/; Max-Age=3600"
        );
    }
}
