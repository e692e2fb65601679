//! Common test utilities and helpers
//!
//! Builds an in-process server over an in-memory user store, plus helpers for
//! creating users and reading the session cookie.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{header::SET_COOKIE, HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use credgate::backend::auth::users::{MemoryUserStore, NewUser, UserStore};
use credgate::backend::routes::create_router;
use credgate::backend::server::{AppState, ServerConfig};
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration_test_secret";

/// Lowest bcrypt cost, keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Server plus handles into its state
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryUserStore>,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        let mut config = ServerConfig::new(TEST_SECRET);
        config.bcrypt_cost = TEST_BCRYPT_COST;

        let store = Arc::new(MemoryUserStore::new());
        let state = AppState::new(&config, store.clone());
        let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");

        Self { server, store, state }
    }

    /// Insert a user directly into the store and return its ID
    pub async fn create_user(&self, email: &str, password: &str) -> Uuid {
        let password_hash = self.state.hasher.hash(password).expect("Failed to hash password");
        self.store
            .create(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Sign up through the API, returning the response
    pub async fn signup(&self, email: &str, password: &str) -> TestResponse {
        self.server
            .post("/signin")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "confirmPassword": password,
            }))
            .await
    }

    /// Log in through the API, returning the response
    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.server
            .post("/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .await
    }
}

/// Raw `Set-Cookie` header of a response
pub fn set_cookie(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Value of the `token` cookie set by a response
pub fn session_token(response: &TestResponse) -> Option<String> {
    let header = set_cookie(response)?;
    let pair = header.split(';').next()?.trim();
    pair.strip_prefix("token=").map(str::to_string)
}

/// `Authorization: Bearer <token>`
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        axum::http::header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid header value"),
    )
}

/// `Cookie: token=<token>`
pub fn token_cookie(token: &str) -> (HeaderName, HeaderValue) {
    (
        axum::http::header::COOKIE,
        HeaderValue::from_str(&format!("token={}", token)).expect("Invalid header value"),
    )
}
