//! Authentication API integration tests
//!
//! Drives the full router: signup, login, current user, liveness, and the
//! JSON error bodies.

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use common::{bearer, session_token, set_cookie, token_cookie, TestApp};
use credgate::backend::auth::handlers::types::PASSWORD_PLACEHOLDER;
use credgate::backend::auth::users::UserStore;
use pretty_assertions::assert_eq;
use serde_json::Value;

#[tokio::test]
async fn test_signup_login_me_flow() {
    let app = TestApp::new();

    let response = app.signup("a@x.com", "longpassword1").await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "User created successfully");
    let signup_token = body["token"].as_str().unwrap().to_string();
    assert_eq!(session_token(&response), Some(signup_token.clone()));

    let response = app.login("a@x.com", "longpassword1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    let login_token = session_token(&response).expect("login sets the session cookie");
    assert_eq!(body["token"], login_token.as_str());

    let (name, value) = token_cookie(&login_token);
    let response = app.server.get("/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let user = &body["filteredUser"];
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["password"], PASSWORD_PLACEHOLDER);
    assert!(user["id"].is_string());
    assert!(user["createdAt"].is_string());
}

#[tokio::test]
async fn test_signup_stores_hash_not_password() {
    let app = TestApp::new();

    app.signup("hash@x.com", "longpassword1").await;

    let user = app.store.find_by_email("hash@x.com").await.unwrap().unwrap();
    assert_ne!(user.password_hash, "longpassword1");
    assert!(app.state.hasher.verify("longpassword1", &user.password_hash));
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let app = TestApp::new();

    let response = app.signup("cookie@x.com", "longpassword1").await;
    let header = set_cookie(&response).expect("signup sets a cookie");

    assert!(header.starts_with("token="));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("Path=/"));
    assert!(header.contains("Max-Age=3600"));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new();
    let original_id = app.create_user("dup@x.com", "firstpassword").await;

    let response = app.signup("dup@x.com", "secondpassword").await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "User already exists");
    assert_eq!(set_cookie(&response), None);

    let stored = app.store.find_by_email("dup@x.com").await.unwrap().unwrap();
    assert_eq!(stored.id, original_id);
    assert!(app.state.hasher.verify("firstpassword", &stored.password_hash));
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_signup_invalid_input() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/signin")
        .json(&serde_json::json!({
            "email": "not-an-email",
            "password": "longpassword1",
            "confirmPassword": "differentpassword",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid input data");
    assert_eq!(body["status"], 400);
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "confirmPassword"]);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_signup_missing_field() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/signin")
        .json(&serde_json::json!({ "email": "a@x.com", "password": "longpassword1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/login")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.create_user("known@x.com", "rightpassword").await;

    let wrong_password = app.login("known@x.com", "wrongpassword").await;
    let unknown_email = app.login("unknown@x.com", "rightpassword").await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.text(), unknown_email.text());
    assert_eq!(set_cookie(&wrong_password), None);
    assert_eq!(set_cookie(&unknown_email), None);

    let body: Value = wrong_password.json();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_invalid_input() {
    let app = TestApp::new();

    let response = app.login("nope", "short").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_with_bearer_header() {
    let app = TestApp::new();
    let user_id = app.create_user("bearer@x.com", "longpassword1").await;
    let token = app.state.tokens.issue(user_id).unwrap();

    let (name, value) = bearer(&token);
    let response = app.server.get("/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["filteredUser"]["id"], user_id.to_string());
}

#[tokio::test]
async fn test_me_after_user_deleted() {
    let app = TestApp::new();
    let user_id = app.create_user("gone@x.com", "longpassword1").await;
    let token = app.state.tokens.issue(user_id).unwrap();
    app.store.remove(user_id).await;

    let (name, value) = bearer(&token);
    let response = app.server.get("/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_health_route() {
    let app = TestApp::new();

    let response = app.server.get("/test").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Test route is working!");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app.server.get("/nope").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_passwords_past_bcrypt_limit_are_rejected() {
    let app = TestApp::new();

    let response = app.signup("long@x.com", &"a".repeat(100)).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty().await);

    // A stored 72-byte password must not accept a longer one sharing its bytes
    app.create_user("limit@x.com", &"a".repeat(72)).await;
    let response = app.login("limit@x.com", &format!("{}b", "a".repeat(99))).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(set_cookie(&response), None);

    let response = app.login("limit@x.com", &"a".repeat(72)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
