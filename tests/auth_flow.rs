//! Authentication API integration tests
//!
//! End-to-end tests for the two endpoints, run against the in-memory
//! credential store. Hashing uses the bcrypt minimum cost to keep the
//! suite fast.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;

use authgate::auth::hasher::BcryptHasher;
use authgate::auth::service::AuthService;
use authgate::auth::store::memory::MemoryCredentialStore;
use authgate::auth::tokens::JwtIssuer;
use authgate::server::init::create_router;
use authgate::server::state::AppState;

fn create_test_server() -> TestServer {
    let auth = AuthService::new(
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(BcryptHasher::with_cost(4)),
        Arc::new(JwtIssuer::new("integration-secret", Duration::from_secs(60))),
    );
    let router = create_router(AppState {
        auth: Arc::new(auth),
    });
    TestServer::new(router).unwrap()
}

#[tokio::test]
async fn register_then_authenticate_round_trip() {
    let server = create_test_server();

    // Register alice
    let response = server
        .post("/auth/create")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "s3cret"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["username"], "alice");

    // Same username again is a conflict
    let response = server
        .post("/auth/create")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "s3cret"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Username is already taken.");

    // Wrong password
    let response = server
        .post("/auth/authorize")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "wrong"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // Correct password yields a token
    let response = server
        .post("/auth/authorize")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "s3cret"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let token = body["access_token"].as_str().unwrap();
    assert!(!token.is_empty());
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let server = create_test_server();

    let response = server
        .post("/auth/create")
        .json(&serde_json::json!({ "username": "bob" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Missing username or password.");

    let response = server
        .post("/auth/create")
        .json(&serde_json::json!({ "username": "", "password": "s3cret" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn authenticate_unknown_username_is_not_found() {
    let server = create_test_server();

    let response = server
        .post("/auth/authorize")
        .json(&serde_json::json!({
            "username": "nobody",
            "password": "s3cret"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User could not be found");
}

#[tokio::test]
async fn registration_response_carries_no_secrets() {
    let server = create_test_server();

    let response = server
        .post("/auth/create")
        .json(&serde_json::json!({
            "username": "carol",
            "password": "s3cret"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let raw = response.text();
    assert!(!raw.contains("s3cret"));
    assert!(!raw.contains("password"));
}
