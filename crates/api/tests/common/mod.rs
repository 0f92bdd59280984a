#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use kino_api::auth::jwt::JwtConfig;
use kino_api::config::ServerConfig;
use kino_api::router::build_app_router;
use kino_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Register a user via the API and return `(access_token, user_id)`.
pub async fn register_user(pool: &PgPool, username: &str) -> (String, i64) {
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let token = json["access_token"]
        .as_str()
        .expect("response must contain access_token")
        .to_string();
    let user_id = json["user"]["id"]
        .as_i64()
        .expect("response must contain user id");
    (token, user_id)
}
