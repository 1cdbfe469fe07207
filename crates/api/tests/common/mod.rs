//! Shared test harness: router construction and HTTP helpers.
//!
//! Tests drive the real application router (full middleware stack)
//! through `tower::ServiceExt::oneshot`, without a TCP listener.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use homecheck_api::auth::jwt::JwtConfig;
use homecheck_api::config::ServerConfig;
use homecheck_api::router::build_app_router;
use homecheck_api::state::AppState;
use homecheck_cloud::{LocalStorage, ObjectStorage};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// A local-filesystem photo store rooted in a fresh per-test directory.
pub fn test_storage() -> Arc<dyn ObjectStorage> {
    let dir: PathBuf = std::env::temp_dir()
        .join("homecheck-tests")
        .join(uuid::Uuid::new_v4().to_string());
    Arc::new(LocalStorage::new(dir, Some("http://photos.test")))
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the default local test storage.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_storage(pool, test_storage())
}

/// Build the app against a specific storage provider (e.g. one that fails
/// every upload).
pub fn build_test_app_with_storage(pool: PgPool, storage: Arc<dyn ObjectStorage>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, no authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
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
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Multipart boundary used by [`post_multipart_auth`].
const BOUNDARY: &str = "homecheck-test-boundary";

/// Send an authenticated multipart POST with text fields and `photo` file
/// parts (filename, bytes).
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    fields: &[(&str, &str)],
    photos: &[(&str, &[u8])],
) -> Response<Body> {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (filename, bytes) in photos {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"photo\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

// ---------------------------------------------------------------------------
// Auth + fixture helpers
// ---------------------------------------------------------------------------

/// Sign up a fresh user via the API, returning the access token.
pub async fn signup(pool: &PgPool, email: &str) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": email, "password": "a-test-password" }),
    )
    .await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "test signup should succeed"
    );
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Create a house via the API, returning its id.
pub async fn create_house(pool: &PgPool, token: &str, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/houses",
        token,
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a room under a house via the API, returning its id.
pub async fn create_room(pool: &PgPool, token: &str, house_id: i64, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/houses/{house_id}/rooms"),
        token,
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// A minimal valid 1x1 RGBA PNG, usable as an uploaded photo.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89,
    0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01,
    0x0D, 0x0A, 0x2D, 0xB4,
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, // IEND
    0xAE, 0x42, 0x60, 0x82,
];
