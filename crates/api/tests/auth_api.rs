//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover signup, login, token refresh, logout, the `/auth/me`
//! endpoint, and account lockout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

use homecheck_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_returns_tokens_and_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "new@test.com", "password": "a-test-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["email"], "new@test.com");
    assert!(
        json["user"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_duplicate_email_conflicts(pool: PgPool) {
    common::signup(&pool, "dup@test.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "dup@test.com", "password": "a-test-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "not-an-email", "password": "a-test-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "short@test.com", "password": "short" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("at least 8 characters"));
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_success(pool: PgPool) {
    common::signup(&pool, "login@test.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "login@test.com", "password": "a-test-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["email"], "login@test.com");
}

/// Invalid credentials return 401 with an error naming the failure, and no
/// session is established.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_rejected(pool: PgPool) {
    common::signup(&pool, "wrongpw@test.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_unknown_email_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "ghost@test.com", "password": "whatever" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_deactivated_account_forbidden(pool: PgPool) {
    common::signup(&pool, "inactive@test.com").await;
    let user = UserRepo::find_by_email(&pool, "inactive@test.com")
        .await
        .unwrap()
        .unwrap();
    UserRepo::deactivate(&pool, user.id).await.unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "inactive@test.com", "password": "a-test-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Five consecutive failures lock the account; the next attempt (even with
/// the correct password) is rejected with 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_lockout_after_repeated_failures(pool: PgPool) {
    common::signup(&pool, "locked@test.com").await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({ "email": "locked@test.com", "password": "incorrect" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "locked@test.com", "password": "a-test-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh & logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_tokens(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "rotate@test.com", "password": "a-test-password" }),
    )
    .await;
    let json = body_json(response).await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"], refresh_token);

    // The consumed token is revoked and cannot be used again.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_sessions(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "logout@test.com", "password": "a-test-password" }),
    )
    .await;
    let json = body_json(response).await;
    let access_token = json["access_token"].as_str().unwrap().to_string();
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/auth/logout",
        &access_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Refresh token no longer works after logout.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Me & auth gating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn me_returns_current_user(pool: PgPool) {
    let token = common::signup(&pool, "me@test.com").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "me@test.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_routes_require_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/v1/houses").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/houses", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
