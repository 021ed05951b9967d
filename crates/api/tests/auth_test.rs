//! HTTP tests for login, logout, session state and password changes.

mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode, header};
use common::{ADMIN_PASSWORD, ADMIN_USERNAME, TestApp, session_cookie};
use maktab_shared::config::SessionConfig;
use serde_json::json;

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_fresh_client_is_anonymous() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/auth/session", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["level"], "anonymous");
    assert_eq!(response.body["permissions"]["can_create"], false);
    assert!(response.body["username"].is_null());
}

#[tokio::test]
async fn test_unknown_cookie_is_anonymous() {
    let app = TestApp::new().await;

    let response = app
        .get(
            "/api/v1/auth/session",
            Some("maktab_session=6f9619ff-8b86-d011-b42d-00c04fc964ff"),
        )
        .await;

    assert_eq!(response.body["level"], "anonymous");
}

#[tokio::test]
async fn test_login_with_wrong_password_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({ "username": ADMIN_USERNAME, "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(
        response.body["message"],
        "Authentication failed: Invalid username or password"
    );
    assert!(session_cookie(&response.headers).is_none());
    assert!(app.state.sessions.is_empty());

    assert!(app.login_with("nobody", ADMIN_PASSWORD).await.is_none());
}

#[tokio::test]
async fn test_login_then_logout() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app.get("/api/v1/auth/session", Some(&cookie)).await;
    assert_eq!(response.body["level"], "admin");
    assert_eq!(response.body["username"], ADMIN_USERNAME);
    assert_eq!(response.body["permissions"]["can_manage_credentials"], true);

    let response = app
        .send(Method::POST, "/api/v1/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["level"], "anonymous");

    let response = app.get("/api/v1/auth/session", Some(&cookie)).await;
    assert_eq!(response.body["level"], "anonymous");
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let app = TestApp::new().await;
    let admin_cookie = app.login().await;

    let admin = app.get("/api/v1/auth/session", Some(&admin_cookie)).await;
    let visitor = app.get("/api/v1/auth/session", None).await;

    assert_eq!(admin.body["level"], "admin");
    assert_eq!(visitor.body["level"], "anonymous");
}

#[tokio::test]
async fn test_change_password_requires_admin() {
    let app = TestApp::new().await;

    let response = app
        .send(
            Method::POST,
            "/api/v1/auth/change-password",
            Some(json!({
                "username": ADMIN_USERNAME,
                "current_password": ADMIN_PASSWORD,
                "new_password": "newsecret1",
                "confirm_password": "newsecret1"
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_change_password_validation() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let mismatch = app
        .send(
            Method::POST,
            "/api/v1/auth/change-password",
            Some(json!({
                "username": ADMIN_USERNAME,
                "current_password": ADMIN_PASSWORD,
                "new_password": "newsecret1",
                "confirm_password": "newsecret2"
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);
    assert_eq!(mismatch.body["message"], "Validation error: New passwords don't match");

    let short = app
        .send(
            Method::POST,
            "/api/v1/auth/change-password",
            Some(json!({
                "username": ADMIN_USERNAME,
                "current_password": ADMIN_PASSWORD,
                "new_password": "short",
                "confirm_password": "short"
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    let wrong_current = app
        .send(
            Method::POST,
            "/api/v1/auth/change-password",
            Some(json!({
                "username": ADMIN_USERNAME,
                "current_password": "not-the-password",
                "new_password": "newsecret1",
                "confirm_password": "newsecret1"
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(wrong_current.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_current.body["error"], "UNAUTHORIZED");

    // Nothing changed, the session is still admin
    let session = app.get("/api/v1/auth/session", Some(&cookie)).await;
    assert_eq!(session.body["level"], "admin");
    assert!(app.login_with(ADMIN_USERNAME, ADMIN_PASSWORD).await.is_some());
}

#[tokio::test]
async fn test_change_password_forces_relogin() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app
        .send(
            Method::POST,
            "/api/v1/auth/change-password",
            Some(json!({
                "username": ADMIN_USERNAME,
                "current_password": ADMIN_PASSWORD,
                "new_password": "newsecret1",
                "confirm_password": "newsecret1"
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["changed"], true);
    assert_eq!(response.body["session"]["level"], "anonymous");
    assert!(
        response
            .headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|value| value.starts_with("maktab_session=;"))
    );
    assert!(app.state.sessions.is_empty());

    let session = app.get("/api/v1/auth/session", Some(&cookie)).await;
    assert_eq!(session.body["level"], "anonymous");

    assert!(app.login_with(ADMIN_USERNAME, ADMIN_PASSWORD).await.is_none());
    assert!(app.login_with(ADMIN_USERNAME, "newsecret1").await.is_some());
}

#[tokio::test]
async fn test_idle_session_falls_back_to_anonymous() {
    let app = TestApp::with_sessions(&SessionConfig {
        idle_timeout_secs: 1,
        ..SessionConfig::default()
    })
    .await;
    let cookie = app.login().await;

    let active = app.get("/api/v1/auth/session", Some(&cookie)).await;
    assert_eq!(active.body["level"], "admin");

    tokio::time::sleep(Duration::from_millis(1500)).await;

    let idle = app.get("/api/v1/auth/session", Some(&cookie)).await;
    assert_eq!(idle.body["level"], "anonymous");

    let create = app
        .send(
            Method::POST,
            "/api/v1/donations",
            Some(json!({ "donor_name": "Karim", "amount": "500", "date": "2024-03-01" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);
    assert!(app.state.sessions.is_empty());
}
