//! Test harness driving the router over an in-memory database.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use maktab_api::{AppState, create_router};
use maktab_db::CredentialStore;
use maktab_shared::config::{DatabaseConfig, SessionConfig};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Router plus the state behind it.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Response parts the tests look at.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Fresh database, migrated, with the default admin bootstrapped.
    pub async fn new() -> Self {
        Self::with_sessions(&SessionConfig::default()).await
    }

    /// Same as [`TestApp::new`] with custom session expiry.
    pub async fn with_sessions(sessions: &SessionConfig) -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout_secs: 5,
            max_lifetime_secs: 3600,
        };
        let db = maktab_db::connect(&config)
            .await
            .expect("Failed to open in-memory database");
        maktab_db::migrate(&db).await.expect("Failed to run migrations");
        CredentialStore::new(db.clone())
            .initialize(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .expect("Failed to bootstrap admin");

        let state = AppState::new(db, sessions);
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router should not fail");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Body should be JSON")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, None, cookie).await
    }

    /// Logs in and returns the `name=value` cookie pair.
    pub async fn login_with(&self, username: &str, password: &str) -> Option<String> {
        let response = self
            .send(
                Method::POST,
                "/api/v1/auth/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;
        if response.status != StatusCode::OK {
            return None;
        }
        session_cookie(&response.headers)
    }

    pub async fn login(&self) -> String {
        self.login_with(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .expect("Admin login should succeed")
    }
}

/// Extracts `name=value` from the `set-cookie` header.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("maktab_session="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}
