//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for the three ledgers, the dashboard and authentication
//! - Server-side sessions carried by an HTTP-only cookie
//! - The session middleware and the admin extractor guarding mutations
//! - JSON error responses

pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod session;

use axum::Router;
use maktab_shared::config::SessionConfig;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use extract::JsonBody;
pub use session::SessionRegistry;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Live sessions, keyed by cookie token.
    pub sessions: Arc<SessionRegistry>,
    /// Name of the session cookie.
    pub cookie_name: Arc<str>,
}

impl AppState {
    /// Builds state with an empty session registry expiring per `session`.
    #[must_use]
    pub fn new(db: DatabaseConnection, session: &SessionConfig) -> Self {
        Self {
            db: Arc::new(db),
            sessions: Arc::new(SessionRegistry::from_config(session)),
            cookie_name: Arc::from(session.cookie_name.as_str()),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
