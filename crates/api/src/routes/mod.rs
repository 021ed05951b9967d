//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::session_middleware};

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod donations;
pub mod expenses;
pub mod health;
pub mod salaries;

/// Creates the API router. Every route sees the caller's session.
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(categories::routes())
        .merge(donations::routes())
        .merge(expenses::routes())
        .merge(salaries::routes())
        .merge(dashboard::routes())
        .layer(middleware::from_fn_with_state(state, session_middleware))
}
