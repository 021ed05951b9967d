//! Authentication routes for login, logout and credential changes.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use maktab_core::auth::{AccessLevel, LoginOutcome, Permissions, Session, validate_new_password};
use maktab_db::CredentialStore;
use maktab_shared::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extract::JsonBody,
    middleware::{AdminAccess, CurrentSession},
};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(current_session))
        .route("/auth/change-password", post(change_password))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Admin username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Password change request body.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    /// Admin whose password changes.
    pub username: String,
    /// Current password.
    pub current_password: String,
    /// New password.
    pub new_password: String,
    /// New password, typed again.
    pub confirm_password: String,
}

/// Session state as seen by the client.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// `anonymous` or `admin`.
    pub level: AccessLevel,
    /// Logged-in admin, if any.
    pub username: Option<String>,
    /// Operations the client may offer.
    pub permissions: Permissions,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            level: session.level(),
            username: session.username().map(str::to_string),
            permissions: session.permissions(),
        }
    }
}

fn session_cookie(name: &str, value: String) -> Cookie<'static> {
    Cookie::build((name.to_string(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// POST /auth/login - Verify credentials and start an admin session.
async fn login(
    State(state): State<AppState>,
    current: CurrentSession,
    jar: CookieJar,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    let store = CredentialStore::new((*state.db).clone());
    let proof = store.authenticate(&payload.username, &payload.password).await?;

    let mut session = Session::anonymous();
    if session.login(proof) == LoginOutcome::InvalidCredentials {
        info!(username = %payload.username, "Failed login attempt");
        return Err(AppError::Unauthorized("Invalid username or password".to_string()).into());
    }

    if let Some(old) = current.token() {
        state.sessions.end(old);
    }

    let body = SessionResponse::from(&session);
    let token = state.sessions.start(session);
    info!(username = %payload.username, "Admin logged in");

    let jar = jar.add(session_cookie(&state.cookie_name, token.to_string()));
    Ok((jar, Json(body)))
}

/// POST /auth/logout - End the current session.
async fn logout(
    State(state): State<AppState>,
    current: CurrentSession,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(token) = current.token() {
        state.sessions.end(token);
        if let Some(username) = current.session().username() {
            info!(username, "Admin logged out");
        }
    }

    let jar = jar.remove(Cookie::build(state.cookie_name.to_string()).path("/"));
    (jar, Json(SessionResponse::from(&Session::anonymous())))
}

/// GET /auth/session - Current access level and permissions.
async fn current_session(current: CurrentSession) -> Json<SessionResponse> {
    Json(SessionResponse::from(current.session()))
}

/// POST /auth/change-password - Rotate an admin password and end this session.
async fn change_password(
    State(state): State<AppState>,
    admin: AdminAccess,
    jar: CookieJar,
    JsonBody(payload): JsonBody<ChangePasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_new_password(&payload.new_password, &payload.confirm_password)?;

    let store = CredentialStore::new((*state.db).clone());
    let changed = store
        .change_password(
            &payload.username,
            &payload.current_password,
            &payload.new_password,
        )
        .await?;

    if !changed {
        return Err(AppError::Unauthorized("Current password is incorrect".to_string()).into());
    }

    if let Some(token) = admin.token {
        state.sessions.end(token);
    }
    info!(
        username = %payload.username,
        changed_by = %admin.username,
        "Password changed, re-authentication required"
    );

    let jar = jar.remove(Cookie::build(state.cookie_name.to_string()).path("/"));
    Ok((
        jar,
        Json(json!({
            "changed": true,
            "session": SessionResponse::from(&Session::anonymous()),
        })),
    ))
}
