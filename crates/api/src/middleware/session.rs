//! Session middleware for every API route.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use maktab_core::auth::{AdminGrant, Session};
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// Session resolved for the current request.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Cookie token, if the request carried a live one.
    pub token: Option<Uuid>,
    /// Session state; anonymous when there is no live token.
    pub session: Session,
}

/// Resolves the session cookie and stores a [`SessionContext`] in request extensions.
///
/// Missing, malformed or unknown cookies resolve to an anonymous session.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());

    let context = jar
        .get(&state.cookie_name)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
        .and_then(|token| {
            state.sessions.get(token).map(|session| SessionContext {
                token: Some(token),
                session,
            })
        })
        .unwrap_or_default();

    request.extensions_mut().insert(context);
    next.run(request).await
}

/// Extractor for the current session, admin or anonymous.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionContext);

impl CurrentSession {
    /// The session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.0.session
    }

    /// The cookie token, if any.
    #[must_use]
    pub fn token(&self) -> Option<Uuid> {
        self.0.token
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<SessionContext>()
                .cloned()
                .unwrap_or_default(),
        ))
    }
}

/// Extractor that only succeeds for admin sessions.
///
/// Handlers that mutate ledgers take this and pass [`AdminAccess::grant`] to the
/// repositories. Anonymous requests are rejected with `403`.
#[derive(Debug)]
pub struct AdminAccess {
    /// Mutation capability for this request.
    pub grant: AdminGrant,
    /// Cookie token of the admin session.
    pub token: Option<Uuid>,
    /// Username of the logged-in admin.
    pub username: String,
}

impl<S> FromRequestParts<S> for AdminAccess
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .unwrap_or_default();

        let grant = context.session.admin_grant()?;
        Ok(Self {
            grant,
            token: context.token,
            username: context.session.username().unwrap_or_default().to_string(),
        })
    }
}
