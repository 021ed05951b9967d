//! In-memory session registry.
//!
//! Each client gets its own [`Session`], keyed by a random token stored in a cookie.
//! A session is dropped once it goes unused for the idle timeout, or once it reaches
//! its maximum age. Nothing here is persisted; a restart logs every admin out.

use std::time::Duration;

use maktab_core::auth::Session;
use maktab_shared::config::SessionConfig;
use moka::sync::Cache;
use uuid::Uuid;

/// Upper bound on live sessions.
const MAX_SESSIONS: u64 = 10_000;

/// Live sessions keyed by cookie token.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Cache<Uuid, Session>,
}

impl SessionRegistry {
    /// Registry whose sessions expire after `idle` without use, or `max_age` after login.
    #[must_use]
    pub fn new(idle: Duration, max_age: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_idle(idle)
                .time_to_live(max_age)
                .build(),
        }
    }

    /// Registry with the expiry from `config`.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            Duration::from_secs(config.idle_timeout_secs),
            Duration::from_secs(config.max_age_secs),
        )
    }

    /// Stores a session under a fresh token and returns the token.
    pub fn start(&self, session: Session) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.insert(token, session);
        token
    }

    /// Returns the session for `token` and marks it used.
    ///
    /// `None` for an unknown or expired token.
    #[must_use]
    pub fn get(&self, token: Uuid) -> Option<Session> {
        self.sessions.get(&token)
    }

    /// Drops the session for `token`. Returns whether it was live.
    pub fn end(&self, token: Uuid) -> bool {
        self.sessions.remove(&token).is_some()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.sessions.run_pending_tasks();
        self.sessions.entry_count()
    }

    /// Whether no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
