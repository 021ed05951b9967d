//! Access control gate.
//!
//! A [`Session`] is either `Anonymous` or `Admin`. It starts anonymous, becomes admin
//! only when handed a [`VerifiedAdmin`] proof, and returns to anonymous on logout or
//! after its own password change. Ledger mutations require an [`AdminGrant`], which only
//! an admin session can hand out.

use serde::Serialize;
use thiserror::Error;

use crate::ledger::Donation;

/// Label shown instead of the donor name of an anonymous donation.
pub const ANONYMOUS_DONOR_LABEL: &str = "Anonymous";

/// Access level of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Read-only, aggregated views with masked anonymous donors.
    #[default]
    Anonymous,
    /// Full create/update/delete control and credential management.
    Admin,
}

/// Errors raised by the access gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The operation needs an admin session.
    #[error("admin access required")]
    AdminRequired,
}

/// Proof that a username/password pair was verified against the credential store.
///
/// Only [`super::authenticate`] creates one.
#[derive(Debug)]
pub struct VerifiedAdmin {
    username: String,
}

impl VerifiedAdmin {
    pub(super) fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }

    /// The verified username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Capability required by every ledger mutation.
#[derive(Debug)]
pub struct AdminGrant {
    _private: (),
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The session is now admin.
    Authenticated,
    /// Credentials were rejected; the session is unchanged.
    InvalidCredentials,
}

/// Which operations the presentation layer may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Permissions {
    /// Whether the session is admin.
    pub is_admin: bool,
    /// Create ledger records.
    pub can_create: bool,
    /// Update ledger records.
    pub can_update: bool,
    /// Delete ledger records.
    pub can_delete: bool,
    /// Change admin credentials.
    pub can_manage_credentials: bool,
}

/// Per-client session state. Never persisted and never shared between clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    level: AccessLevel,
    username: Option<String>,
}

impl Session {
    /// A fresh anonymous session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            level: AccessLevel::Anonymous,
            username: None,
        }
    }

    /// Applies a login attempt. `None` means verification failed.
    pub fn login(&mut self, proof: Option<VerifiedAdmin>) -> LoginOutcome {
        match proof {
            Some(admin) => {
                self.level = AccessLevel::Admin;
                self.username = Some(admin.username);
                LoginOutcome::Authenticated
            }
            None => LoginOutcome::InvalidCredentials,
        }
    }

    /// Ends admin access.
    pub fn logout(&mut self) {
        *self = Self::anonymous();
    }

    /// Called after this session changed its own password; forces re-authentication.
    pub fn password_changed(&mut self) {
        self.logout();
    }

    /// Current access level.
    #[must_use]
    pub const fn level(&self) -> AccessLevel {
        self.level
    }

    /// Whether the session is admin.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.level, AccessLevel::Admin)
    }

    /// Username of the logged-in admin.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Hands out the capability needed for ledger mutations.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::AdminRequired` for anonymous sessions.
    pub fn admin_grant(&self) -> Result<AdminGrant, AccessError> {
        if self.is_admin() {
            Ok(AdminGrant { _private: () })
        } else {
            Err(AccessError::AdminRequired)
        }
    }

    /// Operations available to this session.
    #[must_use]
    pub const fn permissions(&self) -> Permissions {
        let admin = self.is_admin();
        Permissions {
            is_admin: admin,
            can_create: admin,
            can_update: admin,
            can_delete: admin,
            can_manage_credentials: admin,
        }
    }

    /// Donor name as this session may see it.
    ///
    /// Storage and aggregation always use the real name; masking happens only here.
    #[must_use]
    pub fn donor_name<'a>(&self, donation: &'a Donation) -> &'a str {
        if donation.is_anonymous && !self.is_admin() {
            ANONYMOUS_DONOR_LABEL
        } else {
            &donation.donor_name
        }
    }
}
