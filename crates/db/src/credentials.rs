//! Credential store for admin identities.
//!
//! Only Argon2id hashes are persisted. Verification never distinguishes an unknown
//! username from a wrong password.

use maktab_core::auth::{self, VerifiedAdmin, hash_password};
use sea_orm::DatabaseConnection;

use crate::error::StoreError;
use crate::repositories::AdminUserRepository;

/// Verifies and rotates admin credentials.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: AdminUserRepository,
}

impl CredentialStore {
    /// Creates a credential store over the given pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            users: AdminUserRepository::new(db),
        }
    }

    /// Creates the first admin identity if none exists yet.
    ///
    /// Returns `true` if an identity was created. Existing identities are never touched.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or storage fails.
    pub async fn initialize(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        if self.users.count().await? > 0 {
            tracing::debug!("admin identity already present, skipping bootstrap");
            return Ok(false);
        }

        let hash = hash_password(password)?;
        self.users.create(username, &hash).await?;
        tracing::info!(username, "bootstrapped admin identity");

        Ok(true)
    }

    /// Checks a username/password pair and returns a login proof on success.
    ///
    /// An unknown username yields `None`, same as a wrong password.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the stored hash is unreadable.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<VerifiedAdmin>, StoreError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(None);
        };

        Ok(auth::authenticate(&user.username, password, &user.password_hash)?)
    }

    /// Whether `password` is correct for `username`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the stored hash is unreadable.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        Ok(self.authenticate(username, password).await?.is_some())
    }

    /// Replaces the password of `username` if `old_password` verifies.
    ///
    /// Returns `false` and changes nothing when verification fails. Length and
    /// confirmation checks belong to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or storage fails.
    pub async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<bool, StoreError> {
        if !self.verify(username, old_password).await? {
            tracing::info!(username, "password change rejected");
            return Ok(false);
        }

        let hash = hash_password(new_password)?;
        let changed = self.users.update_password_hash(username, &hash).await?;
        if changed {
            tracing::info!(username, "password changed");
        }

        Ok(changed)
    }
}
