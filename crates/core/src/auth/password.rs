//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings, which embed the per-identity random salt and the
//! cost parameters next to the digest.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{self, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Hashing or verification could not run.
///
/// A wrong password is not an error: [`verify_password`] returns `Ok(false)`.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Argon2 refused to hash the password.
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// Argon2 failed while comparing.
    #[error("failed to verify password: {0}")]
    Verify(String),

    /// The stored value is not an Argon2 PHC string, e.g. a legacy bcrypt hash.
    #[error("stored password hash is not a readable Argon2 hash")]
    InvalidHash,
}

/// Hashes `password` with Argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns `PasswordError::Hash` if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Checks `password` against a stored PHC string.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` when `stored` cannot be parsed.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(e.to_string())),
    }
}
