//! Authentication and access control.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification producing a login proof
//! - The per-session admin/anonymous gate
//! - The password-change policy

mod password;
mod policy;
mod session;

pub use password::{PasswordError, hash_password, verify_password};
pub use policy::{MIN_PASSWORD_LENGTH, validate_new_password};
pub use session::{
    ANONYMOUS_DONOR_LABEL, AccessError, AccessLevel, AdminGrant, LoginOutcome, Permissions,
    Session, VerifiedAdmin,
};

/// Verifies `password` against the stored hash of `username`.
///
/// Returns a proof that [`Session::login`] accepts, or `None` for a wrong password.
///
/// # Errors
///
/// Returns an error if the stored hash is malformed or verification fails unexpectedly.
pub fn authenticate(
    username: &str,
    password: &str,
    stored_hash: &str,
) -> Result<Option<VerifiedAdmin>, PasswordError> {
    Ok(verify_password(password, stored_hash)?.then(|| VerifiedAdmin::new(username)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_yields_proof_only_for_correct_password() {
        let hash = hash_password("admin123").unwrap();

        let proof = authenticate("admin", "admin123", &hash).unwrap().unwrap();
        assert_eq!(proof.username(), "admin");
        assert!(authenticate("admin", "admin124", &hash).unwrap().is_none());
    }

    #[test]
    fn test_authenticated_session_can_mutate() {
        let hash = hash_password("admin123").unwrap();
        let mut session = Session::anonymous();

        session.login(authenticate("admin", "admin123", &hash).unwrap());

        assert!(session.admin_grant().is_ok());
    }
}
