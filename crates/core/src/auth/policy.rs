//! Password policy checked before credentials are rotated.

use crate::ledger::ValidationError;

/// Minimum number of characters in a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks a new password and its confirmation.
///
/// # Errors
///
/// Returns `PasswordMismatch` if the two differ, otherwise `PasswordTooShort` if the
/// password has fewer than [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_new_password(
    new_password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if new_password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}
