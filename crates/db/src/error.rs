//! Error type for storage operations.

use maktab_core::auth::PasswordError;
use maktab_core::ledger::ValidationError;
use maktab_shared::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Errors returned by repositories and the credential store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before anything was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Connection loss, pool exhaustion or constraint violation.
    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),

    /// Password hashing failed, or a stored hash is unreadable.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => Self::Validation(e.to_string()),
            StoreError::Storage(e) => Self::Database(e.to_string()),
            StoreError::Password(e) => Self::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = StoreError::from(ValidationError::NegativeAmount).into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = StoreError::from(DbErr::Custom("connection refused".into())).into();
        assert_eq!(err.error_code(), "DATABASE_ERROR");

        let err: AppError = StoreError::from(PasswordError::InvalidHash).into();
        assert_eq!(err.status_code(), 500);
    }
}
