//! Validation errors for ledger input and credential changes.

use thiserror::Error;

/// Input rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amounts are never below zero.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Amount is finer than the smallest stored unit.
    #[error("Amount cannot have more than {max} decimal places")]
    TooManyDecimalPlaces {
        /// Maximum number of decimal places.
        max: u32,
    },

    /// Amount does not fit the ledger columns.
    #[error("Amount must be less than 1,000,000,000,000")]
    AmountTooLarge,

    /// Expense category outside the fixed set.
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),

    /// New password and its confirmation differ.
    #[error("New passwords don't match")]
    PasswordMismatch,

    /// New password is shorter than the policy allows.
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort {
        /// Minimum number of characters.
        min: usize,
    },
}

impl ValidationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::TooManyDecimalPlaces { .. } => "TOO_MANY_DECIMAL_PLACES",
            Self::AmountTooLarge => "AMOUNT_TOO_LARGE",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::PasswordTooShort { .. } => "PASSWORD_TOO_SHORT",
        }
    }
}
