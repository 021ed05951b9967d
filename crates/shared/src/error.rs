//! Application-wide error types.

use thiserror::Error;

/// Failure of a user-facing operation, classified by how a client should react.
#[derive(Debug, Error)]
pub enum AppError {
    /// Credentials did not match a known admin.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The session lacks the access level the operation needs.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Input broke a business rule; nothing was written.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store could not be reached or rejected the write.
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else, such as an unreadable password hash.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Machine-readable code sent as `error` in API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to a client.
    ///
    /// Storage and internal failures are reported generically; their details belong in logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => {
                "The operation could not be completed. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
