//! Auth Error Types
//!
//! Auth-specific error variants that normalize into the unified
//! `kernel::AppError` at the session store boundary.

use kernel::{AppError, ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

use crate::domain::value_object::{DisplayNameError, EmailError};

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Name, email and password are required")]
    MissingRegistrationFields,

    #[error("Email is required")]
    MissingEmail,

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    InvalidName(#[from] DisplayNameError),

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Rejected by the identity provider
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Persisted record could not be decoded
    #[error("Stored session is corrupt: {0}")]
    CorruptRecord(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::MissingRegistrationFields
            | AuthError::MissingEmail
            | AuthError::InvalidEmail(_)
            | AuthError::InvalidName(_)
            | AuthError::PasswordTooShort { .. }
            | AuthError::PasswordMismatch => ErrorKind::Validation,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::ProviderUnavailable(_) => ErrorKind::Unavailable,
            AuthError::Storage(_) | AuthError::CorruptRecord(_) => ErrorKind::Storage,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to the failure an operation reports
    ///
    /// Input and credential failures keep their message. Anything else is
    /// reported with `fallback` and keeps the error as its source.
    pub fn into_failure(self, fallback: &'static str) -> AppError {
        let kind = self.kind();
        if kind.is_user_facing() {
            AppError::new(kind, self.to_string())
        } else {
            AppError::new(kind, fallback).with_source(self)
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session storage error");
            }
            AuthError::CorruptRecord(e) => {
                tracing::error!(error = %e, "Stored session could not be decoded");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::ProviderUnavailable(msg) => {
                tracing::error!(message = %msg, "Identity provider unavailable");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth input rejected");
            }
        }
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("background task failed: {err}"))
    }
}
