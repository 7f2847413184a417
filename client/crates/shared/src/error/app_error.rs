//! Application Error - the failure value handed across the session boundary
//!
//! Defines [`AppError`] and the [`AppResult<T>`] alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified failure value
///
/// Carries a classification and a reason string fit for display next to
/// the form that triggered it.
///
/// ## Fields
/// * `kind` - classification, drives log level
/// * `reason` - user-facing reason
/// * `source` - underlying error, for logs only
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::Validation, "Email and password are required");
/// assert_eq!(err.kind(), ErrorKind::Validation);
///
/// let err = AppError::new(ErrorKind::Unauthorized, "Invalid credentials");
/// assert_eq!(err.to_string(), "[Unauthorized] Invalid credentials");
/// ```
pub struct AppError {
    kind: ErrorKind,
    reason: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Result alias for operations that fail with [`AppError`]
///
/// ## Examples
/// ```rust
/// use kernel::{AppError, AppResult, ErrorKind};
///
/// fn require(value: &str) -> AppResult<&str> {
///     if value.is_empty() {
///         return Err(AppError::new(ErrorKind::Validation, "Value is required"));
///     }
///     Ok(value)
/// }
/// assert!(require("").is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            reason: reason.into(),
            source: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Attach the underlying error
    ///
    /// ```rust
    /// use kernel::{AppError, ErrorKind};
    /// use std::error::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let err = AppError::new(ErrorKind::Storage, "Could not save session").with_source(io);
    /// assert!(err.source().is_some());
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Reason suitable for display
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("reason", &self.reason);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.reason)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::Unauthorized, "Invalid credentials");
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.reason(), "Invalid credentials");
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AppError::new(ErrorKind::Storage, "Failed to read session").with_source(io_err);
        assert!(err.source().is_some());
        assert_eq!(err.reason(), "Failed to read session");
    }

    #[test]
    fn test_display() {
        let err = AppError::new(ErrorKind::Unauthorized, "Invalid credentials");
        assert_eq!(err.to_string(), "[Unauthorized] Invalid credentials");
    }
}
