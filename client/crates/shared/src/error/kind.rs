//! Error Kind - Classification of session failures
//!
//! Defines the [`ErrorKind`] enum shared by every crate that reports
//! failures across the session boundary.

/// Failure classification
///
/// Two families exist: failures caused by what the user typed or by the
/// identity provider refusing them (`is_user_facing`), and failures of the
/// environment. Callers only need the reason string; the kind decides how
/// loudly the failure is logged.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Validation;
/// assert_eq!(kind.to_string(), "Validation");
/// assert!(kind.is_user_facing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input rejected before reaching the identity provider
    Validation,
    /// Credentials rejected by the identity provider
    Unauthorized,
    /// Identity provider could not be reached
    Unavailable,
    /// Durable storage failed to read or write
    Storage,
    /// Anything else
    Internal,
}

impl ErrorKind {
    /// Human-readable label
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::Storage => "Storage",
            ErrorKind::Internal => "Internal",
        }
    }

    /// Failure the user can act on by changing their input
    #[inline]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, ErrorKind::Validation | ErrorKind::Unauthorized)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ErrorKind::Validation.to_string(), "Validation");
        assert_eq!(ErrorKind::Unauthorized.to_string(), "Unauthorized");
        assert_eq!(ErrorKind::Storage.to_string(), "Storage");
    }

    #[test]
    fn test_user_facing_split() {
        assert!(ErrorKind::Validation.is_user_facing());
        assert!(ErrorKind::Unauthorized.is_user_facing());
        assert!(!ErrorKind::Storage.is_user_facing());
        assert!(!ErrorKind::Unavailable.is_user_facing());
        assert!(!ErrorKind::Internal.is_user_facing());
    }
}
