//! Password Value Object
//!
//! Clear-text password as typed into a form. Only ever handed to the
//! identity provider; never persisted or logged.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Clear-text password, zeroized on drop
///
/// - Not `Clone`, so copies cannot linger
/// - `Debug` is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    /// Wrap raw input; `None` when the input is empty
    ///
    /// Whitespace is significant in passwords, so nothing is trimmed.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Length in characters, not bytes
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn meets_min_length(&self, min: usize) -> bool {
        self.char_count() >= min
    }

    /// Expose the secret for the identity provider
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
