//! Avatar URL Value Object
//!
//! Generated initials avatar for a display name.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::display_name::DisplayName;

/// Default avatar generator endpoint
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct AvatarUrl(String);

impl AvatarUrl {
    /// `<base>?name=<percent-encoded name>`
    pub fn for_name(base_url: &str, name: &DisplayName) -> Self {
        Self(format!(
            "{}?name={}",
            base_url,
            urlencoding::encode(name.as_str())
        ))
    }

    /// Wrap a URL read back from storage
    pub fn from_stored(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_name_encodes() {
        let name = DisplayName::new("Test User").unwrap();
        let url = AvatarUrl::for_name(DEFAULT_AVATAR_BASE_URL, &name);
        assert_eq!(url.as_str(), "https://ui-avatars.com/api/?name=Test%20User");
    }

    #[test]
    fn test_for_name_escapes_reserved() {
        let name = DisplayName::new("A&B=C").unwrap();
        let url = AvatarUrl::for_name("https://avatars.test/", &name);
        assert_eq!(url.as_str(), "https://avatars.test/?name=A%26B%3DC");
    }

    #[test]
    fn test_display_is_url() {
        let url = AvatarUrl::from_stored("https://x.test/a.png");
        assert_eq!(url.to_string(), "https://x.test/a.png");
    }
}
