//! Identity Entity
//!
//! The signed-in user's profile. This is also the persisted record:
//! `{"id","email","name","avatarUrl"}` as JSON.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{AvatarUrl, DisplayName, Email, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: UserId,
    pub email: Email,
    pub name: DisplayName,
    pub avatar_url: AvatarUrl,
}

impl Identity {
    /// Fresh identity with a generated avatar
    pub fn new(email: Email, name: DisplayName, avatar_base_url: &str) -> Self {
        Self::with_id(UserId::new(), email, name, avatar_base_url)
    }

    pub fn with_id(id: UserId, email: Email, name: DisplayName, avatar_base_url: &str) -> Self {
        let avatar_url = AvatarUrl::for_name(avatar_base_url, &name);
        Self {
            id,
            email,
            name,
            avatar_url,
        }
    }
}
