//! Key/Value Storage Repository Implementation

use platform::storage::KeyValueStorage;

use crate::domain::entity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::error::AuthResult;

/// Identity persisted as JSON under a single storage key
#[derive(Debug, Clone)]
pub struct StoredIdentityRepository<S> {
    storage: S,
    key: String,
}

impl<S> StoredIdentityRepository<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> IdentityRepository for StoredIdentityRepository<S>
where
    S: KeyValueStorage,
{
    fn load(&self) -> AuthResult<Option<Identity>> {
        let Some(json) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, identity: &Identity) -> AuthResult<()> {
        let json = serde_json::to_string(identity)?;
        self.storage.set_item(&self.key, &json)?;
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        self.storage.remove_item(&self.key)?;
        Ok(())
    }
}
