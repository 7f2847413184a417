//! Repository Traits
//!
//! Interfaces for identity persistence and the identity provider.
//! Implementations are in the infrastructure layer.

use crate::domain::entity::{Credentials, Identity, Registration};
use crate::domain::value_object::Email;
use crate::error::AuthResult;

/// Persisted identity, at most one per client
///
/// Synchronous: backends are local storage. Callers on the async
/// executor move slow reads onto a blocking thread.
pub trait IdentityRepository: Send + Sync {
    /// Read the persisted identity, if any
    fn load(&self) -> AuthResult<Option<Identity>>;

    /// Replace the persisted identity
    fn save(&self, identity: &Identity) -> AuthResult<()>;

    /// Remove the persisted identity; no-op when absent
    fn clear(&self) -> AuthResult<()>;
}

/// Remote identity provider
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Exchange credentials for an identity
    async fn authenticate(&self, credentials: &Credentials) -> AuthResult<Identity>;

    /// Create an account and return its identity
    async fn register(&self, registration: &Registration) -> AuthResult<Identity>;

    /// Ask the provider to send reset instructions to `email`
    async fn request_password_reset(&self, email: &Email) -> AuthResult<()>;
}
