//! Sign Out Use Case
//!
//! Removes the persisted identity.

use std::sync::Arc;

use crate::domain::repository::IdentityRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<R>
where
    R: IdentityRepository,
{
    identity_repo: Arc<R>,
}

impl<R> SignOutUseCase<R>
where
    R: IdentityRepository,
{
    pub fn new(identity_repo: Arc<R>) -> Self {
        Self { identity_repo }
    }

    pub fn execute(&self) -> AuthResult<()> {
        self.identity_repo.clear()?;

        tracing::info!("User signed out");
        Ok(())
    }
}
