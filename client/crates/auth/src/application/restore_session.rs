//! Restore Session Use Case
//!
//! Reads the persisted identity at startup.

use std::sync::Arc;

use crate::domain::entity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::error::AuthResult;

pub struct RestoreSessionUseCase<R>
where
    R: IdentityRepository,
{
    identity_repo: Arc<R>,
}

impl<R> RestoreSessionUseCase<R>
where
    R: IdentityRepository + 'static,
{
    pub fn new(identity_repo: Arc<R>) -> Self {
        Self { identity_repo }
    }

    /// Storage is read on the blocking pool
    pub async fn execute(&self) -> AuthResult<Option<Identity>> {
        let repo = Arc::clone(&self.identity_repo);
        let identity = tokio::task::spawn_blocking(move || repo.load()).await??;

        match &identity {
            Some(identity) => tracing::info!(user_id = %identity.id, "Session restored"),
            None => tracing::info!("No stored session"),
        }
        Ok(identity)
    }
}
