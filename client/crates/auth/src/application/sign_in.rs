//! Sign In Use Case
//!
//! Authenticates against the identity provider and persists the result.

use std::sync::Arc;

use crate::domain::entity::{Credentials, Identity};
use crate::domain::repository::{IdentityProvider, IdentityRepository};
use crate::error::AuthResult;

/// Sign in use case
pub struct SignInUseCase<P, R>
where
    P: IdentityProvider,
    R: IdentityRepository,
{
    provider: Arc<P>,
    identity_repo: Arc<R>,
}

impl<P, R> SignInUseCase<P, R>
where
    P: IdentityProvider,
    R: IdentityRepository,
{
    pub fn new(provider: Arc<P>, identity_repo: Arc<R>) -> Self {
        Self {
            provider,
            identity_repo,
        }
    }

    /// Returns the identity once it is persisted
    pub async fn execute(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let credentials = Credentials::parse(email, password)?;
        let identity = self.provider.authenticate(&credentials).await?;

        self.identity_repo.save(&identity)?;

        tracing::info!(
            user_id = %identity.id,
            email_domain = %identity.email.domain(),
            "User signed in"
        );
        Ok(identity)
    }
}
