//! Sign Up Use Case
//!
//! Creates an account with the identity provider and persists it.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{Identity, Registration};
use crate::domain::repository::{IdentityProvider, IdentityRepository};
use crate::error::{AuthError, AuthResult};

/// Sign up use case
pub struct SignUpUseCase<P, R>
where
    P: IdentityProvider,
    R: IdentityRepository,
{
    provider: Arc<P>,
    identity_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<P, R> SignUpUseCase<P, R>
where
    P: IdentityProvider,
    R: IdentityRepository,
{
    pub fn new(provider: Arc<P>, identity_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            provider,
            identity_repo,
            config,
        }
    }

    pub async fn execute(&self, email: &str, password: &str, name: &str) -> AuthResult<Identity> {
        let registration = Registration::parse(email, password, name)?;

        let min = self.config.min_password_length;
        if !registration.password.meets_min_length(min) {
            return Err(AuthError::PasswordTooShort { min });
        }

        let identity = self.provider.register(&registration).await?;
        self.identity_repo.save(&identity)?;

        tracing::info!(
            user_id = %identity.id,
            email_domain = %identity.email.domain(),
            "User signed up"
        );
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockIdentityProvider, StoredIdentityRepository};
    use platform::storage::MemoryStorage;
    use std::time::Duration;

    type Repo = StoredIdentityRepository<MemoryStorage>;

    fn use_case() -> (SignUpUseCase<MockIdentityProvider, Repo>, Arc<Repo>) {
        let config = Arc::new(AuthConfig::default().with_latency(Duration::ZERO));
        let provider = Arc::new(MockIdentityProvider::new(&config).unwrap());
        let repo = Arc::new(StoredIdentityRepository::new(MemoryStorage::new(), "user"));
        (SignUpUseCase::new(provider, repo.clone(), config), repo)
    }

    #[tokio::test]
    async fn test_sign_up_persists_named_identity() {
        let (use_case, repo) = use_case();

        let identity = use_case.execute("ada@x.com", "secret1", "Ada Lovelace").await.unwrap();

        assert_eq!(identity.name.as_str(), "Ada Lovelace");
        assert_eq!(
            identity.avatar_url.as_str(),
            "https://ui-avatars.com/api/?name=Ada%20Lovelace"
        );
        assert_eq!(repo.load().unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let (use_case, repo) = use_case();

        let result = use_case.execute("ada@x.com", "12345", "Ada").await;

        assert!(matches!(result, Err(AuthError::PasswordTooShort { min: 6 })));
        assert!(repo.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_name_rejected() {
        let (use_case, _) = use_case();

        let result = use_case.execute("ada@x.com", "secret1", "").await;
        assert!(matches!(result, Err(AuthError::MissingRegistrationFields)));
    }
}
