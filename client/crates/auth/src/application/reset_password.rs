//! Reset Password Use Case
//!
//! Asks the identity provider to send reset instructions. Never touches
//! the current session.

use std::sync::Arc;

use crate::domain::repository::IdentityProvider;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

pub struct ResetPasswordUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> ResetPasswordUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, email: &str) -> AuthResult<()> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingEmail);
        }
        let email = Email::new(email)?;

        self.provider.request_password_reset(&email).await?;

        tracing::info!(email_domain = %email.domain(), "Password reset requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::infra::MockIdentityProvider;
    use std::time::Duration;

    fn use_case() -> ResetPasswordUseCase<MockIdentityProvider> {
        let config = AuthConfig::default().with_latency(Duration::ZERO);
        ResetPasswordUseCase::new(Arc::new(MockIdentityProvider::new(&config).unwrap()))
    }

    #[tokio::test]
    async fn test_reset_ok() {
        assert!(use_case().execute("a@x.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_reset_requires_email() {
        assert!(matches!(
            use_case().execute("   ").await,
            Err(AuthError::MissingEmail)
        ));
        assert!(matches!(
            use_case().execute("nope").await,
            Err(AuthError::InvalidEmail(_))
        ));
    }
}
