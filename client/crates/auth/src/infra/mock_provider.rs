//! Simulated Identity Provider
//!
//! Accepts any well-formed credentials after a fixed delay. Accounts
//! created through `register` keep their name for later sign-ins.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::application::config::AuthConfig;
use crate::domain::entity::{Credentials, Identity, Registration};
use crate::domain::repository::IdentityProvider;
use crate::domain::value_object::{DisplayName, Email};
use crate::error::{AuthError, AuthResult};

#[derive(Debug)]
pub struct MockIdentityProvider {
    latency: Duration,
    reset_latency: Duration,
    avatar_base_url: String,
    default_name: DisplayName,
    /// Registered accounts by canonical email
    accounts: Mutex<HashMap<String, Identity>>,
    /// Canonical emails whose sign-in is refused
    rejected: Mutex<HashSet<String>>,
    unavailable: AtomicBool,
}

impl MockIdentityProvider {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        Ok(Self {
            latency: config.provider_latency,
            reset_latency: config.reset_latency,
            avatar_base_url: config.avatar_base_url.clone(),
            default_name: DisplayName::new(&config.default_display_name)?,
            accounts: Mutex::new(HashMap::new()),
            rejected: Mutex::new(HashSet::new()),
            unavailable: AtomicBool::new(false),
        })
    }

    /// Refuse future sign-ins for `email`
    pub fn reject(&self, email: &Email) -> AuthResult<()> {
        lock(&self.rejected)?.insert(email.canonical());
        Ok(())
    }

    /// Simulate the provider being unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    fn ensure_available(&self) -> AuthResult<()> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(AuthError::ProviderUnavailable(
                "mock provider switched off".to_string(),
            ));
        }
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> AuthResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| AuthError::Internal("mock provider lock poisoned".to_string()))
}

impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(&self, credentials: &Credentials) -> AuthResult<Identity> {
        tokio::time::sleep(self.latency).await;
        self.ensure_available()?;

        let key = credentials.email.canonical();
        if lock(&self.rejected)?.contains(&key) {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = match lock(&self.accounts)?.get(&key) {
            Some(account) => Identity::with_id(
                account.id,
                credentials.email.clone(),
                account.name.clone(),
                &self.avatar_base_url,
            ),
            None => Identity::new(
                credentials.email.clone(),
                self.default_name.clone(),
                &self.avatar_base_url,
            ),
        };
        Ok(identity)
    }

    async fn register(&self, registration: &Registration) -> AuthResult<Identity> {
        tokio::time::sleep(self.latency).await;
        self.ensure_available()?;

        let identity = Identity::new(
            registration.email.clone(),
            registration.name.clone(),
            &self.avatar_base_url,
        );
        lock(&self.accounts)?.insert(registration.email.canonical(), identity.clone());
        Ok(identity)
    }

    async fn request_password_reset(&self, email: &Email) -> AuthResult<()> {
        tokio::time::sleep(self.reset_latency).await;
        self.ensure_available()?;

        tracing::debug!(domain = %email.domain(), "Reset instructions sent");
        Ok(())
    }
}
