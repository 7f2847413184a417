//! Session Store
//!
//! Single source of truth for "who is logged in". Wraps the use cases,
//! keeps the in-memory [`Session`] and publishes every change on a watch
//! channel so the route guard can be re-evaluated.
//!
//! ## Failure contract
//! Operations return [`AppResult`]. Errors are logged here and normalized
//! to a [`kernel::AppError`] carrying a display reason; nothing escapes as a
//! panic. `loading` is released on every exit path, including when the
//! operation's future is dropped.

use std::sync::Arc;

use kernel::AppResult;
use tokio::sync::watch;

use crate::application::config::AuthConfig;
use crate::application::{
    ResetPasswordUseCase, RestoreSessionUseCase, SignInUseCase, SignOutUseCase, SignUpUseCase,
};
use crate::domain::entity::session::Claim;
use crate::domain::entity::{Identity, Session};
use crate::domain::repository::{IdentityProvider, IdentityRepository};

const LOGIN_FALLBACK: &str = "Invalid credentials";
const REGISTER_FALLBACK: &str = "Registration failed";
const RESET_FALLBACK: &str = "Password reset failed";

pub struct SessionStore<P, R>
where
    P: IdentityProvider + Sync + 'static,
    R: IdentityRepository + 'static,
{
    state: watch::Sender<Session>,
    sign_in: SignInUseCase<P, R>,
    sign_up: SignUpUseCase<P, R>,
    sign_out: SignOutUseCase<R>,
    reset_password: ResetPasswordUseCase<P>,
    restore: RestoreSessionUseCase<R>,
    config: Arc<AuthConfig>,
}

impl<P, R> SessionStore<P, R>
where
    P: IdentityProvider + Sync + 'static,
    R: IdentityRepository + 'static,
{
    pub fn new(provider: Arc<P>, identity_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            state: watch::Sender::new(Session::default()),
            sign_in: SignInUseCase::new(provider.clone(), identity_repo.clone()),
            sign_up: SignUpUseCase::new(provider.clone(), identity_repo.clone(), config.clone()),
            sign_out: SignOutUseCase::new(identity_repo.clone()),
            reset_password: ResetPasswordUseCase::new(provider),
            restore: RestoreSessionUseCase::new(identity_repo),
            config,
        }
    }

    /// Current session value
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Hydrate from durable storage
    ///
    /// Only the first call does anything. Unreadable storage is logged and
    /// treated as signed out.
    pub async fn initialize(&self) {
        if !self.state.send_if_modified(Session::try_claim_hydration) {
            tracing::debug!("Session already initialized");
            return;
        }
        let claim = LoadingClaim::new(&self.state, Claim::Hydration);
        let seen_revision = self.state.borrow().revision();

        let identity = match self.restore.execute().await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, kind = %e.kind(), "Ignoring unreadable stored session");
                None
            }
        };

        claim.release_with(|session| session.restore(identity, seen_revision));
        tracing::info!(authenticated = self.state.borrow().is_authenticated(), "Session hydrated");
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<Identity> {
        let claim = LoadingClaim::new(&self.state, Claim::Operation);

        match self.sign_in.execute(email, password).await {
            Ok(identity) => {
                let current = identity.clone();
                claim.release_with(|session| session.sign_in(current));
                Ok(identity)
            }
            Err(e) => {
                e.log();
                Err(e.into_failure(LOGIN_FALLBACK))
            }
        }
    }

    pub async fn register(&self, email: &str, password: &str, name: &str) -> AppResult<Identity> {
        let claim = LoadingClaim::new(&self.state, Claim::Operation);

        match self.sign_up.execute(email, password, name).await {
            Ok(identity) => {
                let current = identity.clone();
                claim.release_with(|session| session.sign_in(current));
                Ok(identity)
            }
            Err(e) => {
                e.log();
                Err(e.into_failure(REGISTER_FALLBACK))
            }
        }
    }

    /// Forget the current identity, in storage and in memory
    ///
    /// Cannot fail; a storage error is only logged.
    pub fn logout(&self) {
        if let Err(e) = self.sign_out.execute() {
            e.log();
            tracing::warn!(error = %e, "Stored session could not be removed");
        }
        self.state.send_modify(Session::sign_out);
    }

    pub async fn reset_password(&self, email: &str) -> AppResult<()> {
        let _claim = LoadingClaim::new(&self.state, Claim::Operation);

        self.reset_password.execute(email).await.map_err(|e| {
            e.log();
            e.into_failure(RESET_FALLBACK)
        })
    }
}

/// Holds `loading` for one operation
///
/// Released explicitly together with the operation's result, or on drop.
struct LoadingClaim<'a> {
    state: &'a watch::Sender<Session>,
    claim: Claim,
    released: bool,
}

impl<'a> LoadingClaim<'a> {
    fn new(state: &'a watch::Sender<Session>, claim: Claim) -> Self {
        if claim == Claim::Operation {
            state.send_modify(Session::claim_operation);
        }
        Self {
            state,
            claim,
            released: false,
        }
    }

    /// Apply `update` and release in a single state change
    fn release_with(mut self, update: impl FnOnce(&mut Session)) {
        let claim = self.claim;
        self.released = true;
        self.state.send_modify(|session| {
            update(session);
            session.release(claim);
        });
    }
}

impl Drop for LoadingClaim<'_> {
    fn drop(&mut self) {
        if !self.released {
            let claim = self.claim;
            self.state.send_modify(|session| session.release(claim));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::SessionPhase;
    use crate::domain::value_object::Email;
    use crate::infra::{MockIdentityProvider, StoredIdentityRepository};
    use kernel::ErrorKind;
    use platform::storage::{FileStorage, KeyValueStorage, MemoryStorage};
    use std::time::Duration;

    type MemoryRepo = StoredIdentityRepository<MemoryStorage>;
    type Store = SessionStore<MockIdentityProvider, MemoryRepo>;

    struct Harness {
        store: Store,
        storage: MemoryStorage,
        provider: Arc<MockIdentityProvider>,
    }

    fn harness_with(config: AuthConfig) -> Harness {
        let config = Arc::new(config);
        let storage = MemoryStorage::new();
        let provider = Arc::new(MockIdentityProvider::new(&config).unwrap());
        let repo = Arc::new(StoredIdentityRepository::new(storage.clone(), "user"));
        Harness {
            store: SessionStore::new(provider.clone(), repo, config),
            storage,
            provider,
        }
    }

    fn harness() -> Harness {
        harness_with(AuthConfig::default().with_latency(Duration::ZERO))
    }

    mod initialize {
        use super::*;

        #[tokio::test]
        async fn test_empty_storage() {
            let h = harness();
            assert_eq!(h.store.snapshot().phase(), SessionPhase::Uninitialized);

            h.store.initialize().await;

            let session = h.store.snapshot();
            assert!(!session.loading());
            assert!(session.identity().is_none());
            assert_eq!(session.phase(), SessionPhase::Unauthenticated);
        }

        #[tokio::test]
        async fn test_corrupt_storage_is_swallowed() {
            let h = harness();
            h.storage.set_item("user", "{\"id\":42}").unwrap();

            h.store.initialize().await;

            let session = h.store.snapshot();
            assert!(!session.loading());
            assert!(session.identity().is_none());
        }

        #[tokio::test]
        async fn test_record_without_uuid_stays_signed_out() {
            let h = harness();
            h.storage
                .set_item(
                    "user",
                    r#"{"id":"1","email":"a@x.com","name":"Test User","avatar":"https://x.test/a.png"}"#,
                )
                .unwrap();

            h.store.initialize().await;

            let session = h.store.snapshot();
            assert!(!session.loading());
            assert!(!session.is_authenticated());
            assert_eq!(session.phase(), SessionPhase::Unauthenticated);
        }

        #[tokio::test]
        async fn test_runs_once() {
            let h = harness();
            h.store.initialize().await;
            h.store.login("a@x.com", "pw").await.unwrap();

            // A later stored value is not re-read
            h.storage.remove_item("user").unwrap();
            h.store.initialize().await;

            assert!(h.store.snapshot().is_authenticated());
        }

        #[tokio::test]
        async fn test_hydrates_across_restart() {
            let dir = tempfile::tempdir().unwrap();
            let config = Arc::new(AuthConfig::default().with_latency(Duration::ZERO));

            let open = || {
                let provider = Arc::new(MockIdentityProvider::new(&config).unwrap());
                let repo = Arc::new(StoredIdentityRepository::new(
                    FileStorage::new(dir.path()),
                    "user",
                ));
                SessionStore::new(provider, repo, config.clone())
            };

            let first = open();
            first.initialize().await;
            let identity = first.login("a@x.com", "pw").await.unwrap();
            drop(first);

            let second = open();
            second.initialize().await;
            assert_eq!(second.snapshot().identity(), Some(&identity));
        }
    }

    mod login {
        use super::*;

        #[tokio::test]
        async fn test_login_persists_identity() {
            let h = harness();
            h.store.initialize().await;

            let identity = h.store.login("a@x.com", "pw").await.unwrap();

            assert_eq!(identity.email.as_str(), "a@x.com");
            let session = h.store.snapshot();
            assert!(!session.loading());
            assert_eq!(session.identity(), Some(&identity));

            let stored = h.storage.get_item("user").unwrap().unwrap();
            assert_eq!(stored, serde_json::to_string(&identity).unwrap());
        }

        #[tokio::test]
        async fn test_login_accepts_padded_and_local_addresses() {
            let h = harness();
            h.store.initialize().await;

            let identity = h.store.login(" a@x.com", "pw").await.unwrap();
            assert_eq!(identity.email.as_str(), "a@x.com");

            let identity = h.store.login("a@x.com ", "pw").await.unwrap();
            assert_eq!(identity.email.as_str(), "a@x.com");

            let identity = h.store.login("user@localhost", "pw").await.unwrap();
            assert_eq!(identity.email.as_str(), "user@localhost");
            assert!(h.store.snapshot().is_authenticated());
        }

        #[tokio::test]
        async fn test_login_then_logout() {
            let h = harness();
            h.store.initialize().await;
            h.store.login("a@x.com", "pw").await.unwrap();

            h.store.logout();

            let session = h.store.snapshot();
            assert!(session.identity().is_none());
            assert_eq!(session.phase(), SessionPhase::Unauthenticated);
            assert!(!h.storage.contains_key("user").unwrap());
        }

        #[tokio::test]
        async fn test_missing_fields() {
            let h = harness();
            h.store.initialize().await;

            let err = h.store.login("", "pw").await.unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(err.reason(), "Email and password are required");
            assert!(!h.store.snapshot().loading());
            assert!(h.store.snapshot().identity().is_none());
        }

        #[tokio::test]
        async fn test_rejected_credentials() {
            let h = harness();
            h.store.initialize().await;
            h.provider.reject(&Email::new("a@x.com").unwrap()).unwrap();

            let err = h.store.login("a@x.com", "pw").await.unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Unauthorized);
            assert_eq!(err.reason(), "Invalid credentials");
            assert!(!h.store.snapshot().loading());
        }

        #[tokio::test]
        async fn test_unexpected_error_uses_fallback() {
            let h = harness();
            h.store.initialize().await;
            h.provider.set_unavailable(true);

            let err = h.store.login("a@x.com", "pw").await.unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Unavailable);
            assert_eq!(err.reason(), "Invalid credentials");
        }

        #[tokio::test(start_paused = true)]
        async fn test_loading_visible_while_in_flight() {
            let h = harness_with(AuthConfig::default());
            h.store.initialize().await;
            let mut rx = h.store.subscribe();

            let login = h.store.login("a@x.com", "pw");
            tokio::pin!(login);

            // Poll until the provider is sleeping
            tokio::select! {
                _ = &mut login => panic!("login finished before its latency elapsed"),
                _ = rx.changed() => {}
            }
            assert!(h.store.snapshot().loading());
            assert_eq!(h.store.snapshot().phase(), SessionPhase::Loading);

            login.await.unwrap();
            assert!(!h.store.snapshot().loading());
        }

        #[tokio::test(start_paused = true)]
        async fn test_dropped_login_releases_loading() {
            let h = harness_with(AuthConfig::default());
            h.store.initialize().await;

            let timed_out =
                tokio::time::timeout(Duration::from_millis(10), h.store.login("a@x.com", "pw"))
                    .await;

            assert!(timed_out.is_err());
            assert!(!h.store.snapshot().loading());
            assert!(h.store.snapshot().identity().is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_overlapping_operations_keep_loading() {
            let h = harness_with(AuthConfig {
                reset_latency: Duration::from_millis(100),
                ..AuthConfig::default()
            });
            h.store.initialize().await;

            let login = h.store.login("a@x.com", "pw");
            let reset = async {
                h.store.reset_password("a@x.com").await.unwrap();
                // Login is still in flight
                assert!(h.store.snapshot().loading());
            };

            let (identity, ()) = tokio::join!(login, reset);
            identity.unwrap();
            assert!(!h.store.snapshot().loading());
        }
    }

    mod register {
        use super::*;

        #[tokio::test]
        async fn test_register_signs_in() {
            let h = harness();
            h.store.initialize().await;

            let identity = h.store.register("ada@x.com", "secret1", "Ada").await.unwrap();

            assert_eq!(identity.name.as_str(), "Ada");
            assert_eq!(h.store.snapshot().identity(), Some(&identity));
            assert!(h.storage.contains_key("user").unwrap());
        }

        #[tokio::test]
        async fn test_register_validation() {
            let h = harness();
            h.store.initialize().await;

            let err = h.store.register("ada@x.com", "123", "Ada").await.unwrap_err();
            assert_eq!(err.reason(), "Password must be at least 6 characters long");

            let err = h.store.register("", "secret1", "Ada").await.unwrap_err();
            assert_eq!(err.reason(), "Name, email and password are required");

            assert!(!h.store.snapshot().loading());
            assert!(h.store.snapshot().identity().is_none());
        }

        #[tokio::test]
        async fn test_register_unexpected_error_uses_fallback() {
            let h = harness();
            h.store.initialize().await;
            h.provider.set_unavailable(true);

            let err = h.store.register("ada@x.com", "secret1", "Ada").await.unwrap_err();
            assert_eq!(err.reason(), "Registration failed");
        }
    }

    mod reset_password {
        use super::*;

        #[tokio::test]
        async fn test_reset_leaves_identity() {
            let h = harness();
            h.store.initialize().await;
            let identity = h.store.login("a@x.com", "pw").await.unwrap();

            h.store.reset_password("a@x.com").await.unwrap();

            assert_eq!(h.store.snapshot().identity(), Some(&identity));
            assert!(!h.store.snapshot().loading());
        }

        #[tokio::test]
        async fn test_reset_failure() {
            let h = harness();
            h.store.initialize().await;
            h.provider.set_unavailable(true);

            let err = h.store.reset_password("a@x.com").await.unwrap_err();
            assert_eq!(err.reason(), "Password reset failed");

            let err = h.store.reset_password("").await.unwrap_err();
            assert_eq!(err.reason(), "Email is required");
        }
    }

    mod persistence_failure {
        use super::*;
        use crate::domain::entity::Identity;
        use crate::error::{AuthError, AuthResult};

        /// Repository whose writes always fail
        struct ReadOnlyRepo;

        impl IdentityRepository for ReadOnlyRepo {
            fn load(&self) -> AuthResult<Option<Identity>> {
                Ok(None)
            }

            fn save(&self, _: &Identity) -> AuthResult<()> {
                Err(AuthError::Storage(platform::storage::StorageError::Poisoned))
            }

            fn clear(&self) -> AuthResult<()> {
                Err(AuthError::Storage(platform::storage::StorageError::Poisoned))
            }
        }

        fn store() -> SessionStore<MockIdentityProvider, ReadOnlyRepo> {
            let config = Arc::new(AuthConfig::default().with_latency(Duration::ZERO));
            let provider = Arc::new(MockIdentityProvider::new(&config).unwrap());
            SessionStore::new(provider, Arc::new(ReadOnlyRepo), config)
        }

        #[tokio::test]
        async fn test_failed_save_leaves_session_unchanged() {
            let store = store();
            store.initialize().await;

            let err = store.login("a@x.com", "pw").await.unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Storage);
            assert_eq!(err.reason(), "Invalid credentials");
            assert!(store.snapshot().identity().is_none());
            assert!(!store.snapshot().loading());
        }

        #[tokio::test]
        async fn test_logout_never_fails() {
            let store = store();
            store.initialize().await;

            store.logout();
            assert_eq!(store.snapshot().phase(), SessionPhase::Unauthenticated);
        }
    }
}
