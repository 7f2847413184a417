//! Auth (Session) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity, session state, value objects, repository/provider traits
//! - `application/` - Config, use cases and the session store
//! - `infra/` - Storage-backed identity repository, simulated identity provider
//! - `presentation/` - Route table, route guard, layout shell, navigator, forms
//!
//! ## Features
//! - Login, register, logout and password reset against an identity provider
//! - Identity persisted as JSON in durable key/value storage, hydrated at startup
//! - Route guard: wait while loading, redirect to `/login` when signed out
//!
//! ## Session Model
//! - One [`SessionStore`] per client, shared through `Arc`
//! - State changes published on a `tokio::sync::watch` channel
//! - `loading` counts in-flight operations and is released on every exit path

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_store::SessionStore;
pub use error::{AuthError, AuthResult};
pub use infra::{MockIdentityProvider, StoredIdentityRepository};

// Re-export kernel error types for unified error handling
pub use kernel::{AppError, AppResult, ErrorKind};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod routing {
    pub use crate::presentation::guard::*;
    pub use crate::presentation::navigator::*;
    pub use crate::presentation::routes::*;
}
