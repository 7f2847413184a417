//! Infrastructure Layer
//!
//! Storage-backed identity repository and the simulated identity provider.

pub mod mock_provider;
pub mod stored_identity;

pub use mock_provider::MockIdentityProvider;
pub use stored_identity::StoredIdentityRepository;
