//! Domain Layer
//!
//! Entities, value objects, and the persistence/provider seams.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Credentials, Identity, Registration, Session, SessionPhase};
pub use repository::{IdentityProvider, IdentityRepository, LocalIdentityProvider};
