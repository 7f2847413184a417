//! Entity Module

pub mod credentials;
pub mod identity;
pub mod session;

pub use credentials::{Credentials, Registration};
pub use identity::Identity;
pub use session::{Session, SessionPhase};
