//! Presentation Layer
//!
//! Route table, route guard, layout shell, navigator and form flows.

pub mod forms;
pub mod guard;
pub mod layout;
pub mod navigator;
pub mod routes;

// Re-exports
pub use forms::{LoginForm, RegistrationForm, ResetPasswordForm};
pub use guard::GuardDecision;
pub use layout::LayoutShell;
pub use navigator::{Navigator, Screen};
pub use routes::{Resolution, Route};
