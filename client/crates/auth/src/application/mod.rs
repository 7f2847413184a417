//! Application Layer
//!
//! Use cases and the session store that drives them.

pub mod config;
pub mod reset_password;
pub mod restore_session;
pub mod session_store;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use reset_password::ResetPasswordUseCase;
pub use restore_session::RestoreSessionUseCase;
pub use session_store::SessionStore;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use sign_up::SignUpUseCase;
