//! Shared Kernel - vocabulary every Learning Hub crate agrees on
//!
//! - Error classification and the user-facing error type
//! - Typed identifiers
//!
//! Only things with the same meaning in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;

pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;
