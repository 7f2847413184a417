//! Value Object Module

pub mod avatar_url;
pub mod display_name;
pub mod email;
pub mod password;
pub mod user_id;

pub use avatar_url::AvatarUrl;
pub use display_name::{DisplayName, DisplayNameError};
pub use email::{Email, EmailError};
pub use password::Password;
pub use user_id::UserId;
