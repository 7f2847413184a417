//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use crate::domain::value_object::avatar_url::DEFAULT_AVATAR_BASE_URL;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Storage key holding the persisted identity
    pub storage_key: String,
    /// Simulated round trip for authenticate/register
    pub provider_latency: Duration,
    /// Simulated round trip for password reset requests
    pub reset_latency: Duration,
    /// Avatar generator endpoint
    pub avatar_base_url: String,
    /// Name the mock provider gives accounts it has not seen registered
    pub default_display_name: String,
    /// Minimum registration password length, in characters
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: "user".to_string(),
            provider_latency: Duration::from_millis(1000),
            reset_latency: Duration::from_millis(1000),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            default_display_name: "Test User".to_string(),
            min_password_length: 6,
        }
    }
}

impl AuthConfig {
    /// Create config for development (short simulated latency)
    pub fn development() -> Self {
        Self::default().with_latency(Duration::from_millis(100))
    }

    /// Use `latency` for every simulated provider call
    pub fn with_latency(self, latency: Duration) -> Self {
        Self {
            provider_latency: latency,
            reset_latency: latency,
            ..self
        }
    }
}
