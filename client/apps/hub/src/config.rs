//! Hub Configuration
//!
//! Environment overrides on top of [`AuthConfig`]. `.env` is loaded by
//! `main` before this runs.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use auth::AuthConfig;

const DEFAULT_STORAGE_DIR: &str = ".learning-hub";

#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Directory backing durable storage
    pub storage_dir: PathBuf,
    pub auth: AuthConfig,
}

impl HubConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut auth = if cfg!(debug_assertions) {
            AuthConfig::development()
        } else {
            AuthConfig::default()
        };

        if let Some(ms) = lookup("HUB_AUTH_LATENCY_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("HUB_AUTH_LATENCY_MS must be milliseconds, got {ms:?}"))?;
            auth = auth.with_latency(Duration::from_millis(ms));
        }

        if let Some(key) = lookup("HUB_STORAGE_KEY") {
            auth.storage_key = key;
        }

        let storage_dir = lookup("HUB_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR));

        Ok(Self { storage_dir, auth })
    }
}
