//! Learning Hub Client Entry Point
//!
//! Wires the session store to file-backed storage and the simulated
//! identity provider, then runs one CLI command. Each invocation is a
//! fresh process, so the persisted session is hydrated every time.
//! Uses `anyhow` for startup errors; session failures arrive as
//! `kernel::AppError`.

mod commands;
mod config;

use std::path::PathBuf;
use std::sync::Arc;

use auth::{MockIdentityProvider, SessionStore, StoredIdentityRepository};
use clap::Parser;
use platform::storage::FileStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Command;
use crate::config::HubConfig;

#[derive(Parser, Debug)]
#[command(name = "hub")]
#[command(about = "Learning Hub session client")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Directory holding the persisted session (overrides HUB_STORAGE_DIR)")]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hub=info,auth=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = HubConfig::from_env()?;
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }
    tracing::debug!(storage_dir = %config.storage_dir.display(), "Configuration loaded");

    let auth_config = Arc::new(config.auth);
    let provider = Arc::new(MockIdentityProvider::new(&auth_config)?);
    let repo = Arc::new(StoredIdentityRepository::new(
        FileStorage::new(&config.storage_dir),
        auth_config.storage_key.clone(),
    ));
    let store = SessionStore::new(provider, repo, auth_config);

    store.initialize().await;

    commands::run(cli.command, &store).await
}
