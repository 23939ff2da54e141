//! CLI command implementations
//!
//! `init` prepares the database file and schema; `start` boots the store
//! and serves the HTTP API until interrupted. Schema initialization is an
//! explicit, idempotent startup step, never a request-handling side
//! effect.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use crate::api::ApiServer;
use crate::config::ServiceConfig;
use crate::store::AdStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse command line arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Create the database file and ensure the schema exists.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let rt = runtime()?;

    rt.block_on(async {
        let store = AdStore::connect(&config.database_path).await?;
        store.init_schema().await?;
        Ok::<(), CliError>(())
    })?;

    println!("Initialized database at {}", config.database_path.display());
    Ok(())
}

/// Boot the store and serve the HTTP API.
pub fn start(config_path: &Path) -> CliResult<()> {
    init_tracing();

    let config = ServiceConfig::load(config_path)?;
    let rt = runtime()?;

    rt.block_on(async {
        let store = Arc::new(AdStore::connect(&config.database_path).await?);
        store.init_schema().await?;
        tracing::info!(path = %config.database_path.display(), "database ready");

        let server = ApiServer::new(config, store);
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,adboard=debug"));

    fmt().with_env_filter(filter).init();
}
