//! Server binary for the US states fun-facts API.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `statefacts-config.yaml` (or the path in
//!    `STATEFACTS_CONFIG`), with environment overrides
//! 2. Initialize structured logging (tracing)
//! 3. Load the reference dataset
//! 4. Connect the fact store backend
//! 5. Serve HTTP until `Ctrl-C`

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use statefacts_api::{AppState, ServerConfig};
use statefacts_core::config::LoggingConfig;
use statefacts_core::{AppConfig, ReferenceDataset, StoreBackend};
use statefacts_db::{DragonflyPool, FactStore, MemoryFactStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "statefacts-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any initialization step or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration. Logging is not up yet, so report afterwards.
    let (config, config_source) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!(
        config = %config_source,
        host = config.server.host,
        port = config.server.port,
        backend = ?config.store.backend,
        "statefacts-server starting"
    );

    // 3. Load the reference dataset.
    let dataset = Arc::new(ReferenceDataset::from_file(&config.dataset.path)?);

    // 4. Connect the fact store.
    let store: Arc<dyn FactStore> = match config.store.backend {
        StoreBackend::Dragonfly => {
            Arc::new(DragonflyPool::connect(&config.store.dragonfly_url).await?)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory fact store; fun facts are lost on restart");
            Arc::new(MemoryFactStore::new())
        }
    };

    // 5. Serve.
    let state = Arc::new(AppState::new(dataset, store));
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    statefacts_api::start_server(&server_config, state).await?;

    info!("statefacts-server shutdown complete");
    Ok(())
}

/// Load configuration, falling back to defaults (plus environment
/// overrides) when the file does not exist.
fn load_config() -> Result<(AppConfig, String), AppError> {
    let path = std::env::var("STATEFACTS_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if path.exists() {
        let config = AppConfig::from_file(&path)?;
        Ok((config, path.display().to_string()))
    } else {
        let config = AppConfig::parse("")?;
        Ok((config, String::from("defaults")))
    }
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over
/// the configured level.
fn init_logging(logging: &LoggingConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| AppError::Logging {
        message: e.to_string(),
    })
}
