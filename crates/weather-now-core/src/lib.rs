pub mod config;
pub mod error;

pub use config::{Config, ServiceConfig, UiConfig, ValidationResult};
pub use error::{AppError, ConfigError, LookupError, NetworkError, ReqwestErrorExt};

use anyhow::Result;

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize logging for the application.
///
/// Logs go to stderr so they never interleave with rendered weather output.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!("Weather Now core initialized");
    Ok(())
}
