//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::domain::error::Result;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.log_level`
/// 3. Default: `"info"`
///
/// # Output
///
/// With `config.log_file` set, events go to that file through a
/// [`RotatingFileWriter`] (10 MB, 3 backups), creating parent directories as
/// needed. Otherwise they go to stderr.
///
/// # Initialization Behavior
///
/// Idempotent: only the first successful call installs a subscriber; later
/// calls return `Ok(())` without changing it.
///
/// # Errors
///
/// Returns [`DashboardError::Io`](crate::domain::DashboardError::Io) if the log
/// file or its directory cannot be created.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::observability::init_tracing;
/// use admin_dashboard::Config;
///
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config)?;
///
/// tracing::debug!("tracing is now active");
/// # Ok::<(), admin_dashboard::domain::DashboardError>(())
/// ```
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = build_env_filter(config.log_level.as_deref());

    let layer = fmt::layer().with_target(true);
    let result = if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let writer = RotatingFileWriter::open(path)?;

        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_ansi(false).with_writer(Mutex::new(writer)))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

fn build_env_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
