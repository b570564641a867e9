//! Error types for the dashboard state layer.
//!
//! Table and reducer transitions never fail; they clamp or default instead.
//! [`DashboardError`] only covers the fallible edges of the crate: reading
//! configuration, and encoding or decoding JSON snapshots for the host.

use thiserror::Error;

/// The main error type for dashboard operations.
///
/// # Examples
///
/// ```
/// use admin_dashboard::DashboardError;
///
/// fn validate_page_size(size: usize) -> Result<(), DashboardError> {
///     if size == 0 {
///         return Err(DashboardError::Config("page size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading configuration files or opening the log file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A snapshot or view could not be encoded to, or decoded from, JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A specialized `Result` type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
