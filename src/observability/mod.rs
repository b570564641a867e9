//! Structured logging with `tracing`.
//!
//! Every state transition in the crate emits `debug`-level spans and events.
//! Nothing is printed until a host installs a subscriber, either its own or
//! the one built by [`init_tracing`].
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{RotatingFileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, DEFAULT_LOG_LEVEL};
