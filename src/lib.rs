//! Admin dashboard state: generic table state and a reducer-driven UI container.
//!
//! This crate is the state layer of an admin dashboard. It provides:
//! - A generic table state manager with search, sort, pagination and
//!   page-scoped row selection over any [`Row`](table::Row) type
//! - A dashboard state container (sidebars, theme, notification feed, order
//!   filters, product sort, loading flags, preferences) driven by a pure reducer
//! - A serializable snapshot of the state that should survive a reload
//! - View models and number formatting for a host renderer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (renderer, storage, input)                    │  ← Outside this crate
//! └─────────────────────────────────────────────────────┘
//!                        │ Events / Actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State container
//! │  - Events and the pure reducer                      │
//! │  - Persisted snapshot                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Table (table/)│   │ UI (ui/)      │   │ Domain        │
//! │ - Filter      │   │ - View models │   │ (domain/)     │
//! │ - Sort        │   │ - Formatting  │   │ - Orders      │
//! │ - Paginate    │   │               │   │ - Products    │
//! │ - Select      │   │               │   │ - Feed        │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`table`]: Generic table state manager
//! - [`app`]: Dashboard state container with event/action model
//! - [`domain`]: Order, product and notification records; errors
//! - [`ui`]: View models and display formatting
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Hosts pass configuration either as a string map or as a TOML file:
//!
//! ```toml
//! theme = "dark"
//! viewport_width = 1280
//! order_page_size = 10
//! product_page_size = 5
//! log_level = "debug"
//! log_file = "/var/log/dashboard/dashboard.log"
//! ```
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::app::{handle_event, Event};
//! use admin_dashboard::{initialize, Config};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! for event in [Event::ToggleTheme, Event::Resize(1100)] {
//!     let (changed, _actions) = handle_event(&mut state, &event)?;
//!     assert!(changed);
//!     // Execute actions...
//! }
//! assert!(!state.activity_sidebar_open);
//! # Ok::<(), admin_dashboard::DashboardError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod observability;
pub mod table;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ThemeMode};
pub use domain::{DashboardError, Result};
pub use table::{TableConfig, TableState};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Viewport width assumed when the host does not report one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1440;

/// Page size of the top-products table.
pub const DEFAULT_PRODUCT_PAGE_SIZE: usize = 5;

/// Host configuration.
///
/// # Example
///
/// ```toml
/// theme = "light"
/// order_page_size = 25
/// log_level = "admin_dashboard=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial theme mode. Default: light.
    pub theme: ThemeMode,

    /// Viewport width at startup, in CSS pixels. Decides which sidebars start
    /// open. Default: 1440
    pub viewport_width: u32,

    /// Rows per page in the orders table. Default: 10
    pub order_page_size: usize,

    /// Rows per page in the top-products table. Default: 5
    pub product_page_size: usize,

    /// `EnvFilter` directive such as `debug` or `admin_dashboard=trace`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub log_level: Option<String>,

    /// Log file path; logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            order_page_size: table::DEFAULT_PAGE_SIZE,
            product_page_size: DEFAULT_PRODUCT_PAGE_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Unknown keys are ignored and unparseable values fall back to their
    /// defaults, so a bad entry never prevents startup.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`: `light` / `dark` (case-insensitive)
    /// - `viewport_width`: `u32`
    /// - `order_page_size`, `product_page_size`: `usize`, at least 1
    /// - `log_level`, `log_file`: taken as is when non-empty
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use admin_dashboard::{Config, ThemeMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "Dark".to_string());
    /// map.insert("order_page_size".to_string(), "many".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme, ThemeMode::Dark);
    /// assert_eq!(config.order_page_size, 10);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let theme = map
            .get("theme")
            .and_then(|s| s.parse::<ThemeMode>().ok())
            .unwrap_or(defaults.theme);

        let viewport_width = map
            .get("viewport_width")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.viewport_width);

        let page_size = |key: &str, fallback: usize| {
            map.get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(fallback)
        };

        let non_empty = |key: &str| map.get(key).map(|s| s.trim()).filter(|s| !s.is_empty());

        Self {
            theme,
            viewport_width,
            order_page_size: page_size("order_page_size", defaults.order_page_size),
            product_page_size: page_size("product_page_size", defaults.product_page_size),
            log_level: non_empty("log_level").map(String::from),
            log_file: non_empty("log_file").map(PathBuf::from),
        }
    }

    /// Parses and validates a TOML configuration document.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] for malformed TOML, unknown keys, or
    /// values rejected by [`validate`](Self::validate).
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| DashboardError::Config(format!("failed to parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&contents)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if a page size is zero or the log
    /// level is not a valid filter directive.
    pub fn validate(&self) -> Result<()> {
        if self.order_page_size == 0 {
            return Err(DashboardError::Config("order_page_size must be at least 1".to_string()));
        }
        if self.product_page_size == 0 {
            return Err(DashboardError::Config("product_page_size must be at least 1".to_string()));
        }
        if let Some(level) = &self.log_level {
            EnvFilter::try_new(level)
                .map_err(|e| DashboardError::Config(format!("invalid log_level {level:?}: {e}")))?;
        }
        Ok(())
    }
}

/// Initializes logging and builds the starting dashboard state.
///
/// # Errors
///
/// Returns [`DashboardError::Io`] if the configured log file cannot be opened.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::{initialize, Config, ThemeMode};
///
/// let config = Config {
///     theme: ThemeMode::Dark,
///     viewport_width: 1100,
///     ..Default::default()
/// };
///
/// let state = initialize(&config)?;
/// assert!(state.sidebar_open);
/// assert!(!state.activity_sidebar_open);
/// # Ok::<(), admin_dashboard::DashboardError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    observability::init_tracing(config)?;
    tracing::debug!(
        theme = %config.theme,
        viewport_width = config.viewport_width,
        order_page_size = config.order_page_size,
        "initializing dashboard state"
    );

    Ok(AppState::from_config(config))
}
