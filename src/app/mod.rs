//! Application layer: the dashboard state container, its events and actions.
//!
//! # Architecture
//!
//! ```text
//! Host input → Event → reduce(state, event) → next state → Actions → Host
//!                                                  ↓
//!                                      derived views and tables
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Events, the pure reducer and the handler hosts call
//! - [`modes`]: Theme mode, loading sections and viewport breakpoints
//! - [`snapshot`]: The persisted slice of state
//! - [`state`]: Central state container and derived views
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(1440);
//! handle_event(&mut state, &Event::Resize(900))?;
//! assert!(!state.sidebar_open);
//! assert!(!state.activity_sidebar_open);
//! # Ok::<(), admin_dashboard::domain::DashboardError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod snapshot;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, reduce, Event};
pub use modes::{LoadingSection, ThemeMode};
pub use snapshot::UiSnapshot;
pub use state::{
    AppState, LoadingFlags, OrderFilters, OrderFiltersPatch, Preferences, PreferencesPatch, ProductSort,
    MAX_NOTIFICATIONS,
};
