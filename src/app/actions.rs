//! Side effects requested by the event handler.
//!
//! The handler never performs I/O itself. It returns a `Vec<Action>` after each
//! event and the host executes them in order.
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new(1440);
//! let (_, actions) = handle_event(&mut state, &Event::ToggleSidebar)?;
//! assert!(matches!(actions.as_slice(), [Action::PersistSnapshot(_)]));
//! # Ok::<(), admin_dashboard::domain::DashboardError>(())
//! ```

use super::snapshot::UiSnapshot;

/// Commands for the host to execute after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Store this snapshot so the next session can hydrate from it.
    ///
    /// Emitted whenever sidebars, preferences, order filters, product sort or
    /// theme change.
    PersistSnapshot(UiSnapshot),
}
