//! Event handling and state transition logic.
//!
//! [`reduce`] is the pure transition function: it takes the current state and
//! an event and returns the next state without touching the input.
//! [`handle_event`] wraps it for hosts, replacing the state in place and
//! reporting whether a re-render is needed plus any [`Action`]s to run.
//!
//! # Event Types
//!
//! - **Panels**: `ToggleSidebar`, `ToggleActivitySidebar`, `Resize`
//! - **Header**: `SetSearchQuery`, `ToggleTheme`, `SetTheme`
//! - **Notifications**: `AddNotification`, `MarkNotificationRead`,
//!   `ClearAllNotifications`, `RemoveNotification`
//! - **Data views**: `SetOrderFilters`, `SetProductSort`, `SetLoading`,
//!   `UpdatePreferences`, `ResetFilters`
//! - **Startup**: `Hydrate`, `HydrateJson`
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(1440);
//! let (changed, _) = handle_event(&mut state, &Event::SetSearchQuery("revenue".into()))?;
//! assert!(changed);
//! assert_eq!(state.search_query, "revenue");
//! # Ok::<(), admin_dashboard::domain::DashboardError>(())
//! ```

use super::modes::{activity_sidebar_fits, sidebar_fits, LoadingSection, ThemeMode};
use super::snapshot::UiSnapshot;
use super::state::{OrderFilters, OrderFiltersPatch, PreferencesPatch, ProductSort, MAX_NOTIFICATIONS};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{NewNotification, Notification};
use crate::table::SortDirection;
use chrono::{DateTime, Utc};

/// Dashboard events, one per state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens or closes the navigation sidebar.
    ToggleSidebar,
    /// Opens or closes the activity sidebar.
    ToggleActivitySidebar,
    /// Replaces the header search query.
    SetSearchQuery(String),
    /// Switches between light and dark.
    ToggleTheme,
    /// Sets the theme outright.
    SetTheme(ThemeMode),

    /// Marks one notification read; unknown ids are ignored.
    MarkNotificationRead(String),
    /// Marks every notification read. Entries stay in the feed.
    ClearAllNotifications,
    /// Prepends a notification with a freshly minted id, capping the feed.
    AddNotification(NewNotification),
    /// Drops a notification from the feed.
    RemoveNotification(String),

    /// Merges a partial update into the order filters.
    SetOrderFilters(OrderFiltersPatch),
    /// Replaces the top-products sort key and direction.
    SetProductSort(ProductSort),
    /// Marks one section as loading or finished.
    SetLoading {
        section: LoadingSection,
        loading: bool,
    },
    /// Merges a partial update into the preferences.
    UpdatePreferences(PreferencesPatch),
    /// Clears order filters and the header query, and restores the default
    /// product sort.
    ResetFilters,

    /// Applies a persisted snapshot, keeping panels closed that do not fit
    /// the current viewport.
    Hydrate(UiSnapshot),
    /// Like `Hydrate`, from snapshot JSON.
    HydrateJson(String),

    /// Reports a new viewport width.
    ///
    /// A panel that is open is closed when the width crosses its breakpoint
    /// going down. Growing the viewport never opens a panel.
    Resize(u32),
}

/// Computes the state that follows `event`.
///
/// `now` stamps notifications that arrive without a timestamp. Malformed
/// `HydrateJson` payloads leave the state unchanged.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn reduce(state: &AppState, event: &Event, now: DateTime<Utc>) -> AppState {
    let mut next = state.clone();

    match event {
        Event::ToggleSidebar => {
            next.sidebar_open = !state.sidebar_open;
            tracing::debug!(open = next.sidebar_open, "sidebar toggled");
        }
        Event::ToggleActivitySidebar => {
            next.activity_sidebar_open = !state.activity_sidebar_open;
            tracing::debug!(open = next.activity_sidebar_open, "activity sidebar toggled");
        }
        Event::SetSearchQuery(query) => {
            next.search_query.clone_from(query);
        }
        Event::ToggleTheme => {
            next.theme = state.theme.toggled();
            tracing::debug!(theme = %next.theme, "theme toggled");
        }
        Event::SetTheme(theme) => {
            next.theme = *theme;
        }
        Event::MarkNotificationRead(id) => {
            if let Some(notification) = next.notifications.iter_mut().find(|n| &n.id == id) {
                notification.read = true;
            } else {
                tracing::debug!(notification_id = %id, "mark read for unknown notification");
            }
        }
        Event::ClearAllNotifications => {
            for notification in &mut next.notifications {
                notification.read = true;
            }
        }
        Event::AddNotification(draft) => {
            let id = next.next_notification_id();
            tracing::debug!(notification_id = %id, kind = ?draft.kind, "notification added");

            next.notifications.insert(0, Notification::from_draft(id, draft.clone(), now));
            next.notifications.truncate(MAX_NOTIFICATIONS);
        }
        Event::RemoveNotification(id) => {
            next.notifications.retain(|n| &n.id != id);
        }
        Event::SetOrderFilters(patch) => {
            next.order_filters.merge(patch);
            tracing::debug!(
                search_term = %next.order_filters.search_term,
                status = ?next.order_filters.status,
                "order filters updated"
            );
        }
        Event::SetProductSort(sort) => {
            next.product_sort = *sort;
        }
        Event::SetLoading { section, loading } => {
            next.loading.set(*section, *loading);
        }
        Event::UpdatePreferences(patch) => {
            next.preferences.merge(patch);
        }
        Event::ResetFilters => {
            next.order_filters = OrderFilters::default();
            next.product_sort = ProductSort {
                key: state.preferences.default_sort,
                direction: SortDirection::Desc,
            };
            next.search_query.clear();
        }
        Event::Hydrate(snapshot) => hydrate(&mut next, snapshot),
        Event::HydrateJson(json) => match UiSnapshot::from_json(json) {
            Ok(snapshot) => hydrate(&mut next, &snapshot),
            Err(e) => tracing::warn!(error = %e, "ignoring malformed snapshot"),
        },
        Event::Resize(width) => {
            let previous = state.viewport_width;
            if next.sidebar_open && sidebar_fits(previous) && !sidebar_fits(*width) {
                next.sidebar_open = false;
                tracing::debug!(previous, width, "sidebar closed by resize");
            }
            if next.activity_sidebar_open && activity_sidebar_fits(previous) && !activity_sidebar_fits(*width) {
                next.activity_sidebar_open = false;
                tracing::debug!(previous, width, "activity sidebar closed by resize");
            }
            next.viewport_width = *width;
        }
    }

    next
}

fn hydrate(state: &mut AppState, snapshot: &UiSnapshot) {
    let width = state.viewport_width;
    state.sidebar_open = snapshot.sidebar_open && sidebar_fits(width);
    state.activity_sidebar_open = snapshot.activity_sidebar_open && activity_sidebar_fits(width);
    state.preferences = snapshot.preferences.clone();
    state.preferences.items_per_page = state.preferences.items_per_page.max(1);
    state.order_filters = snapshot.order_filters.clone();
    state.product_sort = snapshot.product_sort;
    if let Some(theme) = snapshot.theme {
        state.theme = theme;
    }

    tracing::debug!(
        width,
        sidebar_open = state.sidebar_open,
        activity_sidebar_open = state.activity_sidebar_open,
        "state hydrated"
    );
}

/// Processes an event, replaces the state, and returns actions to execute.
///
/// Returns `(changed, actions)`: `changed` is true when any part of the state
/// differs afterwards, and `actions` holds a
/// [`PersistSnapshot`](Action::PersistSnapshot) whenever the persisted slice
/// changed.
///
/// # Errors
///
/// Returns [`DashboardError::Serialization`](crate::domain::DashboardError::Serialization)
/// for a `HydrateJson` payload that does not decode; the state is left as is.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let decoded;
    let event = match event {
        Event::HydrateJson(json) => {
            decoded = Event::Hydrate(UiSnapshot::from_json(json)?);
            &decoded
        }
        other => other,
    };

    let next = reduce(state, event, Utc::now());
    if next == *state {
        tracing::debug!("state unchanged");
        return Ok((false, vec![]));
    }

    let mut actions = Vec::new();
    let snapshot = next.snapshot();
    if snapshot != state.snapshot() {
        actions.push(Action::PersistSnapshot(snapshot));
    }

    *state = next;
    Ok((true, actions))
}
