//! The persisted slice of dashboard state.
//!
//! A host stores [`UiSnapshot`] JSON whenever the handler emits
//! [`Action::PersistSnapshot`](super::Action::PersistSnapshot) and feeds it
//! back through [`Event::Hydrate`](super::Event::Hydrate) on the next start.

use super::modes::ThemeMode;
use super::state::{OrderFilters, Preferences, ProductSort};
use crate::domain::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};

/// Sidebars, preferences, order filters, product sort and theme.
///
/// Every field has a default so snapshots written by older versions, or with
/// fields missing, still load.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::app::UiSnapshot;
///
/// let snapshot = UiSnapshot::from_json(r#"{"sidebarOpen":true,"preferences":{"itemsPerPage":20}}"#)?;
/// assert!(snapshot.sidebar_open);
/// assert_eq!(snapshot.preferences.items_per_page, 20);
/// assert_eq!(snapshot.theme, None);
/// # Ok::<(), admin_dashboard::domain::DashboardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiSnapshot {
    pub sidebar_open: bool,
    pub activity_sidebar_open: bool,
    pub preferences: Preferences,
    pub order_filters: OrderFilters,
    pub product_sort: ProductSort,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

impl UiSnapshot {
    /// Encodes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| DashboardError::Serialization(format!("failed to encode snapshot: {e}")))
    }

    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Serialization`] for malformed JSON or values
    /// of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DashboardError::Serialization(format!("failed to decode snapshot: {e}")))
    }
}
