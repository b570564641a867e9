//! Dashboard-wide UI state and the values derived from it.
//!
//! [`AppState`] is the single owner of everything the dashboard shows outside
//! an individual table's own parameters: panel visibility, the header search
//! query, theme, the notification feed, order filters, product sort, loading
//! flags and user preferences. It is only changed through
//! [`reduce`](super::handler::reduce); the derived views (`unread_count`,
//! `filtered_orders`, `sorted_products`) are computed on demand.
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::app::AppState;
//!
//! let state = AppState::new(1440);
//! assert!(state.sidebar_open);
//! assert!(state.activity_sidebar_open);
//! assert_eq!(state.preferences.items_per_page, 10);
//!
//! let narrow = AppState::new(800);
//! assert!(!narrow.sidebar_open);
//! ```

use super::modes::{activity_sidebar_fits, sidebar_fits, LoadingSection, ThemeMode};
use super::snapshot::UiSnapshot;
use crate::domain::{Notification, Order, OrderField, OrderStatus, Product, ProductField};
use crate::table::{sort_by_field, Row, SortDirection, TableConfig, TableState, DEFAULT_PAGE_SIZE};
use crate::Config;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Maximum number of entries kept in the notification feed.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Filters applied to the orders list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFilters {
    /// Free-text term matched against order id, customer, project and address.
    pub search_term: String,
    /// When set, only orders with this status are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Partial update merged into [`OrderFilters`]; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFiltersPatch {
    pub search_term: Option<String>,
    /// `Some(None)` clears the status filter.
    pub status: Option<Option<OrderStatus>>,
}

impl OrderFilters {
    pub(crate) fn merge(&mut self, patch: &OrderFiltersPatch) {
        if let Some(term) = &patch.search_term {
            self.search_term.clone_from(term);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    /// Whether `order` passes both the search term and the status filter.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        let term = self.search_term.to_lowercase();
        order.matches_search(&term) && self.status.map_or(true, |status| order.status == status)
    }
}

/// Sort applied to the products list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSort {
    pub key: ProductField,
    pub direction: SortDirection,
}

/// Per-section loading indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingFlags {
    pub dashboard: bool,
    pub orders: bool,
    pub products: bool,
}

impl LoadingFlags {
    #[must_use]
    pub const fn get(&self, section: LoadingSection) -> bool {
        match section {
            LoadingSection::Dashboard => self.dashboard,
            LoadingSection::Orders => self.orders,
            LoadingSection::Products => self.products,
        }
    }

    pub fn set(&mut self, section: LoadingSection, value: bool) {
        match section {
            LoadingSection::Dashboard => self.dashboard = value,
            LoadingSection::Orders => self.orders = value,
            LoadingSection::Products => self.products = value,
        }
    }

    /// Whether any section is loading.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.dashboard || self.orders || self.products
    }
}

/// User preferences persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Page size for the orders table.
    pub items_per_page: usize,
    /// Column the products list sorts by after a filter reset.
    pub default_sort: ProductField,
    pub auto_refresh: bool,
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_PAGE_SIZE,
            default_sort: ProductField::Amount,
            auto_refresh: true,
            notifications_enabled: true,
        }
    }
}

/// Partial update merged into [`Preferences`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub items_per_page: Option<usize>,
    pub default_sort: Option<ProductField>,
    pub auto_refresh: Option<bool>,
    pub notifications_enabled: Option<bool>,
}

impl Preferences {
    pub(crate) fn merge(&mut self, patch: &PreferencesPatch) {
        if let Some(size) = patch.items_per_page {
            self.items_per_page = size.max(1);
        }
        if let Some(key) = patch.default_sort {
            self.default_sort = key;
        }
        if let Some(flag) = patch.auto_refresh {
            self.auto_refresh = flag;
        }
        if let Some(flag) = patch.notifications_enabled {
            self.notifications_enabled = flag;
        }
    }
}

/// Central dashboard state container.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Navigation sidebar visibility.
    pub sidebar_open: bool,
    /// Activity/notification sidebar visibility.
    pub activity_sidebar_open: bool,
    /// Header search box contents.
    pub search_query: String,
    pub theme: ThemeMode,

    /// Notification feed, newest first, at most [`MAX_NOTIFICATIONS`] long.
    pub notifications: Vec<Notification>,
    pub orders: Arc<[Order]>,
    pub products: Arc<[Product]>,

    pub order_filters: OrderFilters,
    pub product_sort: ProductSort,
    pub loading: LoadingFlags,
    pub preferences: Preferences,

    /// Last known viewport width in CSS pixels.
    pub viewport_width: u32,
    /// Rows per page in the top-products table.
    pub product_page_size: usize,

    /// Sequence used to mint notification ids.
    pub(crate) notification_seq: u64,
}

impl AppState {
    /// Creates an empty dashboard sized for `viewport_width`.
    ///
    /// Each sidebar starts open only if the viewport is at or above its
    /// breakpoint.
    #[must_use]
    pub fn new(viewport_width: u32) -> Self {
        Self {
            sidebar_open: sidebar_fits(viewport_width),
            activity_sidebar_open: activity_sidebar_fits(viewport_width),
            search_query: String::new(),
            theme: ThemeMode::default(),
            notifications: Vec::new(),
            orders: Arc::from(Vec::new()),
            products: Arc::from(Vec::new()),
            order_filters: OrderFilters::default(),
            product_sort: ProductSort::default(),
            loading: LoadingFlags::default(),
            preferences: Preferences::default(),
            viewport_width,
            product_page_size: crate::DEFAULT_PRODUCT_PAGE_SIZE,
            notification_seq: 0,
        }
    }

    /// Creates a dashboard from host configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(config.viewport_width);
        state.theme = config.theme;
        state.preferences.items_per_page = config.order_page_size.max(1);
        state.product_page_size = config.product_page_size.max(1);
        state
    }

    #[must_use]
    pub fn with_orders(mut self, orders: impl Into<Arc<[Order]>>) -> Self {
        self.orders = orders.into();
        self
    }

    #[must_use]
    pub fn with_products(mut self, products: impl Into<Arc<[Product]>>) -> Self {
        self.products = products.into();
        self
    }

    /// Replaces the feed, keeping the newest [`MAX_NOTIFICATIONS`] entries in
    /// the given order.
    #[must_use]
    pub fn with_notifications(mut self, mut notifications: Vec<Notification>) -> Self {
        notifications.truncate(MAX_NOTIFICATIONS);
        self.notifications = notifications;
        self
    }

    /// Number of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Orders passing the current [`OrderFilters`], in collection order.
    #[must_use]
    pub fn filtered_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|order| self.order_filters.matches(order)).collect()
    }

    /// Products ordered by the current [`ProductSort`].
    #[must_use]
    pub fn sorted_products(&self) -> Vec<&Product> {
        let ProductSort { key, direction } = self.product_sort;
        let mut products: Vec<&Product> = self.products.iter().collect();
        sort_by_field(&mut products, direction, |product| product.field(key));
        products
    }

    /// Table over the filtered orders, paged by the `items_per_page` preference.
    #[must_use]
    pub fn order_table(&self) -> TableState<Order> {
        let rows: Vec<Order> = self.filtered_orders().into_iter().cloned().collect();
        TableState::new(rows, OrderField::table_config(self.preferences.items_per_page))
    }

    /// Table over the products, starting from the current [`ProductSort`] and
    /// paged by `product_page_size`.
    #[must_use]
    pub fn product_table(&self) -> TableState<Product> {
        let config: TableConfig<ProductField> = ProductField::table_config(self.product_page_size)
            .with_sort(self.product_sort.key, self.product_sort.direction);
        TableState::new(Arc::clone(&self.products), config)
    }

    /// The slice of state that survives a reload.
    #[must_use]
    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            sidebar_open: self.sidebar_open,
            activity_sidebar_open: self.activity_sidebar_open,
            preferences: self.preferences.clone(),
            order_filters: self.order_filters.clone(),
            product_sort: self.product_sort,
            theme: Some(self.theme),
        }
    }

    /// Mints a notification id not present in the feed.
    pub(crate) fn next_notification_id(&mut self) -> String {
        loop {
            self.notification_seq += 1;
            let id = format!("notification-{}", self.notification_seq);
            if !self.notifications.iter().any(|n| n.id == id) {
                return id;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::DEFAULT_VIEWPORT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Customer;

    fn order(id: &str, name: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            order_id: format!("#CM98{id:0>2}"),
            user: Customer {
                name: name.to_string(),
                avatar: String::new(),
            },
            project: "Landing Page".to_string(),
            address: "Meadow Lane Oakland".to_string(),
            date: "Just now".to_string(),
            status,
            has_document: None,
        }
    }

    #[test]
    fn breakpoints_decide_initial_panels() {
        let medium = AppState::new(1100);
        assert!(medium.sidebar_open);
        assert!(!medium.activity_sidebar_open);

        let edge = AppState::new(1024);
        assert!(edge.sidebar_open);
    }

    #[test]
    fn filtered_orders_combine_search_and_status() {
        let mut state = AppState::new(1440).with_orders(vec![
            order("1", "Natali Craig", OrderStatus::InProgress),
            order("2", "Kate Morrison", OrderStatus::Complete),
            order("3", "Drew Cano", OrderStatus::Complete),
        ]);

        state.order_filters.status = Some(OrderStatus::Complete);
        assert_eq!(state.filtered_orders().len(), 2);

        state.order_filters.search_term = "KATE".to_string();
        let ids: Vec<&str> = state.filtered_orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn sorted_products_follow_product_sort() {
        let mut state = AppState::new(1440).with_products(vec![
            Product::new("1", "Lightweight Jacket", 20.0, 184),
            Product::new("2", "Half Sleeve Shirt", 39.99, 64),
            Product::new("3", "ASOS Ridley High Waist", 79.49, 82),
        ]);

        let by_amount: Vec<&str> = state.sorted_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(by_amount, vec!["3", "1", "2"]);

        state.product_sort = ProductSort {
            key: ProductField::Name,
            direction: SortDirection::Asc,
        };
        let by_name: Vec<&str> = state.sorted_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(by_name, vec!["3", "2", "1"]);
    }

    #[test]
    fn notification_ids_skip_existing() {
        let taken = Notification::from_draft(
            "notification-1".to_string(),
            crate::domain::NewNotification::new("Imported", "from a snapshot"),
            chrono::Utc::now(),
        );
        let mut state = AppState::new(1440).with_notifications(vec![taken]);

        assert_eq!(state.next_notification_id(), "notification-2");
        assert_eq!(state.next_notification_id(), "notification-3");
    }

    #[test]
    fn preferences_accept_partial_json() {
        let prefs: Preferences = serde_json::from_str(r#"{"itemsPerPage":25}"#).unwrap();
        assert_eq!(prefs.items_per_page, 25);
        assert_eq!(prefs.default_sort, ProductField::Amount);
        assert!(prefs.auto_refresh);
    }

    #[test]
    fn loading_flags_track_sections() {
        let mut flags = LoadingFlags::default();
        flags.set(LoadingSection::Orders, true);
        assert!(flags.get(LoadingSection::Orders));
        assert!(!flags.get(LoadingSection::Products));
        assert!(flags.any());
    }
}
