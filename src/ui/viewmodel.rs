//! View model types representing renderable dashboard state.
//!
//! View models are computed from a [`TableState`] or [`AppState`] snapshot and
//! hold only display-ready data: header labels with sort indicators, the
//! checkbox state of the select-all header, the pagination summary and
//! relative notification times. Rendering them is left to the host.
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::domain::{Product, ProductField};
//! use admin_dashboard::table::TableState;
//! use admin_dashboard::ui::{SelectionState, TableViewModel, PRODUCT_COLUMNS};
//!
//! let products = vec![
//!     Product::new("1", "ASOS Ridley High Waist", 79.49, 82),
//!     Product::new("2", "Marco Lightweight Shirt", 128.5, 37),
//! ];
//! let table = TableState::new(products, ProductField::table_config(5));
//! let vm = TableViewModel::compute(&table, &PRODUCT_COLUMNS);
//!
//! assert_eq!(vm.pagination.summary(), "Showing 1-2 of 2");
//! assert_eq!(vm.selection, SelectionState::None);
//! assert_eq!(vm.headers[3].indicator(), "↓");
//! ```

use crate::app::modes::ThemeMode;
use crate::app::AppState;
use crate::domain::{NotificationIcon, NotificationKind, OrderField, ProductField};
use crate::table::{Row, SortDirection, TableState};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Static description of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<F> {
    pub key: F,
    pub label: &'static str,
    pub sortable: bool,
}

impl<F> Column<F> {
    #[must_use]
    pub const fn sortable(key: F, label: &'static str) -> Self {
        Self { key, label, sortable: true }
    }
}

/// Columns of the orders table, in display order.
pub const ORDER_COLUMNS: [Column<OrderField>; 6] = [
    Column::sortable(OrderField::OrderId, "Order ID"),
    Column::sortable(OrderField::Customer, "User"),
    Column::sortable(OrderField::Project, "Project"),
    Column::sortable(OrderField::Address, "Address"),
    Column::sortable(OrderField::Date, "Date"),
    Column::sortable(OrderField::Status, "Status"),
];

/// Columns of the top-products table, in display order.
pub const PRODUCT_COLUMNS: [Column<ProductField>; 4] = [
    Column::sortable(ProductField::Name, "Name"),
    Column::sortable(ProductField::Price, "Price"),
    Column::sortable(ProductField::Quantity, "Quantity"),
    Column::sortable(ProductField::Amount, "Amount"),
];

/// A column header with its current sort state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader<F> {
    pub key: F,
    pub label: String,
    pub sortable: bool,
    /// Direction if the table is sorted by this column.
    pub sort: Option<SortDirection>,
}

impl<F> ColumnHeader<F> {
    /// Arrow shown next to the label: `↑` ascending, `↓` descending, empty otherwise.
    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        match self.sort {
            Some(SortDirection::Asc) => "↑",
            Some(SortDirection::Desc) => "↓",
            None => "",
        }
    }
}

/// Checkbox state of the select-all header for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// No row on the page is selected, or the page is empty.
    None,
    /// Some but not all rows on the page are selected.
    Partial,
    /// Every row on the page is selected.
    All,
}

/// Pagination footer data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    /// One-based index of the first row shown; zero when nothing is shown.
    pub first_item: usize,
    /// One-based index of the last row shown; zero when nothing is shown.
    pub last_item: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PaginationInfo {
    /// Footer text, e.g. `"Showing 6-10 of 12"`.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.total_items == 0 {
            "No results".to_string()
        } else {
            format!("Showing {}-{} of {}", self.first_item, self.last_item, self.total_items)
        }
    }

    /// Page numbers for the page buttons, `1..=total_pages`.
    #[must_use]
    pub fn pages(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}

/// One table row with its checkbox state.
#[derive(Debug, Serialize)]
pub struct RowViewModel<'a, R> {
    pub row: &'a R,
    pub selected: bool,
}

/// Display-ready view of one table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = "R: Serialize, R::Field: Serialize"))]
pub struct TableViewModel<'a, R: Row> {
    pub headers: Vec<ColumnHeader<R::Field>>,
    pub rows: Vec<RowViewModel<'a, R>>,
    pub selection: SelectionState,
    pub pagination: PaginationInfo,
    pub search_term: String,
    /// Message shown instead of rows when the page is empty.
    pub empty_message: Option<String>,
}

impl<'a, R> TableViewModel<'a, R>
where
    R: Row,
{
    /// Computes the view model for the current page of `table`.
    #[must_use]
    pub fn compute(table: &'a TableState<R>, columns: &[Column<R::Field>]) -> Self {
        let _span = tracing::debug_span!("compute_table_viewmodel", columns = columns.len()).entered();

        let view = table.view();

        let headers = columns
            .iter()
            .map(|column| ColumnHeader {
                key: column.key,
                label: column.label.to_string(),
                sortable: column.sortable,
                sort: (table.sort_key() == Some(column.key)).then(|| table.sort_direction()),
            })
            .collect();

        let rows: Vec<RowViewModel<'a, R>> = view
            .items
            .iter()
            .map(|&row| RowViewModel {
                row,
                selected: table.is_selected(row.id()),
            })
            .collect();

        let selected_on_page = rows.iter().filter(|r| r.selected).count();
        let selection = match selected_on_page {
            0 => SelectionState::None,
            n if n == rows.len() => SelectionState::All,
            _ => SelectionState::Partial,
        };

        let first_item = if rows.is_empty() {
            0
        } else {
            (view.current_page - 1) * view.page_size + 1
        };
        let last_item = if rows.is_empty() { 0 } else { first_item + rows.len() - 1 };

        let empty_message = rows.is_empty().then(|| {
            if table.search_term().is_empty() {
                "No data available".to_string()
            } else {
                format!("No results for \"{}\"", table.search_term())
            }
        });

        Self {
            headers,
            rows,
            selection,
            pagination: PaginationInfo {
                current_page: view.current_page,
                total_pages: view.total_pages,
                first_item,
                last_item,
                total_items: view.total_items,
                has_prev: view.has_prev,
                has_next: view.has_next,
            },
            search_term: table.search_term().to_string(),
            empty_message,
        }
    }
}

/// One entry of the notification panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Relative label such as `"3 hours ago"`.
    pub time: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(rename = "iconType")]
    pub icon: NotificationIcon,
}

/// Header, sidebars and notification panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeViewModel {
    pub sidebar_open: bool,
    pub activity_sidebar_open: bool,
    pub search_query: String,
    pub theme: ThemeMode,
    pub unread_count: usize,
    pub loading: bool,
    pub notifications: Vec<NotificationItem>,
}

impl ChromeViewModel {
    /// Computes the chrome view model, labelling notification times relative to `now`.
    #[must_use]
    pub fn compute(state: &AppState, now: DateTime<Utc>) -> Self {
        let notifications = state
            .notifications
            .iter()
            .map(|n| NotificationItem {
                id: n.id.clone(),
                title: n.title.clone(),
                message: n.message.clone(),
                time: n.time_ago(now),
                read: n.read,
                kind: n.kind,
                icon: n.icon,
            })
            .collect();

        Self {
            sidebar_open: state.sidebar_open,
            activity_sidebar_open: state.activity_sidebar_open,
            search_query: state.search_query.clone(),
            theme: state.theme,
            unread_count: state.unread_count(),
            loading: state.loading.any(),
            notifications,
        }
    }
}
