//! Derived output of a table: the current page and parameter values.

use super::sort::SortDirection;
use crate::domain::error::{DashboardError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// The current page of a filtered, sorted table.
///
/// Borrowed from the table state; recompute by calling
/// [`TableState::view`](super::TableState::view) again after a mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a, R> {
    /// Rows on the current page, in sorted order.
    pub items: Vec<&'a R>,
    /// `ceil(total_items / page_size)`; zero for an empty result.
    pub total_pages: usize,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_prev: bool,
    /// Number of rows passing the search filter.
    pub total_items: usize,
    /// One-based page number shown.
    pub current_page: usize,
    /// Maximum rows per page.
    pub page_size: usize,
}

impl<R: Serialize> PageView<'_, R> {
    /// Encodes the view as JSON for an external view layer.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Serialization`] if a row fails to serialize.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| DashboardError::Serialization(format!("failed to encode page view: {e}")))
    }
}

/// Current parameter values of a table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableParams<F, I> {
    /// Column currently sorted by.
    pub sort_key: Option<F>,
    /// Current sort direction.
    pub sort_direction: SortDirection,
    /// One-based current page.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Active search term.
    pub search_term: String,
    /// Ids marked selected.
    pub selected_items: HashSet<I>,
}

/// A user interaction with a table.
///
/// Every [`TableState`](super::TableState) mutator is reachable through an
/// event so hosts can route input through a single entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent<F, I> {
    /// Replaces the search term and returns to page 1.
    SetSearchTerm(String),
    /// Sorts by a column, toggling direction if it is already active.
    SetSortKey(F),
    /// Sets the sort direction without changing the column.
    SetSortDirection(SortDirection),
    /// Jumps to a page, clamped to the valid range.
    SetCurrentPage(i64),
    /// Advances one page if possible.
    NextPage,
    /// Goes back one page if possible.
    PrevPage,
    /// Changes the page size and returns to page 1.
    SetPageSize(usize),
    /// Adds or removes one id from the selection.
    ToggleItemSelection(I),
    /// Selects the current page, or clears if it is already selected.
    SelectAllItems,
    /// Empties the selection.
    ClearSelection,
    /// Restores the configured initial parameters.
    Reset,
}
