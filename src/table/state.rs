//! Table state: search, sort, pagination and selection over a shared collection.
//!
//! [`TableState`] keeps the user-controlled parameters alongside the derived
//! row order. The derived order (`ordered`) is rebuilt by `recompute()` after
//! any change that affects filtering or sorting; pagination is a slice of it
//! and needs no rebuild.
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::domain::{Product, ProductField};
//! use admin_dashboard::table::{SortDirection, TableConfig, TableState};
//!
//! let products = vec![
//!     Product::new("1", "Marco Shoes", 79.49, 64),
//!     Product::new("2", "Half Sleeve Shirt", 39.99, 64),
//! ];
//! let config = TableConfig::default()
//!     .with_sort(ProductField::Amount, SortDirection::Desc)
//!     .with_page_size(5);
//!
//! let mut table = TableState::new(products, config);
//! table.set_sort_key(ProductField::Name);
//!
//! let view = table.view();
//! assert_eq!(view.items[0].name, "Marco Shoes");
//! assert_eq!(view.total_pages, 1);
//! ```

use super::config::TableConfig;
use super::field::Row;
use super::filter::SearchMatcher;
use super::sort::{sort_by_field, SortDirection};
use super::view::{PageView, TableEvent, TableParams};
use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

/// Search, sort, pagination and selection state for one table instance.
///
/// The collection is shared read-only through an `Arc<[R]>`; the table never
/// mutates it. Selection is tracked by id and is not cleaned up when rows
/// disappear from the collection.
#[derive(Debug, Clone)]
pub struct TableState<R: Row> {
    rows: Arc<[R]>,
    config: TableConfig<R::Field>,

    sort_key: Option<R::Field>,
    sort_direction: SortDirection,
    current_page: usize,
    page_size: usize,
    search_term: String,
    selected: HashSet<R::Id>,

    /// Indices into `rows` that pass the filter, in sorted order.
    ordered: Vec<usize>,
}

impl<R: Row> TableState<R> {
    /// Creates a table over `rows` starting from `config`.
    #[must_use]
    pub fn new(rows: impl Into<Arc<[R]>>, config: TableConfig<R::Field>) -> Self {
        let mut table = Self {
            rows: rows.into(),
            sort_key: config.sort_key,
            sort_direction: config.sort_direction,
            current_page: 1,
            page_size: config.page_size.max(1),
            search_term: String::new(),
            selected: HashSet::new(),
            ordered: Vec::new(),
            config,
        };
        table.recompute();
        table
    }

    /// Replaces the collection, keeping parameters and selection.
    ///
    /// The current page is clamped if the new collection has fewer pages.
    pub fn set_rows(&mut self, rows: impl Into<Arc<[R]>>) {
        self.rows = rows.into();
        tracing::debug!(row_count = self.rows.len(), "table rows replaced");
        self.recompute();
    }

    /// Returns the full, unfiltered collection.
    #[must_use]
    pub fn rows(&self) -> &Arc<[R]> {
        &self.rows
    }

    /// Returns the configuration `reset_table` restores.
    #[must_use]
    pub const fn config(&self) -> &TableConfig<R::Field> {
        &self.config
    }

    /// Sets the search term and returns to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        self.recompute();
    }

    /// Sorts by `key`.
    ///
    /// Selecting the active column toggles the direction; selecting another
    /// column adopts it with the default (descending) direction. Either way
    /// the table returns to the first page.
    pub fn set_sort_key(&mut self, key: R::Field) {
        if self.sort_key == Some(key) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::default();
        }
        self.current_page = 1;

        tracing::debug!(sort_key = ?key, direction = %self.sort_direction, "sort key set");
        self.recompute();
    }

    /// Sets the sort direction without changing the column or page.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        if self.sort_direction != direction {
            self.sort_direction = direction;
            self.recompute();
        }
    }

    /// Moves to `page`, clamped to `[1, max(1, total_pages)]`.
    ///
    /// Accepts any integer; negative or oversized requests are clamped
    /// rather than rejected.
    pub fn set_current_page(&mut self, page: i64) {
        self.current_page = self.clamp_page(page);
    }

    /// Advances one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    /// Goes back one page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.current_page -= 1;
        }
    }

    /// Sets the page size (at least 1) and returns to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
    }

    /// Adds `id` to the selection if absent, removes it if present.
    pub fn toggle_item_selection(&mut self, id: R::Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Selects the current page, or clears the selection if every row on the
    /// current page is already selected.
    ///
    /// Selection is page-scoped: rows on other pages are never added, and a
    /// fresh select-all replaces any selection from other pages.
    pub fn select_all_items(&mut self) {
        if self.is_page_fully_selected() {
            self.selected.clear();
        } else {
            let page_ids: HashSet<R::Id> = self.page_rows().map(|row| row.id().clone()).collect();
            self.selected = page_ids;
        }
        tracing::debug!(selected = self.selected.len(), "select all toggled");
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Restores search term, sort, page and page size to their configured
    /// initial values and clears the selection.
    pub fn reset_table(&mut self) {
        self.sort_key = self.config.sort_key;
        self.sort_direction = self.config.sort_direction;
        self.current_page = 1;
        self.page_size = self.config.page_size.max(1);
        self.search_term.clear();
        self.selected.clear();
        self.recompute();
    }

    /// Applies a [`TableEvent`], returning whether any parameter changed.
    pub fn apply(&mut self, event: TableEvent<R::Field, R::Id>) -> bool {
        let _span = tracing::debug_span!("table_event", event = ?event).entered();

        let before = self.fingerprint();
        match event {
            TableEvent::SetSearchTerm(term) => self.set_search_term(term),
            TableEvent::SetSortKey(key) => self.set_sort_key(key),
            TableEvent::SetSortDirection(direction) => self.set_sort_direction(direction),
            TableEvent::SetCurrentPage(page) => self.set_current_page(page),
            TableEvent::NextPage => self.next_page(),
            TableEvent::PrevPage => self.prev_page(),
            TableEvent::SetPageSize(size) => self.set_page_size(size),
            TableEvent::ToggleItemSelection(id) => self.toggle_item_selection(id),
            TableEvent::SelectAllItems => self.select_all_items(),
            TableEvent::ClearSelection => self.clear_selection(),
            TableEvent::Reset => self.reset_table(),
        }
        before != self.fingerprint()
    }

    /// Column currently sorted by.
    #[must_use]
    pub const fn sort_key(&self) -> Option<R::Field> {
        self.sort_key
    }

    /// Current sort direction.
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// One-based current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Active search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Ids currently selected.
    #[must_use]
    pub const fn selected_items(&self) -> &HashSet<R::Id> {
        &self.selected
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &R::Id) -> bool {
        self.selected.contains(id)
    }

    /// Whether every row on the current page is selected.
    ///
    /// True for an empty page, so select-all on an empty page clears.
    #[must_use]
    pub fn is_page_fully_selected(&self) -> bool {
        self.page_rows().all(|row| self.selected.contains(row.id()))
    }

    /// Number of rows passing the search filter.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.ordered.len()
    }

    /// Number of pages for the filtered rows; zero when nothing matches.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.ordered.len().div_ceil(self.page_size)
    }

    /// Whether a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// All filtered rows in sorted order, across every page.
    pub fn sorted_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.ordered.iter().map(|&index| &self.rows[index])
    }

    /// Computes the current page view.
    #[must_use]
    pub fn view(&self) -> PageView<'_, R> {
        PageView {
            items: self.page_rows().collect(),
            total_pages: self.total_pages(),
            has_next: self.has_next(),
            has_prev: self.has_prev(),
            total_items: self.total_items(),
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }

    /// Snapshot of the current parameter values.
    #[must_use]
    pub fn params(&self) -> TableParams<R::Field, R::Id> {
        TableParams {
            sort_key: self.sort_key,
            sort_direction: self.sort_direction,
            current_page: self.current_page,
            page_size: self.page_size,
            search_term: self.search_term.clone(),
            selected_items: self.selected.clone(),
        }
    }

    fn page_range(&self) -> Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.page_size).min(self.ordered.len());
        let end = start.saturating_add(self.page_size).min(self.ordered.len());
        start..end
    }

    fn page_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.ordered[self.page_range()].iter().map(|&index| &self.rows[index])
    }

    fn clamp_page(&self, page: i64) -> usize {
        let max_page = i64::try_from(self.total_pages().max(1)).unwrap_or(i64::MAX);
        usize::try_from(page.clamp(1, max_page)).unwrap_or(1)
    }

    fn fingerprint(&self) -> (Option<R::Field>, SortDirection, usize, usize, String, HashSet<R::Id>) {
        (
            self.sort_key,
            self.sort_direction,
            self.current_page,
            self.page_size,
            self.search_term.clone(),
            self.selected.clone(),
        )
    }

    /// Rebuilds the filtered, sorted row order and re-clamps the page.
    fn recompute(&mut self) {
        let _span = tracing::debug_span!("table_recompute",
            total_rows = self.rows.len(),
            term_len = self.search_term.len(),
            sort_key = ?self.sort_key,
            direction = %self.sort_direction
        )
        .entered();

        let matcher = if self.config.searchable_fields.is_empty() {
            None
        } else {
            SearchMatcher::new(&self.search_term, self.config.match_mode)
        };

        let fields = &self.config.searchable_fields;
        let mut ordered: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matcher.as_ref().map_or(true, |m| m.matches(*row, fields)))
            .map(|(index, _)| index)
            .collect();

        if let Some(key) = self.sort_key {
            let rows = &self.rows;
            sort_by_field(&mut ordered, self.sort_direction, move |index| rows[index].field(key));
        }

        self.ordered = ordered;
        self.current_page = self.clamp_page(i64::try_from(self.current_page).unwrap_or(i64::MAX));

        tracing::debug!(
            filtered_count = self.ordered.len(),
            total_pages = self.total_pages(),
            "table recomputed"
        );
    }
}
