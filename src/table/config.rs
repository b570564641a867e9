//! Initial parameters for a table instance.

use super::filter::MatchMode;
use super::sort::SortDirection;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Initial parameters for a [`TableState`](super::TableState).
///
/// These are the values `reset_table` returns to. A `sort_key` of `None`
/// keeps rows in collection order until the user picks a column.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::domain::ProductField;
/// use admin_dashboard::table::{SortDirection, TableConfig};
///
/// let config = TableConfig::default()
///     .with_sort(ProductField::Amount, SortDirection::Desc)
///     .with_page_size(5)
///     .with_searchable_fields(vec![ProductField::Name]);
///
/// assert_eq!(config.page_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig<F> {
    /// Column sorted by initially.
    pub sort_key: Option<F>,
    /// Initial sort direction.
    pub sort_direction: SortDirection,
    /// Initial page size; values below 1 are treated as 1.
    pub page_size: usize,
    /// Fields consulted by the search term.
    pub searchable_fields: Vec<F>,
    /// How the search term is matched.
    pub match_mode: MatchMode,
}

impl<F> Default for TableConfig<F> {
    fn default() -> Self {
        Self {
            sort_key: None,
            sort_direction: SortDirection::default(),
            page_size: DEFAULT_PAGE_SIZE,
            searchable_fields: Vec::new(),
            match_mode: MatchMode::default(),
        }
    }
}

impl<F> TableConfig<F> {
    /// Sets the initial sort column and direction.
    #[must_use]
    pub fn with_sort(mut self, key: F, direction: SortDirection) -> Self {
        self.sort_key = Some(key);
        self.sort_direction = direction;
        self
    }

    /// Sets the initial page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the fields the search term is matched against.
    #[must_use]
    pub fn with_searchable_fields(mut self, fields: Vec<F>) -> Self {
        self.searchable_fields = fields;
        self
    }

    /// Sets the search match mode.
    #[must_use]
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }
}
