//! Generic table state: search, sort, pagination and page-scoped selection.
//!
//! A table is a [`TableState`] over any collection of [`Row`] values. Rows
//! expose typed fields through [`Row::field`]; the state keeps the user's
//! parameters and derives the filtered, sorted order from them.
//!
//! Processing order is fixed: filter by the search term, then sort, then cut
//! the current page. Selection is tracked by row id and survives filtering,
//! sorting and paging.
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::domain::{Product, ProductField};
//! use admin_dashboard::table::{TableEvent, TableState};
//!
//! let products = vec![
//!     Product::new("1", "Marco Lightweight Shirt", 128.5, 37),
//!     Product::new("2", "Lightweight Jacket", 20.0, 184),
//!     Product::new("3", "Marco Shoes", 79.49, 64),
//! ];
//! let mut table = TableState::new(products, ProductField::table_config(5));
//! table.apply(TableEvent::SetSearchTerm("marco".to_string()));
//!
//! let view = table.view();
//! assert_eq!(view.total_items, 2);
//! assert_eq!(view.items[0].name, "Marco Shoes");
//! ```

mod config;
mod field;
mod filter;
mod sort;
mod state;
mod view;

pub use config::{TableConfig, DEFAULT_PAGE_SIZE};
pub use field::{FieldValue, Row};
pub use filter::{MatchMode, SearchMatcher};
pub use sort::{compare_values, locale_compare, sort_by_field, stable_sort_by, SortDirection};
pub use state::TableState;
pub use view::{PageView, TableEvent, TableParams};
