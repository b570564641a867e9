//! Presentation layer: view models and display formatting.
//!
//! ```text
//! TableState / AppState → compute → TableViewModel / ChromeViewModel → host renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Column headers, selection and pagination state, chrome
//! - [`format`]: Currency, number and percentage formatting

pub mod format;
pub mod viewmodel;

pub use format::{format_currency, format_number, format_percentage};
pub use viewmodel::{
    ChromeViewModel, Column, ColumnHeader, NotificationItem, PaginationInfo, RowViewModel, SelectionState,
    TableViewModel, ORDER_COLUMNS, PRODUCT_COLUMNS,
};
