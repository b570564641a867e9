//! Domain layer: the records the dashboard displays and the crate error type.
//!
//! Each record implements [`Row`](crate::table::Row) through a field enum so
//! the generic table can sort and search it without dynamic lookups.
//!
//! - [`error`]: Error types and result aliases
//! - [`order`]: Orders and their status
//! - [`product`]: Top-selling products
//! - [`notification`]: Notification feed entries

pub mod error;
pub mod notification;
pub mod order;
pub mod product;

pub use error::{DashboardError, Result};
pub use notification::{time_ago, NewNotification, Notification, NotificationIcon, NotificationKind};
pub use order::{Customer, Order, OrderField, OrderStatus};
pub use product::{Product, ProductField};
