//! Order records shown in the orders table.

use crate::table::{FieldValue, Row, SortDirection, TableConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfilment status of an order.
///
/// Serialized with the display labels (`"In Progress"`, `"Complete"`, ...)
/// so persisted filters round-trip with the labels shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 5] = [
        Self::InProgress,
        Self::Complete,
        Self::Pending,
        Self::Approved,
        Self::Rejected,
    ];

    /// Label shown in the status column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

/// Customer who placed an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    /// Avatar reference, typically initials or an image path.
    pub avatar: String,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Human-facing order number, e.g. `#CM9801`.
    pub order_id: String,
    pub user: Customer,
    pub project: String,
    pub address: String,
    /// Display date as provided by the source ("Just now", "Feb 2, 2023").
    pub date: String,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_document: Option<bool>,
}

impl Order {
    /// Whether `term` (already lowercased) appears in the order number,
    /// customer name, project or address.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }

        [&self.order_id, &self.user.name, &self.project, &self.address]
            .into_iter()
            .any(|text| text.to_lowercase().contains(term))
    }
}

/// Sortable and searchable columns of [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    OrderId,
    Customer,
    Project,
    Address,
    Date,
    Status,
}

impl OrderField {
    /// Fields the order search box consults.
    pub const SEARCHABLE: [Self; 4] = [Self::OrderId, Self::Customer, Self::Project, Self::Address];

    /// Table configuration for the orders table: newest order id first,
    /// searching the [`SEARCHABLE`](Self::SEARCHABLE) fields.
    #[must_use]
    pub fn table_config(page_size: usize) -> TableConfig<Self> {
        TableConfig::default()
            .with_sort(Self::OrderId, SortDirection::Desc)
            .with_page_size(page_size)
            .with_searchable_fields(Self::SEARCHABLE.to_vec())
    }
}

impl Row for Order {
    type Id = String;
    type Field = OrderField;

    fn id(&self) -> &String {
        &self.id
    }

    fn field(&self, field: OrderField) -> FieldValue<'_> {
        match field {
            OrderField::OrderId => FieldValue::text(&self.order_id),
            OrderField::Customer => FieldValue::text(&self.user.name),
            OrderField::Project => FieldValue::text(&self.project),
            OrderField::Address => FieldValue::text(&self.address),
            OrderField::Date => FieldValue::text(&self.date),
            OrderField::Status => FieldValue::text(self.status.label()),
        }
    }
}
