//! Product records shown in the top-products table.

use crate::table::{FieldValue, Row, SortDirection, TableConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product line with its sales totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    /// Sales amount; independent of `price * quantity` when sourced externally.
    pub amount: f64,
}

impl Product {
    /// Creates a product whose amount is `price * quantity`, rounded to cents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use admin_dashboard::domain::Product;
    ///
    /// let product = Product::new("1", "ASOS Ridley High Waist", 79.49, 82);
    /// assert_eq!(product.amount, 6518.18);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        let amount = (price * f64::from(quantity) * 100.0).round() / 100.0;
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            amount,
        }
    }
}

/// Sortable columns of [`Product`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Name,
    Price,
    Quantity,
    #[default]
    Amount,
}

impl ProductField {
    /// Column key as used in persisted state and preferences.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::Amount => "amount",
        }
    }

    /// Table configuration for the products table: highest amount first,
    /// searching by name.
    #[must_use]
    pub fn table_config(page_size: usize) -> TableConfig<Self> {
        TableConfig::default()
            .with_sort(Self::Amount, SortDirection::Desc)
            .with_page_size(page_size)
            .with_searchable_fields(vec![Self::Name])
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProductField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "quantity" => Ok(Self::Quantity),
            "amount" => Ok(Self::Amount),
            other => Err(format!("unknown product field: {other}")),
        }
    }
}

impl Row for Product {
    type Id = String;
    type Field = ProductField;

    fn id(&self) -> &String {
        &self.id
    }

    fn field(&self, field: ProductField) -> FieldValue<'_> {
        match field {
            ProductField::Name => FieldValue::text(&self.name),
            ProductField::Price => self.price.into(),
            ProductField::Quantity => self.quantity.into(),
            ProductField::Amount => self.amount.into(),
        }
    }
}
