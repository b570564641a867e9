//! Typed row access for the table state manager.
//!
//! Rows expose their attributes through [`Row::field`], keyed by a row-specific
//! field enum. The table never looks fields up by name; each row type decides
//! what a field means and how it compares.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// A single attribute value as seen by filtering and sorting.
///
/// Only `Text` and `Number` take part in matching and ordering. `Missing`
/// never matches a search term and compares equal to everything.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Textual attribute, compared with locale-aware ordering.
    Text(Cow<'a, str>),
    /// Numeric attribute, compared numerically.
    Number(f64),
    /// Absent or non-comparable attribute.
    Missing,
}

impl<'a> FieldValue<'a> {
    /// Borrows a string slice as a text value.
    #[must_use]
    pub const fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    /// Returns the lowercase string form used for search matching.
    ///
    /// Numbers are rendered the way a user reads them (`82`, `79.49`), so a
    /// term like `"82"` matches a quantity of `82.0`. Very large and very
    /// small magnitudes are written out in plain decimal, never in exponent
    /// form: `1e21` searches as `"1000000000000000000000"` and `1e-7` as
    /// `"0.0000001"`, so a term like `"e+21"` matches nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use admin_dashboard::table::FieldValue;
    ///
    /// assert_eq!(FieldValue::text("Landing Page").search_text().as_deref(), Some("landing page"));
    /// assert_eq!(FieldValue::Number(82.0).search_text().as_deref(), Some("82"));
    /// assert_eq!(FieldValue::Number(1e21).search_text().as_deref(), Some("1000000000000000000000"));
    /// assert_eq!(FieldValue::Missing.search_text(), None);
    /// ```
    #[must_use]
    pub fn search_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.to_lowercase()),
            Self::Number(number) => Some(number.to_string().to_lowercase()),
            Self::Missing => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::text(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<'a, T: Into<FieldValue<'a>>> From<Option<T>> for FieldValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// A record that can be displayed in a table.
///
/// Implementors supply a stable identifier (used by the selection set) and a
/// typed accessor for each column.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::table::{FieldValue, Row};
///
/// struct Invoice {
///     id: String,
///     customer: String,
///     total: f64,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum InvoiceField {
///     Customer,
///     Total,
/// }
///
/// impl Row for Invoice {
///     type Id = String;
///     type Field = InvoiceField;
///
///     fn id(&self) -> &String {
///         &self.id
///     }
///
///     fn field(&self, field: InvoiceField) -> FieldValue<'_> {
///         match field {
///             InvoiceField::Customer => FieldValue::text(&self.customer),
///             InvoiceField::Total => FieldValue::Number(self.total),
///         }
///     }
/// }
/// ```
pub trait Row {
    /// Unique identifier type; selection is tracked by id.
    type Id: Clone + Eq + Hash + Debug;

    /// Field selector used for sorting and searching.
    type Field: Copy + Eq + Debug;

    /// Returns the row's unique identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the value of `field` for this row.
    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}
