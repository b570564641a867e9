//! Sort direction and the field comparator shared by every table.

use super::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Direction of a column sort.
///
/// Defaults to [`SortDirection::Desc`], which is also the direction adopted
/// when the user switches to a new sort column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest value first.
    Asc,
    /// Largest value first.
    #[default]
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Applies this direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// Compares two strings the way a user-facing collation would.
///
/// Letters compare case-insensitively first; strings that differ only in case
/// put the lowercase form first (`"apple" < "Apple" < "banana"`).
///
/// # Example
///
/// ```rust
/// use admin_dashboard::table::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find_map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Some(Ordering::Less),
                (false, true) => Some(Ordering::Greater),
                _ => None,
            })
            .unwrap_or(Ordering::Equal)
    })
}

/// Compares two field values in the given direction.
///
/// Text against text uses [`locale_compare`], number against number compares
/// numerically. Every other pairing, including `NaN`, is `Equal`. This is not
/// a total order, so sort rows with [`sort_by_field`] rather than handing this
/// comparator to a standard library sort.
#[must_use]
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => locale_compare(a, b),
        (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    };
    direction.apply(ordering)
}

/// Stable merge sort that never panics on an inconsistent comparator.
///
/// [`compare_values`] is not a total order once missing, mixed or `NaN`
/// values are involved (`5 == Missing == 3` while `5 > 3`), which the standard
/// library sorts may reject with a panic. This sort only ever asks whether the
/// right element is strictly less than the left one, so ties and incomparable
/// pairs keep their collection order.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::table::stable_sort_by;
///
/// let mut values = [3, 1, 2, 1];
/// stable_sort_by(&mut values, |a, b| a.cmp(b));
/// assert_eq!(values, [1, 1, 2, 3]);
/// ```
pub fn stable_sort_by<T: Copy>(items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buffer = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&items[start..mid], &items[mid..end], &mut buffer[start..end], &mut compare);
            start = end;
        }
        items.copy_from_slice(&buffer);
        width *= 2;
    }
}

fn merge<T: Copy>(left: &[T], right: &[T], out: &mut [T], compare: &mut impl FnMut(&T, &T) -> Ordering) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && compare(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ValueClass {
    Text,
    Number,
    Incomparable,
}

fn classify(value: &FieldValue<'_>) -> ValueClass {
    match value {
        FieldValue::Text(_) => ValueClass::Text,
        FieldValue::Number(n) if !n.is_nan() => ValueClass::Number,
        _ => ValueClass::Incomparable,
    }
}

/// Sorts `items` by the field value `value` extracts, stably.
///
/// Rows whose value is missing or `NaN` keep their exact position. Text rows
/// are sorted among the positions text rows occupied, and number rows among
/// the positions number rows occupied, so a text value and a number value
/// never trade places.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::table::{sort_by_field, FieldValue, SortDirection};
///
/// let values = [Some(5.0), None, Some(1.0), Some(3.0)];
/// let mut order: Vec<usize> = (0..values.len()).collect();
/// sort_by_field(&mut order, SortDirection::Asc, |i| {
///     values[i].map_or(FieldValue::Missing, FieldValue::Number)
/// });
/// assert_eq!(order, vec![2, 1, 3, 0]);
/// ```
pub fn sort_by_field<'v, T: Copy>(items: &mut [T], direction: SortDirection, value: impl Fn(T) -> FieldValue<'v>) {
    let values: Vec<FieldValue<'v>> = items.iter().map(|&item| value(item)).collect();
    let classes: Vec<ValueClass> = values.iter().map(classify).collect();
    let mut sorted = items.to_vec();

    for class in [ValueClass::Text, ValueClass::Number] {
        let slots: Vec<usize> = (0..items.len()).filter(|&i| classes[i] == class).collect();
        let mut members = slots.clone();
        stable_sort_by(&mut members, |&a, &b| compare_values(&values[a], &values[b], direction));
        for (&slot, &member) in slots.iter().zip(&members) {
            sorted[slot] = items[member];
        }
    }

    items.copy_from_slice(&sorted);
}
