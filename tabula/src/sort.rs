//! Stable row ordering.
//!
//! Sorting is a pure function of the rows and the active [`SortSpec`]. The
//! engine keeps no sort state of its own; the caller owns the spec and
//! threads it through on every render.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnDescriptor, Comparator};
use crate::error::ConfigError;
use crate::row::{reindex, Row};
use crate::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// The active sort: a column key and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// The spec after a header click on `key`.
    ///
    /// Clicking the active column flips its direction; any other column
    /// starts ascending.
    pub fn toggled(current: Option<&SortSpec>, key: &str) -> SortSpec {
        match current {
            Some(spec) if spec.key == key => SortSpec::new(key, spec.direction.reversed()),
            _ => SortSpec::ascending(key),
        }
    }
}

/// Sort `rows` by the column named in `spec`.
///
/// Returns the rows unchanged when `spec` is `None`. Otherwise the sort is
/// stable in both directions and row indices are reassigned to the new
/// order.
pub fn sort<V: CellValue>(
    mut rows: Vec<Row<V>>,
    spec: Option<&SortSpec>,
    descriptor: &ColumnDescriptor<V>,
) -> Result<Vec<Row<V>>, ConfigError> {
    let Some(spec) = spec else {
        return Ok(rows);
    };
    if spec.key != descriptor.key {
        return Err(ConfigError::key_mismatch(&descriptor.key, &spec.key));
    }
    if !descriptor.sortable {
        return Err(ConfigError::not_sortable(&spec.key));
    }

    let comparator = descriptor.comparator.as_ref();
    rows.sort_by(|a, b| compare_cells(a.get(&spec.key), b.get(&spec.key), spec.direction, comparator));
    reindex(&mut rows);

    log::debug!(
        "[sort] {} rows by '{}' {:?}",
        rows.len(),
        spec.key,
        spec.direction
    );
    Ok(rows)
}

/// Compare two cells of one column.
///
/// Absent cells always sort last. With no custom comparator, empty cells
/// sort last too. The direction only flips the order of two present values,
/// which keeps ties in input order.
pub fn compare_cells<V: CellValue>(
    a: Option<&V>,
    b: Option<&V>,
    direction: SortDirection,
    comparator: Option<&Comparator<V>>,
) -> Ordering {
    let keep = |v: &&V| comparator.is_some() || !v.is_empty_cell();
    match (a.filter(keep), b.filter(keep)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = match comparator {
                Some(cmp) => cmp(a, b),
                None => default_compare(a, b),
            };
            direction.apply(ord)
        }
    }
}

/// Ascending default ordering.
///
/// Numeric when both values parse as numbers, case-insensitive text when
/// neither does. A number sorts before text, which keeps the ordering
/// transitive over mixed columns.
pub fn default_compare<V: CellValue>(a: &V, b: &V) -> Ordering {
    let (a, b) = match (a.sort_text(), b.sort_text()) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => return a.is_none().cmp(&b.is_none()),
    };

    match (parse_number(&a), parse_number(&b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("-1.5e2"), Some(-150.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("apple"), None);
    }

    #[test]
    fn test_default_compare_numeric_vs_text() {
        assert_eq!(default_compare(&"10", &"9"), Ordering::Greater);
        assert_eq!(default_compare(&"apple", &"Banana"), Ordering::Less);
        // Numbers before text, even where the text would sort first
        assert_eq!(default_compare(&"10", &"apple"), Ordering::Less);
        assert_eq!(default_compare(&"2", &"1a"), Ordering::Less);
        assert_eq!(default_compare(&"1a", &"10"), Ordering::Greater);
    }
}
