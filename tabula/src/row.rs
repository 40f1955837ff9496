//! Table rows.

use std::collections::HashMap;

/// A row of cells keyed by column.
///
/// `index` is the row's position within its group (or the flat sequence).
/// It is reassigned after every sort, so it always equals render order.
/// `origin` is the position the row was ingested at and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<V> {
    pub index: usize,
    origin: usize,
    cells: HashMap<String, V>,
}

impl<V> Row<V> {
    /// Create a row from `(column key, value)` pairs.
    pub fn new<K: Into<String>>(cells: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            index: 0,
            origin: 0,
            cells: cells.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Position within its group at ingestion, before any sort.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Value of the cell in `column`, if present.
    pub fn get(&self, column: &str) -> Option<&V> {
        self.cells.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: V) -> Option<V> {
        self.cells.insert(column.into(), value)
    }

    pub fn cells(&self) -> &HashMap<String, V> {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Row<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Number rows in ingestion order.
pub(crate) fn ingest<V>(rows: &mut [Row<V>]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.index = i;
        row.origin = i;
    }
}

/// Reassign indices to match the current order.
pub(crate) fn reindex<V>(rows: &mut [Row<V>]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.index = i;
    }
}
