//! Grouping: partitions, collapse state and group-level ordering.
//!
//! Flat and grouped data are both normalized into a sequence of [`Group`]s.
//! Flat data becomes a single implicit group that has no header and cannot
//! be collapsed, so everything downstream handles one shape.

use serde::Serialize;

use crate::column::ColumnDescriptor;
use crate::error::{ConfigError, IndexError, Result};
use crate::row::{ingest, Row};
use crate::sort::{self, compare_cells, SortSpec};
use crate::value::CellValue;

/// Incoming table data.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset<V> {
    /// A single sequence of rows.
    Flat(Vec<Row<V>>),
    /// A sequence of groups, each a sequence of rows.
    Grouped(Vec<Vec<Row<V>>>),
}

impl<V> Dataset<V> {
    pub fn is_grouped(&self) -> bool {
        matches!(self, Dataset::Grouped(_))
    }

    /// Total number of rows across all groups.
    pub fn row_count(&self) -> usize {
        match self {
            Dataset::Flat(rows) => rows.len(),
            Dataset::Grouped(groups) => groups.iter().map(Vec::len).sum(),
        }
    }
}

impl<V> From<Vec<Row<V>>> for Dataset<V> {
    fn from(rows: Vec<Row<V>>) -> Self {
        Dataset::Flat(rows)
    }
}

impl<V> From<Vec<Vec<Row<V>>>> for Dataset<V> {
    fn from(groups: Vec<Vec<Row<V>>>) -> Self {
        Dataset::Grouped(groups)
    }
}

/// Whether a group came from grouped input or wraps flat data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Synthetic group around flat data. No header, never collapsed.
    Implicit,
    /// A group supplied by the caller.
    Explicit,
}

/// A partition of rows with its own collapse state.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<V> {
    /// Identity of the group, assigned by input position.
    ///
    /// Group-level sorting moves groups around but keeps their index, so
    /// collapse state addressed by index follows the group.
    pub index: usize,
    pub kind: GroupKind,
    pub collapsed: bool,
    pub rows: Vec<Row<V>>,
}

impl<V> Group<V> {
    pub fn is_implicit(&self) -> bool {
        self.kind == GroupKind::Implicit
    }

    /// The group's label: the cell in `column` of the row ingested first.
    ///
    /// Row sorting does not change it, so group order and headers do not
    /// depend on the order of rows inside the group.
    pub fn label(&self, column: &str) -> Option<&V> {
        self.rows
            .iter()
            .find(|row| row.origin() == 0)
            .and_then(|row| row.get(column))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Normalize a dataset into groups.
///
/// Row indices are assigned by position within each group. Every group
/// starts expanded.
pub fn partition<V>(data: Dataset<V>) -> Vec<Group<V>> {
    let groups: Vec<Group<V>> = match data {
        Dataset::Flat(mut rows) => {
            ingest(&mut rows);
            vec![Group {
                index: 0,
                kind: GroupKind::Implicit,
                collapsed: false,
                rows,
            }]
        }
        Dataset::Grouped(groups) => groups
            .into_iter()
            .enumerate()
            .map(|(index, mut rows)| {
                ingest(&mut rows);
                Group {
                    index,
                    kind: GroupKind::Explicit,
                    collapsed: false,
                    rows,
                }
            })
            .collect(),
    };

    log::debug!("[group] partitioned into {} groups", groups.len());
    groups
}

/// Set the collapse flag of the group with index `group_index`.
///
/// Rows of a collapsed group stay in the data; only the render plan skips
/// them.
pub fn set_collapsed<V>(
    mut groups: Vec<Group<V>>,
    group_index: usize,
    collapsed: bool,
) -> Result<Vec<Group<V>>> {
    let len = groups.len();
    let group = groups
        .iter_mut()
        .find(|g| g.index == group_index)
        .ok_or(IndexError {
            index: group_index,
            len,
        })?;

    if group.is_implicit() {
        return Err(ConfigError::NotCollapsible { index: group_index }.into());
    }

    group.collapsed = collapsed;
    log::debug!("[group] group {} collapsed={}", group_index, collapsed);
    Ok(groups)
}

/// Order the groups themselves by their label values.
///
/// `descriptor` must be the group label column and `spec` must name it.
/// Labels are compared with the same rules as row sorting: the column's
/// comparator or the default one, empty labels last, stable ties.
pub fn sort_groups<V: CellValue>(
    groups: Vec<Group<V>>,
    spec: Option<&SortSpec>,
    descriptor: &ColumnDescriptor<V>,
) -> std::result::Result<Vec<Group<V>>, ConfigError> {
    let Some(spec) = spec else {
        return Ok(groups);
    };
    if spec.key != descriptor.key {
        return Err(ConfigError::key_mismatch(&descriptor.key, &spec.key));
    }
    if !descriptor.group_label {
        return Err(ConfigError::NotGroupLabel {
            key: descriptor.key.clone(),
        });
    }

    let comparator = descriptor.comparator.as_ref();
    let labels: Vec<Option<&V>> = groups.iter().map(|g| g.label(&spec.key)).collect();
    let mut order: Vec<usize> = (0..groups.len()).collect();
    order.sort_by(|&a, &b| compare_cells(labels[a], labels[b], spec.direction, comparator));

    let mut slots: Vec<Option<Group<V>>> = groups.into_iter().map(Some).collect();
    let groups: Vec<Group<V>> = order.into_iter().filter_map(|i| slots[i].take()).collect();

    log::debug!("[group] ordered {} groups by '{}'", groups.len(), spec.key);
    Ok(groups)
}

/// Sort the rows inside every group. Group order is untouched.
pub fn sort_within<V: CellValue>(
    groups: Vec<Group<V>>,
    spec: Option<&SortSpec>,
    descriptor: &ColumnDescriptor<V>,
) -> std::result::Result<Vec<Group<V>>, ConfigError> {
    groups
        .into_iter()
        .map(|group| {
            Ok(Group {
                rows: sort::sort(group.rows, spec, descriptor)?,
                ..group
            })
        })
        .collect()
}

/// Rows retained across all groups, collapsed or not.
pub fn row_count<V>(groups: &[Group<V>]) -> usize {
    groups.iter().map(Group::len).sum()
}
