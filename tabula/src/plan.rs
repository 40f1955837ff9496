//! Cell resolution: the ordered render plan.
//!
//! The plan is the exact render order. A renderer walks it front to back
//! and never re-derives sorting, grouping or collapse state.

use serde::Serialize;

use crate::column::{ColumnDescriptor, ColumnRegistry, RendererRef};
use crate::config::GroupHeaderPosition;
use crate::group::Group;
use crate::layout::{LayoutMode, ResolvedColumn};
use crate::row::Row;
use crate::sort::SortSpec;

/// One resolved cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell<'a, V> {
    pub key: &'a str,
    /// Column display name, used as the field label in compact mode.
    pub label: &'a str,
    pub value: Option<&'a V>,
    pub renderer: Option<&'a RendererRef>,
    /// Group label cells are hidden inside explicit groups; the header shows them.
    pub visible: bool,
}

/// Cells of a row entry, shaped by the layout mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "cells", rename_all = "lowercase")]
pub enum RowLayout<'a, V> {
    /// One cell per column, in display order.
    Columns(Vec<Cell<'a, V>>),
    /// A single synthesized column stacking every field.
    Stacked(Vec<Cell<'a, V>>),
}

impl<'a, V> RowLayout<'a, V> {
    pub fn cells(&self) -> &[Cell<'a, V>] {
        match self {
            RowLayout::Columns(cells) | RowLayout::Stacked(cells) => cells,
        }
    }

    /// Number of painted columns.
    pub fn column_count(&self) -> usize {
        match self {
            RowLayout::Columns(cells) => cells.len(),
            RowLayout::Stacked(_) => 1,
        }
    }
}

/// Header of an explicit group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupHeaderEntry<'a, V> {
    /// Position in the plan.
    pub position: usize,
    pub group_index: usize,
    /// The group label column's value in the group's first ingested row.
    pub label: Option<&'a V>,
    pub collapsed: bool,
    /// Rows held by the group, whether shown or not.
    pub row_count: usize,
    pub renderer: Option<&'a RendererRef>,
}

/// A data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowEntry<'a, V> {
    /// Position in the plan.
    pub position: usize,
    /// Contiguous row number across all visible groups.
    pub row_number: usize,
    pub group_index: usize,
    /// Position within the group.
    pub index: usize,
    /// Rows shown before this group; `row_number = index_offset + index`.
    pub index_offset: usize,
    pub renderer: Option<&'a RendererRef>,
    pub layout: RowLayout<'a, V>,
}

/// One unit of render output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CellPlanEntry<'a, V> {
    GroupHeader(GroupHeaderEntry<'a, V>),
    Row(RowEntry<'a, V>),
}

impl<'a, V> CellPlanEntry<'a, V> {
    pub fn position(&self) -> usize {
        match self {
            CellPlanEntry::GroupHeader(h) => h.position,
            CellPlanEntry::Row(r) => r.position,
        }
    }

    pub fn group_index(&self) -> usize {
        match self {
            CellPlanEntry::GroupHeader(h) => h.group_index,
            CellPlanEntry::Row(r) => r.group_index,
        }
    }

    pub fn as_row(&self) -> Option<&RowEntry<'a, V>> {
        match self {
            CellPlanEntry::Row(r) => Some(r),
            CellPlanEntry::GroupHeader(_) => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, CellPlanEntry::GroupHeader(_))
    }
}

/// Resolve groups into the ordered render plan.
///
/// Implicit groups contribute rows only. An explicit group contributes its
/// header (above or below its rows) and its rows; a collapsed one
/// contributes its header alone. An expanded group with no rows has a
/// header only if it has a label.
pub fn plan<'a, V>(
    groups: &'a [Group<V>],
    registry: &'a ColumnRegistry<V>,
    mode: LayoutMode,
    header_position: GroupHeaderPosition,
) -> Vec<CellPlanEntry<'a, V>> {
    let label_column = registry.group_label();
    let group_renderer = label_column
        .and_then(|c| c.renderers.group.as_ref())
        .or_else(|| registry.iter().find_map(|c| c.renderers.group.as_ref()));
    let row_renderer = registry.iter().find_map(|c| c.renderers.row.as_ref());

    let mut entries = Vec::new();
    let mut row_number = 0;

    for group in groups {
        let label = label_column.and_then(|c| group.label(&c.key));
        let has_header = !group.is_implicit() && (group.collapsed || !group.is_empty() || label.is_some());
        let mut header = has_header.then(|| GroupHeaderEntry {
            position: 0,
            group_index: group.index,
            label,
            collapsed: group.collapsed,
            row_count: group.len(),
            renderer: group_renderer,
        });

        if group.collapsed {
            push_header(&mut entries, header);
            continue;
        }

        if header_position == GroupHeaderPosition::Above {
            push_header(&mut entries, header.take());
        }

        let index_offset = row_number;
        for (index, row) in group.rows.iter().enumerate() {
            entries.push(CellPlanEntry::Row(RowEntry {
                position: entries.len(),
                row_number,
                group_index: group.index,
                index,
                index_offset,
                renderer: row_renderer,
                layout: resolve_row(row, registry, mode, !group.is_implicit()),
            }));
            row_number += 1;
        }

        // Already taken when placed above
        push_header(&mut entries, header);
    }

    log::trace!(
        "[plan] {} entries, {} rows, mode {:?}",
        entries.len(),
        row_number,
        mode
    );
    entries
}

fn push_header<'a, V>(entries: &mut Vec<CellPlanEntry<'a, V>>, header: Option<GroupHeaderEntry<'a, V>>) {
    if let Some(mut header) = header {
        header.position = entries.len();
        entries.push(CellPlanEntry::GroupHeader(header));
    }
}

fn resolve_row<'a, V>(
    row: &'a Row<V>,
    registry: &'a ColumnRegistry<V>,
    mode: LayoutMode,
    in_explicit_group: bool,
) -> RowLayout<'a, V> {
    let cells = registry
        .iter()
        .map(|column| resolve_cell(row, column, in_explicit_group))
        .collect();

    match mode {
        LayoutMode::Full => RowLayout::Columns(cells),
        LayoutMode::Compact => RowLayout::Stacked(cells),
    }
}

fn resolve_cell<'a, V>(row: &'a Row<V>, column: &'a ColumnDescriptor<V>, in_explicit_group: bool) -> Cell<'a, V> {
    Cell {
        key: &column.key,
        label: column.display_name(),
        value: row.get(&column.key),
        renderer: column.renderers.cell.as_ref(),
        visible: !(column.group_label && in_explicit_group),
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan<'a, V> {
    pub mode: LayoutMode,
    /// Column geometry at the observed width, or at the natural width of
    /// the columns when none has been observed.
    pub columns: Vec<ResolvedColumn>,
    pub sort: Option<&'a SortSpec>,
    pub entries: Vec<CellPlanEntry<'a, V>>,
}

impl<'a, V> RenderPlan<'a, V> {
    /// Row entries in render order.
    pub fn rows(&self) -> impl Iterator<Item = &RowEntry<'a, V>> {
        self.entries.iter().filter_map(CellPlanEntry::as_row)
    }
}
