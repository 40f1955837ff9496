//! Responsive layout: breakpoint mode and column geometry.

use serde::{Deserialize, Serialize};

use crate::column::{Alignment, ColumnRegistry, RendererRef};
use crate::sort::{SortDirection, SortSpec};

/// Key of the single synthesized column used in compact mode.
pub const STACKED_COLUMN_KEY: &str = "stacked";

/// How the table is laid out at the current width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// All columns side by side.
    #[default]
    Full,
    /// One column; each row is a stack of label/value fields.
    Compact,
}

/// Decide the layout mode for an observed container width.
///
/// Compact strictly below the breakpoint, full at or above it. There is no
/// hysteresis: callers debounce resize notifications themselves.
pub fn resolve_layout(observed_width: u16, min_width_breakpoint: u16) -> LayoutMode {
    if observed_width < min_width_breakpoint {
        LayoutMode::Compact
    } else {
        LayoutMode::Full
    }
}

/// Width that fits every column without an observed container width.
///
/// Explicit widths count as declared. A column without one counts as its
/// header length, at least one cell.
pub fn natural_width<V>(registry: &ColumnRegistry<V>) -> u16 {
    registry
        .iter()
        .map(|c| {
            c.width.unwrap_or_else(|| {
                let header = c.display_name().chars().count().max(1);
                u16::try_from(header).unwrap_or(u16::MAX)
            })
        })
        .fold(0, u16::saturating_add)
}

/// A column as it will be painted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub key: String,
    pub header: String,
    /// Left edge, in character cells from the table origin.
    pub x: u16,
    pub width: u16,
    pub align: Alignment,
    /// Sort indicator for the header, if this column is the active sort.
    pub sort: Option<SortDirection>,
    pub renderer: Option<RendererRef>,
    /// Column keys stacked into the synthesized compact column.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Compute effective columns and widths for a layout mode.
///
/// In full mode, explicit widths are honored and the remaining width is
/// split evenly between the columns without one; leftover cells go to the
/// leftmost of those. Compact mode yields a single stacked column spanning
/// the whole width.
pub fn resolve_columns<V>(
    registry: &ColumnRegistry<V>,
    mode: LayoutMode,
    observed_width: u16,
    sort: Option<&SortSpec>,
) -> Vec<ResolvedColumn> {
    if mode == LayoutMode::Compact {
        return vec![ResolvedColumn {
            key: STACKED_COLUMN_KEY.to_string(),
            header: String::new(),
            x: 0,
            width: observed_width,
            align: Alignment::Left,
            sort: None,
            renderer: None,
            fields: registry.iter().map(|c| c.key.clone()).collect(),
        }];
    }

    let fixed_total = registry
        .iter()
        .filter_map(|c| c.width)
        .fold(0u16, u16::saturating_add);
    let flex_count = u16::try_from(registry.iter().filter(|c| c.width.is_none()).count()).unwrap_or(u16::MAX);

    let remaining = observed_width.saturating_sub(fixed_total);
    let (flex_size, mut leftover) = if flex_count > 0 {
        (remaining / flex_count, remaining % flex_count)
    } else {
        (0, 0)
    };

    let mut x = 0u16;
    let mut resolved = Vec::with_capacity(registry.len());
    for column in registry {
        let width = match column.width {
            Some(w) => w,
            None if leftover > 0 => {
                leftover -= 1;
                flex_size + 1
            }
            None => flex_size,
        };

        resolved.push(ResolvedColumn {
            key: column.key.clone(),
            header: column.display_name().to_string(),
            x,
            width,
            align: column.align,
            sort: sort.filter(|s| s.key == column.key).map(|s| s.direction),
            renderer: column.renderers.header.clone(),
            fields: Vec::new(),
        });
        x = x.saturating_add(width);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_full() {
        assert_eq!(resolve_layout(600, 600), LayoutMode::Full);
        assert_eq!(resolve_layout(599, 600), LayoutMode::Compact);
        assert_eq!(resolve_layout(0, 0), LayoutMode::Full);
    }

    #[test]
    fn test_flex_columns_beyond_u16_saturate() {
        let registry = ColumnRegistry::<String>::from_columns(
            (0..70_000).map(|i| crate::column::ColumnDescriptor::new(format!("c{i}"))),
        )
        .unwrap();
        let columns = resolve_columns(&registry, LayoutMode::Full, 5000, None);
        assert_eq!(columns.len(), 70_000);
        let total: u32 = columns.iter().map(|c| u32::from(c.width)).sum();
        assert_eq!(total, 5000);
        assert!(columns.iter().all(|c| c.width <= 1));
    }
}
