//! Tests for the responsive layout resolver.

use tabula::column::{ColumnDescriptor, ColumnRegistry};
use tabula::layout::{self, LayoutMode, STACKED_COLUMN_KEY};
use tabula::sort::{SortDirection, SortSpec};

type Col = ColumnDescriptor<&'static str>;

fn registry() -> ColumnRegistry<&'static str> {
    ColumnRegistry::from_columns([
        Col::new("fruit").name("Fruit").sortable(),
        Col::new("colors").name("Colors").width(10),
        Col::new("numbers").name("Numbers"),
    ])
    .unwrap()
}

// ============================================================================
// Breakpoint
// ============================================================================

#[test]
fn test_below_breakpoint_is_compact() {
    assert_eq!(layout::resolve_layout(300, 600), LayoutMode::Compact);
}

#[test]
fn test_at_or_above_breakpoint_is_full() {
    assert_eq!(layout::resolve_layout(600, 600), LayoutMode::Full);
    assert_eq!(layout::resolve_layout(1200, 600), LayoutMode::Full);
}

#[test]
fn test_zero_breakpoint_never_compact() {
    assert_eq!(layout::resolve_layout(0, 0), LayoutMode::Full);
}

// ============================================================================
// Column Widths
// ============================================================================

#[test]
fn test_full_mode_splits_remaining_width() {
    let columns = layout::resolve_columns(&registry(), LayoutMode::Full, 41, None);

    let widths: Vec<u16> = columns.iter().map(|c| c.width).collect();
    // 41 - 10 fixed = 31 over two flex columns, leftover cell to the first
    assert_eq!(widths, [16, 10, 15]);

    let xs: Vec<u16> = columns.iter().map(|c| c.x).collect();
    assert_eq!(xs, [0, 16, 26]);
    assert_eq!(widths.iter().sum::<u16>(), 41);
}

#[test]
fn test_full_mode_fixed_wider_than_container() {
    let columns = layout::resolve_columns(&registry(), LayoutMode::Full, 6, None);
    let widths: Vec<u16> = columns.iter().map(|c| c.width).collect();
    assert_eq!(widths, [0, 10, 0]);
}

#[test]
fn test_natural_width_uses_header_lengths() {
    let registry = registry();
    // Fruit + 10 fixed + Numbers
    assert_eq!(layout::natural_width(&registry), 22);

    let columns = layout::resolve_columns(&registry, LayoutMode::Full, layout::natural_width(&registry), None);
    assert!(columns.iter().all(|c| c.width > 0));
}

#[test]
fn test_headers_and_sort_indicator() {
    let spec = SortSpec::descending("fruit");
    let columns = layout::resolve_columns(&registry(), LayoutMode::Full, 80, Some(&spec));

    assert_eq!(columns[0].header, "Fruit");
    assert_eq!(columns[0].sort, Some(SortDirection::Descending));
    assert_eq!(columns[1].sort, None);
}

#[test]
fn test_compact_mode_single_stacked_column() {
    let columns = layout::resolve_columns(&registry(), LayoutMode::Compact, 300, None);

    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].key, STACKED_COLUMN_KEY);
    assert_eq!(columns[0].width, 300);
    assert_eq!(columns[0].fields, ["fruit", "colors", "numbers"]);
}
