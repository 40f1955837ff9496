//! Table configuration.

use serde::{Deserialize, Serialize};

/// Where a group's header entry sits relative to its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupHeaderPosition {
    #[default]
    Above,
    Below,
}

/// Per-table configuration, passed by value on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Header placement for explicit groups.
    pub group_header_position: GroupHeaderPosition,

    /// Whether group headers may toggle collapse state.
    pub are_groups_collapsible: bool,

    /// Width below which the table switches to compact mode.
    /// Zero keeps the table in full mode at any width.
    pub min_width_breakpoint: u16,

    /// Whether groups are ordered by their label column.
    pub sort_groups: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            group_header_position: GroupHeaderPosition::Above,
            are_groups_collapsible: true,
            min_width_breakpoint: 0,
            sort_groups: false,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group header placement.
    pub fn group_header_position(mut self, position: GroupHeaderPosition) -> Self {
        self.group_header_position = position;
        self
    }

    /// Allow or forbid collapse toggling.
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.are_groups_collapsible = collapsible;
        self
    }

    /// Set the compact-mode breakpoint.
    pub fn min_width_breakpoint(mut self, width: u16) -> Self {
        self.min_width_breakpoint = width;
        self
    }

    /// Order groups by their label column.
    pub fn sort_groups(mut self) -> Self {
        self.sort_groups = true;
        self
    }
}
