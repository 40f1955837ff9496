//! Error types for table configuration and state transitions.

/// Malformed or contradictory column/sort configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The key does not name any column in the registry.
    #[error("unknown column '{key}'")]
    UnknownColumn { key: String },

    /// A sort was requested on a column that is not sortable.
    #[error("column '{key}' is not sortable")]
    NotSortable { key: String },

    /// A column was declared both sortable and as the group label.
    #[error("column '{key}' is a group label and cannot be sortable")]
    SortableGroupLabel { key: String },

    /// The same key appeared twice in a column mapping.
    #[error("duplicate column '{key}'")]
    DuplicateColumn { key: String },

    /// The key is taken by the synthesized compact-mode column.
    #[error("column key '{key}' is reserved")]
    ReservedKey { key: String },

    /// A mapping entry or sort spec named a different column than the descriptor.
    #[error("expected column '{expected}', got '{actual}'")]
    KeyMismatch { expected: String, actual: String },

    /// Group ordering was requested through a column that is not a group label.
    #[error("column '{key}' is not a group label")]
    NotGroupLabel { key: String },

    /// Group sorting is enabled but no column is marked as the group label.
    #[error("group sorting requires a group label column")]
    MissingGroupLabel,

    /// The synthetic group of flat data has no collapse state.
    #[error("group {index} is not collapsible")]
    NotCollapsible { index: usize },

    /// Collapse toggling was dispatched while collapsible groups are disabled.
    #[error("groups are not collapsible in this table")]
    CollapseDisabled,
}

impl ConfigError {
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn { key: key.into() }
    }

    pub fn not_sortable(key: impl Into<String>) -> Self {
        Self::NotSortable { key: key.into() }
    }

    pub fn key_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::KeyMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// An out-of-range group index passed to collapse toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("group index {index} out of range ({len} groups)")]
pub struct IndexError {
    /// The requested group index.
    pub index: usize,
    /// Number of groups at the time of the call.
    pub len: usize,
}

/// Any error raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

pub type Result<T> = std::result::Result<T, TableError>;
