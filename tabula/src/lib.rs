//! Tabular layout engine.
//!
//! Turns rows plus column metadata into an ordered, grouped, collapsible,
//! width-aware render plan. Painting the plan is left to the caller.
//!
//! Data flows one way per render: [`group::partition`] → [`sort::sort`] /
//! [`group::sort_groups`] → [`layout::resolve_layout`] → [`plan::plan`].
//! [`TableModel`] wires the steps together for callers that want to keep
//! their table state in one place.

pub mod column;
pub mod config;
pub mod error;
pub mod group;
pub mod layout;
pub mod model;
pub mod plan;
pub mod row;
pub mod sort;
pub mod value;

pub use column::{Alignment, ColumnDescriptor, ColumnRegistry, Comparator, RendererRef, Renderers};
pub use config::{GroupHeaderPosition, TableConfig};
pub use error::{ConfigError, IndexError, Result, TableError};
pub use group::{Dataset, Group, GroupKind};
pub use layout::{LayoutMode, ResolvedColumn};
pub use model::TableModel;
pub use plan::{Cell, CellPlanEntry, GroupHeaderEntry, RenderPlan, RowEntry, RowLayout};
pub use row::Row;
pub use sort::{SortDirection, SortSpec};
pub use value::CellValue;
