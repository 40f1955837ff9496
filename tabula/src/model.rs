//! Caller-side table state.
//!
//! [`TableModel`] holds the state a surrounding component owns (data, sort,
//! collapse flags, observed width) and re-derives the whole render plan from
//! it with the pure functions of this crate. Every mutation validates the
//! new state before committing it, so a rejected event leaves the model
//! untouched.

use crate::column::ColumnRegistry;
use crate::config::TableConfig;
use crate::error::{ConfigError, Result};
use crate::group::{self, Dataset, Group};
use crate::layout::{self, LayoutMode};
use crate::plan::{self, RenderPlan};
use crate::sort::{SortDirection, SortSpec};
use crate::value::CellValue;

/// State of one table.
#[derive(Debug, Clone)]
pub struct TableModel<V> {
    registry: ColumnRegistry<V>,
    config: TableConfig,
    /// Partitioned data in ingestion order, carrying collapse flags.
    source: Vec<Group<V>>,
    /// `source` after group and row ordering.
    view: Vec<Group<V>>,
    sort: Option<SortSpec>,
    group_sort: SortDirection,
    width: Option<u16>,
}

impl<V: CellValue + Clone> TableModel<V> {
    /// Create a table over `data`.
    pub fn new(registry: ColumnRegistry<V>, data: Dataset<V>, config: TableConfig) -> Result<Self> {
        let source = group::partition(data);
        let mut model = Self {
            registry,
            config,
            view: Vec::new(),
            source,
            sort: None,
            group_sort: SortDirection::Ascending,
            width: None,
        };
        model.view = model.derive(None, model.group_sort)?;
        Ok(model)
    }

    pub fn registry(&self) -> &ColumnRegistry<V> {
        &self.registry
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Groups in render order.
    pub fn groups(&self) -> &[Group<V>] {
        &self.view
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn group_sort(&self) -> SortDirection {
        self.group_sort
    }

    /// Replace the data. Collapse state starts over.
    pub fn set_data(&mut self, data: Dataset<V>) -> Result<()> {
        let previous = std::mem::replace(&mut self.source, group::partition(data));
        match self.derive(self.sort.as_ref(), self.group_sort) {
            Ok(view) => {
                self.view = view;
                Ok(())
            }
            Err(e) => {
                self.source = previous;
                Err(e)
            }
        }
    }

    /// Set or clear the active sort.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) -> Result<()> {
        self.view = self.derive(sort.as_ref(), self.group_sort)?;
        self.sort = sort;
        Ok(())
    }

    /// Handle a header click on `key`.
    ///
    /// Returns the new sort spec.
    pub fn toggle_sort(&mut self, key: &str) -> Result<SortSpec> {
        let next = SortSpec::toggled(self.sort.as_ref(), key);
        self.set_sort(Some(next.clone()))?;
        Ok(next)
    }

    /// Back to ingestion order within groups.
    pub fn clear_sort(&mut self) -> Result<()> {
        self.set_sort(None)
    }

    /// Set the direction groups are ordered in when group sorting is on.
    pub fn set_group_sort(&mut self, direction: SortDirection) -> Result<()> {
        self.view = self.derive(self.sort.as_ref(), direction)?;
        self.group_sort = direction;
        Ok(())
    }

    /// Collapse or expand a group.
    pub fn set_group_collapsed(&mut self, group_index: usize, collapsed: bool) -> Result<()> {
        if !self.config.are_groups_collapsible {
            return Err(ConfigError::CollapseDisabled.into());
        }
        let source = group::set_collapsed(self.source.clone(), group_index, collapsed)?;
        let previous = std::mem::replace(&mut self.source, source);
        match self.derive(self.sort.as_ref(), self.group_sort) {
            Ok(view) => {
                self.view = view;
                Ok(())
            }
            Err(e) => {
                self.source = previous;
                Err(e)
            }
        }
    }

    /// Flip a group's collapse state. Returns the new state.
    pub fn toggle_group(&mut self, group_index: usize) -> Result<bool> {
        let collapsed = self
            .source
            .iter()
            .find(|g| g.index == group_index)
            .is_some_and(|g| g.collapsed);
        self.set_group_collapsed(group_index, !collapsed)?;
        Ok(!collapsed)
    }

    /// Record a new container width.
    ///
    /// Returns `true` when the layout mode changed.
    pub fn observe_width(&mut self, width: u16) -> bool {
        let before = self.layout_mode();
        self.width = Some(width);
        let after = self.layout_mode();
        if before != after {
            log::debug!("[model] width {} switched layout {:?} -> {:?}", width, before, after);
        }
        before != after
    }

    /// Layout mode at the last observed width. Full until a width is observed.
    pub fn layout_mode(&self) -> LayoutMode {
        match self.width {
            Some(width) => layout::resolve_layout(width, self.config.min_width_breakpoint),
            None => LayoutMode::Full,
        }
    }

    /// Derive the render plan for the current state.
    ///
    /// Until a width is observed, columns are sized by
    /// [`layout::natural_width`].
    pub fn plan(&self) -> RenderPlan<'_, V> {
        let mode = self.layout_mode();
        let width = self.width.unwrap_or_else(|| layout::natural_width(&self.registry));

        RenderPlan {
            mode,
            columns: layout::resolve_columns(&self.registry, mode, width, self.sort.as_ref()),
            sort: self.sort.as_ref(),
            entries: plan::plan(&self.view, &self.registry, mode, self.config.group_header_position),
        }
    }

    fn derive(&self, sort: Option<&SortSpec>, group_sort: SortDirection) -> Result<Vec<Group<V>>> {
        let mut groups = self.source.clone();

        if self.config.sort_groups && groups.iter().any(|g| !g.is_implicit()) {
            let label = self.registry.group_label().ok_or(ConfigError::MissingGroupLabel)?;
            let spec = SortSpec::new(&label.key, group_sort);
            groups = group::sort_groups(groups, Some(&spec), label)?;
        }

        if let Some(spec) = sort {
            let column = self.registry.sort_column(spec)?;
            groups = group::sort_within(groups, Some(spec), column)?;
        }

        Ok(groups)
    }
}
