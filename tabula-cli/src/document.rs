//! JSON table documents.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tabula::{
    Alignment, ColumnDescriptor, ColumnRegistry, Dataset, Renderers, Row, SortDirection, SortSpec, TableConfig,
    TableModel,
};

use crate::error::CliError;

/// A column as written in a document.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDoc {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub group_label: bool,
    #[serde(default)]
    pub renderers: Renderers,
}

impl ColumnDoc {
    fn into_descriptor(self) -> ColumnDescriptor<Value> {
        ColumnDescriptor {
            name: self.name,
            width: self.width,
            align: self.align,
            sortable: self.sortable,
            group_label: self.group_label,
            renderers: self.renderers,
            ..ColumnDescriptor::new(self.key)
        }
    }
}

/// Table data: an array of row objects or an array of such arrays.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DataDoc {
    Flat(Vec<Map<String, Value>>),
    Grouped(Vec<Vec<Map<String, Value>>>),
}

impl From<DataDoc> for Dataset<Value> {
    fn from(data: DataDoc) -> Self {
        match data {
            DataDoc::Flat(rows) => Dataset::Flat(rows.into_iter().map(Row::new).collect()),
            DataDoc::Grouped(groups) => Dataset::Grouped(
                groups
                    .into_iter()
                    .map(|rows| rows.into_iter().map(Row::new).collect())
                    .collect(),
            ),
        }
    }
}

/// A complete table: columns, data, configuration and caller state.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDocument {
    pub columns: Vec<ColumnDoc>,
    pub data: DataDoc,
    #[serde(default)]
    pub config: TableConfig,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    #[serde(default)]
    pub group_sort: Option<SortDirection>,
    /// Indices of groups to start collapsed.
    #[serde(default)]
    pub collapsed: Vec<usize>,
    #[serde(default)]
    pub width: Option<u16>,
}

impl TableDocument {
    pub fn from_json(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a document from a file, or stdin for `None` and `-`.
    pub fn read(path: Option<&Path>) -> Result<Self, CliError> {
        let text = match path {
            Some(path) if path != Path::new("-") => {
                std::fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => std::io::read_to_string(std::io::stdin()).map_err(CliError::Stdin)?,
        };
        Self::from_json(&text)
    }

    /// Replay the document's state onto a fresh model.
    pub fn into_model(self) -> Result<TableModel<Value>, CliError> {
        let registry = ColumnRegistry::from_columns(self.columns.into_iter().map(ColumnDoc::into_descriptor))?;
        let mut model = TableModel::new(registry, self.data.into(), self.config)?;

        if let Some(direction) = self.group_sort {
            model.set_group_sort(direction)?;
        }
        model.set_sort(self.sort)?;
        for index in self.collapsed {
            model.set_group_collapsed(index, true)?;
        }
        if let Some(width) = self.width {
            model.observe_width(width);
        }

        log::info!(
            "loaded table: {} columns, {} groups",
            model.registry().len(),
            model.groups().len()
        );
        Ok(model)
    }
}

/// Render a model's current plan as JSON.
pub fn render(model: &TableModel<Value>, pretty: bool) -> Result<String, CliError> {
    let plan = model.plan();
    let json = if pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string(&plan)?
    };
    Ok(json)
}
