//! Column descriptors and the ordered column registry.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::STACKED_COLUMN_KEY;
use crate::sort::SortSpec;

/// Custom ordering over two cell values of one column.
///
/// Must be a strict weak ordering. Shared read-only, so a registry can be
/// handed to several call sites at once.
pub type Comparator<V> = Arc<dyn Fn(&V, &V) -> Ordering + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Opaque reference to a presentation component.
///
/// The engine only carries these through to the plan; the renderer resolves
/// them against its own registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RendererRef(pub String);

impl RendererRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-column component overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Renderers {
    pub cell: Option<RendererRef>,
    pub row: Option<RendererRef>,
    pub header: Option<RendererRef>,
    pub group: Option<RendererRef>,
}

/// Column configuration.
///
/// # Examples
///
/// ```
/// use tabula::column::ColumnDescriptor;
///
/// let fruit = ColumnDescriptor::<String>::new("fruit").name("Fruit").width(12).sortable();
/// assert_eq!(fruit.display_name(), "Fruit");
/// ```
pub struct ColumnDescriptor<V> {
    /// Unique key within a registry.
    pub key: String,
    /// Header text. Falls back to the key.
    pub name: Option<String>,
    /// Explicit width in character cells.
    pub width: Option<u16>,
    pub align: Alignment,
    pub sortable: bool,
    /// Custom ordering. The default comparator is used when absent.
    pub comparator: Option<Comparator<V>>,
    /// Whether this column labels the groups of grouped data.
    pub group_label: bool,
    pub renderers: Renderers,
}

impl<V> ColumnDescriptor<V> {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            width: None,
            align: Alignment::Left,
            sortable: false,
            comparator: None,
            group_label: false,
            renderers: Renderers::default(),
        }
    }

    /// Set the header text.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Order this column with a custom comparator.
    pub fn comparator(mut self, cmp: impl Fn(&V, &V) -> Ordering + Send + Sync + 'static) -> Self {
        self.comparator = Some(Arc::new(cmp));
        self
    }

    /// Mark this column as the group label.
    pub fn group_label(mut self) -> Self {
        self.group_label = true;
        self
    }

    pub fn renderers(mut self, renderers: Renderers) -> Self {
        self.renderers = renderers;
        self
    }

    /// Header text, defaulting to the key.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.key)
    }
}

impl<V> Clone for ColumnDescriptor<V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            name: self.name.clone(),
            width: self.width,
            align: self.align,
            sortable: self.sortable,
            comparator: self.comparator.clone(),
            group_label: self.group_label,
            renderers: self.renderers.clone(),
        }
    }
}

impl<V> fmt::Debug for ColumnDescriptor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .field("group_label", &self.group_label)
            .field("renderers", &self.renderers)
            .finish()
    }
}

/// Columns in display order.
#[derive(Debug, Clone)]
pub struct ColumnRegistry<V> {
    columns: Vec<ColumnDescriptor<V>>,
}

impl<V> ColumnRegistry<V> {
    /// Normalize a key → descriptor mapping into display order.
    ///
    /// The iteration order of `columns` becomes the display order. The
    /// compact-mode column key is reserved.
    pub fn normalize<K>(
        columns: impl IntoIterator<Item = (K, ColumnDescriptor<V>)>,
    ) -> Result<Self, ConfigError>
    where
        K: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();

        for (key, descriptor) in columns {
            let key = key.into();
            if key != descriptor.key {
                return Err(ConfigError::key_mismatch(key, descriptor.key));
            }
            if descriptor.sortable && descriptor.group_label {
                return Err(ConfigError::SortableGroupLabel { key });
            }
            if key == STACKED_COLUMN_KEY {
                return Err(ConfigError::ReservedKey { key });
            }
            if !seen.insert(key.clone()) {
                return Err(ConfigError::DuplicateColumn { key });
            }
            ordered.push(descriptor);
        }

        log::trace!("[column] normalized {} columns", ordered.len());
        Ok(Self { columns: ordered })
    }

    /// Build a registry from descriptors, keyed by their own keys.
    pub fn from_columns(columns: impl IntoIterator<Item = ColumnDescriptor<V>>) -> Result<Self, ConfigError> {
        Self::normalize(columns.into_iter().map(|c| (c.key.clone(), c)))
    }

    pub fn get(&self, key: &str) -> Option<&ColumnDescriptor<V>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Display position of a column.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor<V>> {
        self.columns.iter()
    }

    pub fn columns(&self) -> &[ColumnDescriptor<V>] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The first column marked as group label.
    pub fn group_label(&self) -> Option<&ColumnDescriptor<V>> {
        self.columns.iter().find(|c| c.group_label)
    }

    /// Descriptor for a sort spec, validated as sortable.
    pub fn sort_column(&self, spec: &SortSpec) -> Result<&ColumnDescriptor<V>, ConfigError> {
        let descriptor = self
            .get(&spec.key)
            .ok_or_else(|| ConfigError::unknown_column(&spec.key))?;
        if !descriptor.sortable {
            return Err(ConfigError::not_sortable(&spec.key));
        }
        Ok(descriptor)
    }
}

impl<'a, V> IntoIterator for &'a ColumnRegistry<V> {
    type Item = &'a ColumnDescriptor<V>;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
