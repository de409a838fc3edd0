//! Assembling columns into the ordered collection a grid serves.

use std::borrow::Cow;

use itertools::Itertools;
use serde_json::Value;

use crate::column::{ColumnKind, ColumnOptions, GridColumn};
use crate::config::ColumnsConfig;
use crate::render::{resolve_cell, ColumnDef, RowData};

/// Accumulates column descriptors in declaration order.
///
/// [`add`](ColumnBuilder::add) runs the full lifecycle for each descriptor:
/// instantiate the variant, establish its defaults, then apply the caller's
/// overrides. Columns that were configured elsewhere can be appended as-is
/// with [`add_column`](ColumnBuilder::add_column).
#[derive(Debug, Default)]
pub struct ColumnBuilder {
    columns: Vec<Box<dyn GridColumn>>,
}

impl ColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one column from declarations parsed out of a config file,
    /// in declaration order.
    pub fn from_config(config: &ColumnsConfig) -> Self {
        let mut builder = Self::new();

        for entry in &config.columns {
            #[cfg(feature = "log")]
            for key in entry.unknown_keys() {
                log::warn!("ignoring unrecognized column key '{key}'");
            }

            builder.add(entry.property.as_deref(), entry.kind, &entry.options);
        }

        builder
    }

    /// Creates a `kind` column for `property`, gives it the baseline
    /// defaults, and overrides whichever of them `options` carries.
    pub fn add(
        &mut self, property: Option<&str>, kind: ColumnKind, options: &ColumnOptions,
    ) -> &mut Self {
        let mut column = kind.instantiate(property);
        column.apply_defaults();
        column.apply_options(options);

        #[cfg(feature = "log")]
        log::debug!("added {kind} column reading {property:?}");

        self.columns.push(column);
        self
    }

    /// Appends an already-configured column without touching its state.
    pub fn add_column(&mut self, column: Box<dyn GridColumn>) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn build(self) -> ColumnSet {
        ColumnSet {
            columns: self.columns,
        }
    }
}

/// The finished, ordered column collection for one grid.
#[derive(Debug, Default)]
pub struct ColumnSet {
    columns: Vec<Box<dyn GridColumn>>,
}

impl ColumnSet {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn GridColumn> {
        self.columns.get(index).map(|column| &**column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn GridColumn> + '_ {
        self.columns.iter().map(|column| &**column)
    }

    /// The wire definitions of every column, in grid order.
    pub fn definitions(&self) -> Vec<ColumnDef> {
        self.columns.iter().map(|column| column.definition()).collect()
    }

    /// Resolves one raw row into a cell per column, in grid order.
    pub fn resolve_row<'r, R>(&self, row: &'r R) -> Vec<Cow<'r, Value>>
    where
        R: RowData + ?Sized,
    {
        self.columns
            .iter()
            .map(|column| resolve_cell(column.base(), row))
            .collect()
    }

    /// The positions of the columns a global search may scan.
    pub fn searchable_positions(&self) -> Vec<usize> {
        self.columns
            .iter()
            .positions(|column| column.searchable())
            .collect()
    }

    /// The positions of the columns ordering requests may target.
    pub fn sortable_positions(&self) -> Vec<usize> {
        self.columns
            .iter()
            .positions(|column| column.sortable())
            .collect()
    }

    /// The positions of the columns the widget should actually draw.
    pub fn visible_positions(&self) -> Vec<usize> {
        self.columns
            .iter()
            .positions(|column| column.visible())
            .collect()
    }
}
