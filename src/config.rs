//! TOML-backed column configuration.
//!
//! A config file declares the columns of one grid as an array of tables.
//! Keys the deserializer recognizes become typed fields; everything else is
//! kept verbatim so callers can surface typos instead of silently dropping
//! them.
//!
//! ```toml
//! [[columns]]
//! property = "name"
//! title = "Name"
//!
//! [[columns]]
//! property = "age"
//! sortable = false
//! width = "80px"
//!
//! [[columns]]
//! kind = "action"
//! default = ""
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::column::{ColumnKind, ColumnOptions};
use crate::utils::error::ConfigResult;

/// One `[[columns]]` entry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ColumnConfig {
    /// The entity property this column reads, if it reads one.
    pub property: Option<String>,

    /// Which column variant to build. Defaults to a plain data column.
    #[serde(default)]
    pub kind: ColumnKind,

    /// The recognized per-column overrides.
    #[serde(flatten)]
    pub options: ColumnOptions,

    /// Whatever keys were left over after the recognized ones were claimed.
    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

impl ColumnConfig {
    /// Returns the keys of this entry that nothing recognized.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.rest.keys().map(String::as_str)
    }
}

/// The column declarations for one grid.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ColumnsConfig {
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

impl ColumnsConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml_edit::de::from_str(contents)?)
    }

    /// Reads and parses a config file.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
