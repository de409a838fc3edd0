use std::fmt;

use serde::{de::Error, Deserialize, Serialize};

use super::{ActionColumn, DataColumn, GridColumn, VirtualColumn};

/// Identifies which concrete column variant a descriptor is.
///
/// The set is closed: a declaration naming anything else fails when it is
/// deserialized, so "unimplemented discriminator" cannot reach runtime.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ColumnKind {
    /// A plain column backed by one field of the row data.
    Data,
    /// A column carrying row actions rather than data.
    Action,
    /// A computed column whose property has no counterpart in the backing
    /// store.
    Virtual,
}

impl ColumnKind {
    /// The canonical name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Data => "data",
            ColumnKind::Action => "action",
            ColumnKind::Virtual => "virtual",
        }
    }

    /// A hack to get a const default.
    pub const fn const_default() -> Self {
        Self::Data
    }

    /// Builds an unconfigured descriptor of this kind. Action columns never
    /// read from the row, so any given property is not carried over to them.
    pub(crate) fn instantiate(self, property: Option<&str>) -> Box<dyn GridColumn> {
        match self {
            ColumnKind::Data => Box::new(DataColumn::new(property)),
            ColumnKind::Action => Box::new(ActionColumn::new()),
            ColumnKind::Virtual => Box::new(VirtualColumn::new(property.unwrap_or_default())),
        }
    }
}

impl Default for ColumnKind {
    fn default() -> Self {
        Self::const_default()
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColumnKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?.to_lowercase();
        match value.as_str() {
            "data" | "column" => Ok(ColumnKind::Data),
            "action" => Ok(ColumnKind::Action),
            "virtual" | "computed" => Ok(ColumnKind::Virtual),
            _ => Err(Error::custom(format!(
                "'{value}' is not a known column kind"
            ))),
        }
    }
}

impl Serialize for ColumnKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
