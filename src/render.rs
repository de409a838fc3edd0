//! The read side of a column collection: JSON wire definitions for the grid
//! widget, and per-row cell resolution for response assembly.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::column::{ColumnBase, DataKey};

/// The JSON definition of one column, serialized with the legacy field names
/// the grid widget reads (`mData`, `bSearchable`, ...).
///
/// Unset optional fields serialize as `null` rather than being omitted,
/// matching what the widget is fed by the reference server implementation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnDef {
    #[serde(rename = "mData")]
    pub data: Option<DataKey>,

    #[serde(rename = "bSearchable")]
    pub searchable: bool,

    #[serde(rename = "bSortable")]
    pub sortable: bool,

    #[serde(rename = "bVisible")]
    pub visible: bool,

    #[serde(rename = "sTitle")]
    pub title: Option<String>,

    /// The opaque rendering directive, passed through untouched.
    #[serde(rename = "mRender")]
    pub render: Option<Value>,

    #[serde(rename = "sClass")]
    pub class: String,

    #[serde(rename = "sDefaultContent")]
    pub default_content: Option<String>,

    #[serde(rename = "sWidth")]
    pub width: Option<String>,
}

impl From<&ColumnBase> for ColumnDef {
    fn from(base: &ColumnBase) -> Self {
        Self {
            data: base.data_key().cloned(),
            searchable: base.searchable(),
            sortable: base.sortable(),
            visible: base.visible(),
            title: base.title().map(ToOwned::to_owned),
            render: base.renderer().cloned(),
            class: base.css_class().to_owned(),
            default_content: base.default_content().map(ToOwned::to_owned),
            width: base.width().map(ToOwned::to_owned),
        }
    }
}

/// A source of raw row data that cells can be resolved against.
pub trait RowData {
    /// Returns the field of this row that `key` points at, if there is one.
    fn field(&self, key: &DataKey) -> Option<&Value>;
}

impl RowData for Value {
    fn field(&self, key: &DataKey) -> Option<&Value> {
        match key {
            DataKey::Property(name) => self.as_object().and_then(|fields| fields.get(name)),
            DataKey::Index(index) => self.as_array().and_then(|cells| cells.get(*index as usize)),
        }
    }
}

impl RowData for Map<String, Value> {
    fn field(&self, key: &DataKey) -> Option<&Value> {
        match key {
            DataKey::Property(name) => self.get(name),
            DataKey::Index(_) => None,
        }
    }
}

impl RowData for IndexMap<String, Value> {
    fn field(&self, key: &DataKey) -> Option<&Value> {
        match key {
            DataKey::Property(name) => self.get(name),
            DataKey::Index(_) => None,
        }
    }
}

/// Resolves the value a column shows for one row.
///
/// A cell falls back to the column's default content (or `null` if it has
/// none) in all of these cases: the column has no data key, the row has no
/// field under the key, or the field is explicitly `null`. Resolution is
/// total; a row of the wrong shape for the key is just a miss, not an
/// error. The rendering directive is *not* applied here.
pub fn resolve_cell<'r, R>(column: &ColumnBase, row: &'r R) -> Cow<'r, Value>
where
    R: RowData + ?Sized,
{
    let found = column
        .data_key()
        .and_then(|key| row.field(key))
        .filter(|value| !value.is_null());

    match found {
        Some(value) => Cow::Borrowed(value),
        None => match column.default_content() {
            Some(content) => Cow::Owned(Value::String(content.to_owned())),
            None => Cow::Owned(Value::Null),
        },
    }
}
