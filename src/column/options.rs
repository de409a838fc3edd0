use serde::Deserialize;
use serde_json::Value;

/// The eight recognized column options, every one wrapped in [`Option`] so
/// that presence is distinguishable from absence.
///
/// [`apply_options`](super::ColumnBase::apply_options) only touches the
/// fields that are `Some`; an explicit `false` or empty string still counts
/// as present. Keys a host declares beyond these eight are not an error,
/// they are simply not options (see
/// [`ColumnConfig`](crate::config::ColumnConfig)).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ColumnOptions {
    /// Enable or disable filtering on this column.
    pub searchable: Option<bool>,

    /// Enable or disable sorting on this column.
    pub sortable: Option<bool>,

    /// Enable or disable display of this column.
    pub visible: Option<bool>,

    /// The column title.
    pub title: Option<String>,

    /// The opaque rendering directive.
    pub render: Option<Value>,

    /// Class given to each cell in this column.
    pub class: Option<String>,

    /// Content substituted for absent or null cell data.
    #[serde(rename = "default")]
    pub default_content: Option<String>,

    /// A CSS width for the column.
    pub width: Option<String>,
}
