use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ColumnOptions;

/// A key used to pull a column's value out of a row's raw data.
///
/// Mirrors the two shapes the grid widget accepts on the wire: the name of a
/// field in an object row, or a position in an array row.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DataKey {
    Property(String),
    Index(u64),
}

impl From<String> for DataKey {
    fn from(value: String) -> Self {
        DataKey::Property(value)
    }
}

impl From<&str> for DataKey {
    fn from(value: &str) -> Self {
        DataKey::Property(value.to_owned())
    }
}

impl From<u64> for DataKey {
    fn from(value: u64) -> Self {
        DataKey::Index(value)
    }
}

/// The fields shared by every column variant.
///
/// Each concrete column embeds one of these and exposes it through
/// [`GridColumn::base`](super::GridColumn::base); the variant itself only
/// contributes its discriminator. A freshly constructed value has every
/// mutable field at its zero value (`false`/[`None`]/empty) until
/// [`apply_defaults`](Self::apply_defaults) establishes the documented
/// baseline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnBase {
    /// The property of the source entity this column reads. Set once at
    /// construction; there is no setter.
    property: Option<String>,

    /// Where to find this column's value in a row's data source. Defaults to
    /// `property` once defaults are applied.
    data_key: Option<DataKey>,

    /// Whether filtering may consider this column.
    searchable: bool,

    /// Whether this column can be sorted on.
    sortable: bool,

    /// Whether this column is displayed.
    visible: bool,

    /// The column title, if any.
    title: Option<String>,

    /// An opaque rendering directive for a downstream formatter. Stored and
    /// emitted verbatim, never interpreted here.
    renderer: Option<Value>,

    /// Class given to each cell in this column.
    css_class: String,

    /// Substituted whenever the resolved data for a cell is absent or null.
    default_content: Option<String>,

    /// A CSS width for the column. Any CSS value is accepted, unvalidated.
    width: Option<String>,
}

impl ColumnBase {
    /// Creates a base for the given property, stored verbatim. `None` is the
    /// shape used by action or computed columns with no backing entity field;
    /// an empty or malformed property name is accepted and is the caller's
    /// concern.
    pub fn new<'a, P: Into<Option<&'a str>>>(property: P) -> Self {
        Self {
            property: property.into().map(ToOwned::to_owned),
            ..Default::default()
        }
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn data_key(&self) -> Option<&DataKey> {
        self.data_key.as_ref()
    }

    pub fn searchable(&self) -> bool {
        self.searchable
    }

    pub fn sortable(&self) -> bool {
        self.sortable
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn renderer(&self) -> Option<&Value> {
        self.renderer.as_ref()
    }

    pub fn css_class(&self) -> &str {
        &self.css_class
    }

    pub fn default_content(&self) -> Option<&str> {
        self.default_content.as_deref()
    }

    pub fn width(&self) -> Option<&str> {
        self.width.as_deref()
    }

    pub fn set_data_key(&mut self, data_key: Option<DataKey>) -> &mut Self {
        self.data_key = data_key;
        self
    }

    pub fn set_searchable(&mut self, searchable: bool) -> &mut Self {
        self.searchable = searchable;
        self
    }

    pub fn set_sortable(&mut self, sortable: bool) -> &mut Self {
        self.sortable = sortable;
        self
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self
    }

    pub fn set_title(&mut self, title: Option<String>) -> &mut Self {
        self.title = title;
        self
    }

    pub fn set_renderer(&mut self, renderer: Option<Value>) -> &mut Self {
        self.renderer = renderer;
        self
    }

    pub fn set_css_class(&mut self, css_class: String) -> &mut Self {
        self.css_class = css_class;
        self
    }

    pub fn set_default_content(&mut self, default_content: Option<String>) -> &mut Self {
        self.default_content = default_content;
        self
    }

    pub fn set_width(&mut self, width: Option<String>) -> &mut Self {
        self.width = width;
        self
    }

    /// Unconditionally resets every mutable field to its baseline: the data
    /// key follows the property, the three flags are on, everything else is
    /// cleared.
    ///
    /// Callers that want "options override defaults" semantics must apply
    /// defaults *before* [`apply_options`](Self::apply_options); running them
    /// the other way round clobbers the overrides. Nothing here enforces the
    /// order. [`ColumnBuilder`](crate::builder::ColumnBuilder) always
    /// sequences the two correctly.
    pub fn apply_defaults(&mut self) {
        self.data_key = self.property.clone().map(DataKey::Property);
        self.searchable = true;
        self.sortable = true;
        self.visible = true;
        self.title = None;
        self.renderer = None;
        self.css_class = String::new();
        self.default_content = None;
        self.width = None;
    }

    /// Applies every option that is present, leaving absent ones untouched.
    ///
    /// Presence is what counts, not truthiness: an explicit `false` or empty
    /// string is applied like any other value. The eight applications are
    /// independent, so repeated calls compose key-by-key.
    pub fn apply_options(&mut self, options: &ColumnOptions) -> &mut Self {
        if let Some(searchable) = options.searchable {
            self.set_searchable(searchable);
        }
        if let Some(sortable) = options.sortable {
            self.set_sortable(sortable);
        }
        if let Some(visible) = options.visible {
            self.set_visible(visible);
        }
        if let Some(title) = &options.title {
            self.set_title(Some(title.clone()));
        }
        if let Some(render) = &options.render {
            self.set_renderer(Some(render.clone()));
        }
        if let Some(class) = &options.class {
            self.set_css_class(class.clone());
        }
        if let Some(default_content) = &options.default_content {
            self.set_default_content(Some(default_content.clone()));
        }
        if let Some(width) = &options.width {
            self.set_width(Some(width.clone()));
        }

        self
    }
}
