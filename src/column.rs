//! Column descriptors for a server-driven data table.

pub mod action;
pub mod base;
pub mod data;
pub mod kind;
pub mod options;
pub mod virtual_column;

use std::fmt;

pub use action::ActionColumn;
pub use base::{ColumnBase, DataKey};
pub use data::DataColumn;
pub use kind::ColumnKind;
pub use options::ColumnOptions;
pub use virtual_column::VirtualColumn;

use crate::render::ColumnDef;

/// The contract every column variant implements.
///
/// A variant embeds a [`ColumnBase`] holding the nine shared fields and
/// exposes it through [`base`](GridColumn::base)/[`base_mut`](GridColumn::base_mut);
/// the accessors, [`apply_defaults`](GridColumn::apply_defaults) and
/// [`apply_options`](GridColumn::apply_options) all read or write through
/// that base, so the only thing a variant supplies itself is its
/// [`kind`](GridColumn::kind) discriminator.
///
/// Descriptors are built and mutated by a single owner (normally a
/// [`ColumnBuilder`](crate::builder::ColumnBuilder) inside one
/// request/response cycle) and treated as read-only once handed to a
/// consumer. That hand-off convention is not enforced here.
pub trait GridColumn: fmt::Debug {
    /// The shared column fields.
    fn base(&self) -> &ColumnBase;

    fn base_mut(&mut self) -> &mut ColumnBase;

    /// Which concrete variant this descriptor is. Every variant reports its
    /// own; there is no provided default.
    fn kind(&self) -> ColumnKind;

    /// The property of the source entity this column reads, fixed at
    /// construction.
    fn property(&self) -> Option<&str> {
        self.base().property()
    }

    fn data_key(&self) -> Option<&DataKey> {
        self.base().data_key()
    }

    fn searchable(&self) -> bool {
        self.base().searchable()
    }

    fn sortable(&self) -> bool {
        self.base().sortable()
    }

    fn visible(&self) -> bool {
        self.base().visible()
    }

    fn title(&self) -> Option<&str> {
        self.base().title()
    }

    fn renderer(&self) -> Option<&serde_json::Value> {
        self.base().renderer()
    }

    fn css_class(&self) -> &str {
        self.base().css_class()
    }

    fn default_content(&self) -> Option<&str> {
        self.base().default_content()
    }

    fn width(&self) -> Option<&str> {
        self.base().width()
    }

    /// See [`ColumnBase::apply_defaults`].
    fn apply_defaults(&mut self) {
        self.base_mut().apply_defaults();
    }

    /// See [`ColumnBase::apply_options`].
    fn apply_options(&mut self, options: &ColumnOptions) {
        self.base_mut().apply_options(options);
    }

    /// The wire definition of this column, as the grid widget expects it.
    fn definition(&self) -> ColumnDef {
        ColumnDef::from(self.base())
    }
}
