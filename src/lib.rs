//! Server-side column configuration for DataTables-style interactive grids.
//!
//! A grid served over the wire needs the server to know, per column, which
//! entity property it reads, whether it takes part in searching and ordering,
//! whether it is drawn at all, and how its header and cells are presented.
//! This crate models each column as a passive descriptor, assembles the
//! descriptors into an ordered [`ColumnSet`], and emits the JSON definitions
//! the grid widget consumes.
//!
//! ```
//! use datagrid::{ColumnBuilder, ColumnKind, ColumnOptions, GridColumn};
//!
//! let mut builder = ColumnBuilder::new();
//! builder
//!     .add(Some("name"), ColumnKind::Data, &ColumnOptions::default())
//!     .add(
//!         Some("age"),
//!         ColumnKind::Data,
//!         &ColumnOptions {
//!             title: Some("Age".to_owned()),
//!             sortable: Some(false),
//!             ..Default::default()
//!         },
//!     );
//! let columns = builder.build();
//!
//! assert_eq!(columns.len(), 2);
//! assert_eq!(columns.get(1).unwrap().title(), Some("Age"));
//! assert_eq!(columns.sortable_positions(), [0]);
//! ```
//!
//! Columns can equally be declared in a TOML file and built with
//! [`ColumnBuilder::from_config`]; see [`config`] for the file format.

pub mod utils {
    pub mod error;
    pub mod logging;
}
pub mod builder;
pub mod column;
pub mod config;
pub mod render;

pub use builder::{ColumnBuilder, ColumnSet};
pub use column::{
    ActionColumn, ColumnBase, ColumnKind, ColumnOptions, DataColumn, DataKey, GridColumn,
    VirtualColumn,
};
pub use config::{ColumnConfig, ColumnsConfig};
pub use render::{resolve_cell, ColumnDef, RowData};
pub use utils::error::{ConfigError, ConfigResult};
