//! Column definitions
//!
//! A table is built from named columns. Every column implements [`Column`];
//! per-table overrides go into a [`ColumnConfig`] when the column is added.

mod base;
mod config;
#[cfg(feature = "chrono")]
mod datetime;
mod link;
mod name;
mod selection;

pub use base::{Column, ColumnContext, Extractor, FieldColumn, SortKey, SortKeyFn};
pub use config::{BoundColumn, CellRenderer, ColumnConfig, HeadCellRenderer};
#[cfg(feature = "chrono")]
pub use datetime::{DateFormat, DateTimeColumn, DateTimeFn};
pub use link::{AddressFn, EmailColumn, LinkColumn, UrlFn};
pub use name::NameColumn;
pub use selection::{CheckBoxColumn, RadioColumn, SelectedItemColumn};
