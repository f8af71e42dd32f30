//! Sortable, batched HTML tables for Tabula
//!
//! A table renders the items of a [`Values`] provider as rows and a set of
//! named columns as cells. On every request the table reads its sorting,
//! batching and selection state from the [`TableRequest`], sorts the rows by
//! the sort column and cuts them into batches when there are many of them.
//!
//! # Features
//!
//! - **Columns**: field, name, checkbox, radio, link, e-mail, selected item
//!   and date/time columns, plus per-table overrides via [`ColumnConfig`]
//! - **Sorting**: `?{prefix}-sortOn=...&{prefix}-sortOrder=...`, with sort
//!   link headers
//! - **Batching**: `?{prefix}-batchStart=...&{prefix}-batchSize=...`, with a
//!   reduced page navigation strip
//! - **Settings**: TOML-loadable [`TableSettings`]
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Table] --> B[Columns]
//!     A --> C[Rows]
//!     A --> D[Values]
//!     A --> E[Headers]
//!     A --> F[BatchProvider]
//!     F --> G[tabula-batching]
//!     B --> H[FieldColumn]
//!     B --> I[CheckBoxColumn]
//!     B --> J[LinkColumn]
//! ```
//!
//! # Example
//!
//! ```rust
//! use tabula_tables::column::{CheckBoxColumn, FieldColumn};
//! use tabula_tables::values::SequenceValues;
//! use tabula_tables::{Table, TableRequest, TableSettings};
//!
//! let settings = TableSettings::from_toml_str("start_batching_at = 2\nbatch_size = 2").unwrap();
//! let values = SequenceValues::new(vec![
//!     "first".to_string(),
//!     "second".to_string(),
//!     "third".to_string(),
//! ]);
//! let mut table = Table::builder(values)
//!     .settings(settings)
//!     .column("name", FieldColumn::text("Name", |item: &String| item.clone()))
//!     .column("select", CheckBoxColumn::new())
//!     .sorting_headers()
//!     .build()
//!     .unwrap();
//!
//! table
//!     .update(&TableRequest::from_query(
//!         "http://localhost/items",
//!         "table-select-1-selectedItems=second",
//!     ))
//!     .unwrap();
//!
//! assert_eq!(table.rows().len(), 2);
//! assert_eq!(table.selected_items(), vec!["second"]);
//! assert!(table.render_batch().unwrap().contains("class=\"current first\">1</a>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod batch;
pub mod column;
pub mod error;
pub mod header;
pub mod html;
pub mod request;
pub mod settings;
pub mod table;
pub mod values;

// Re-exports for convenience
pub use batch::BatchProvider;
pub use column::{Column, ColumnConfig};
pub use error::{Result, SettingsError, TableError};
pub use header::{ColumnHeader, PlainHeader, SortingHeader};
pub use request::TableRequest;
pub use settings::{BatchSettings, TableSettings};
pub use table::{Cell, Row, Table, TableBuilder};
pub use values::{Container, ContainerValues, Named, SequenceValues, Values};
