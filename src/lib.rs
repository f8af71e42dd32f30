//! # Tabula
//!
//! Sortable, batched HTML tables for Rust web applications.
//!
//! A table takes its row items from a values provider, renders them through
//! a set of named columns and reads sorting, batching and selection state
//! from the request query string. Long tables are cut into batches; the batch
//! navigation shows the first page, a window around the current page and the
//! last page, with spacers for the pages in between.
//!
//! ## Crates
//!
//! - [`batching`] - page lists and batch window reduction (`tabula-batching`)
//! - [`tables`] - table controller, columns, headers and rendering
//!   (`tabula-tables`)
//!
//! ## Feature Flags
//!
//! - `chrono` (default) - date and time columns
//!
//! ## Quick Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct Document {
//!     name: String,
//!     pages: i64,
//! }
//!
//! impl Named for Document {
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! let documents: Vec<Document> = (1..=120)
//!     .map(|n| Document { name: format!("doc-{n:03}"), pages: n })
//!     .collect();
//!
//! let mut table = Table::builder(SequenceValues::new(documents))
//!     .column("name", NameColumn::new())
//!     .column(
//!         "pages",
//!         FieldColumn::text("Pages", |doc: &Document| doc.pages.to_string())
//!             .sort_by(|doc: &Document| SortKey::Number(doc.pages))
//!             .weight(1),
//!     )
//!     .sorting_headers()
//!     .build()
//!     .unwrap();
//!
//! let request = TableRequest::from_query(
//!     "http://localhost/documents",
//!     "table-sortOn=table-pages-1&table-sortOrder=descending&table-batchStart=50",
//! );
//! table.update(&request).unwrap();
//!
//! assert_eq!(table.rows().len(), 50);
//! assert!(table.render().contains("<td>doc-070</td>"));
//! assert!(table.render_batch().unwrap().contains("class=\"current\">2</a>"));
//! ```

pub use tabula_batching as batching;
pub use tabula_tables as tables;

pub use tabula_batching::{Batch, BatchError, Page, WindowItem, first_neighbours_last};
pub use tabula_tables::{
	BatchProvider, BatchSettings, Column, ColumnConfig, SettingsError, Table, TableError,
	TableRequest, TableSettings,
};

/// Prelude module for convenient imports
///
/// Import everything needed to build and render a table:
///
/// ```rust
/// use tabula::prelude::*;
/// ```
pub mod prelude {
	// Batching
	pub use crate::batching::{Batch, Page, WindowItem, first_neighbours_last};

	// Tables
	pub use crate::tables::column::{
		CheckBoxColumn, ColumnContext, EmailColumn, FieldColumn, LinkColumn, NameColumn,
		RadioColumn, SelectedItemColumn, SortKey,
	};
	#[cfg(feature = "chrono")]
	pub use crate::tables::column::{DateFormat, DateTimeColumn};
	pub use crate::tables::{
		BatchProvider, BatchSettings, Column, ColumnConfig, ColumnHeader, ContainerValues,
		Named, PlainHeader, SequenceValues, SortingHeader, Table, TableRequest, TableSettings,
		Values,
	};

	// Errors
	pub use crate::batching::BatchError;
	pub use crate::tables::{SettingsError, TableError};
}
