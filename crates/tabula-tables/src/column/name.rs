//! Name column

use super::base::{Column, ColumnContext};
use crate::html::escape;
use crate::values::Named;

/// Column rendering the item name
#[derive(Debug, Clone)]
pub struct NameColumn {
	header: String,
}

impl NameColumn {
	/// Creates a name column with the header `Name`
	pub fn new() -> Self {
		Self {
			header: "Name".to_string(),
		}
	}
}

impl Default for NameColumn {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Named> Column<R> for NameColumn {
	fn header(&self) -> &str {
		&self.header
	}

	fn render_cell(&self, item: &R, _ctx: &ColumnContext<'_>) -> String {
		escape(item.name()).into_owned()
	}
}
