//! Creation-time column overrides and columns bound to a table

use super::base::{Column, ColumnContext, SortKey};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Replacement renderer for body cells
pub type CellRenderer<R> = Box<dyn Fn(&R) -> String>;

/// Replacement renderer for the header cell
pub type HeadCellRenderer = Box<dyn Fn() -> String>;

/// Overrides applied to a column when it is added to a table
///
/// Every field left at `None` keeps the column's own behavior.
///
/// # Example
///
/// ```rust
/// use tabula_tables::column::ColumnConfig;
///
/// struct Item {
///     title: String,
/// }
///
/// let config = ColumnConfig::<Item>::new()
///     .cell_renderer(|item: &Item| format!("{} item", item.title))
///     .head_cell_renderer(|| "My items".to_string())
///     .weight(1);
/// ```
pub struct ColumnConfig<R> {
	cell_renderer: Option<CellRenderer<R>>,
	head_cell_renderer: Option<HeadCellRenderer>,
	colspan: Option<usize>,
	weight: Option<i32>,
	header: Option<String>,
	css_classes: Option<BTreeMap<String, String>>,
}

impl<R> Default for ColumnConfig<R> {
	fn default() -> Self {
		Self {
			cell_renderer: None,
			head_cell_renderer: None,
			colspan: None,
			weight: None,
			header: None,
			css_classes: None,
		}
	}
}

impl<R> ColumnConfig<R> {
	/// Creates a configuration without overrides
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the body cell renderer
	pub fn cell_renderer(mut self, renderer: impl Fn(&R) -> String + 'static) -> Self {
		self.cell_renderer = Some(Box::new(renderer));
		self
	}

	/// Replaces the header cell renderer
	pub fn head_cell_renderer(mut self, renderer: impl Fn() -> String + 'static) -> Self {
		self.head_cell_renderer = Some(Box::new(renderer));
		self
	}

	/// Overrides the colspan of every cell
	pub fn colspan(mut self, colspan: usize) -> Self {
		self.colspan = Some(colspan);
		self
	}

	/// Overrides the column weight
	pub fn weight(mut self, weight: i32) -> Self {
		self.weight = Some(weight);
		self
	}

	/// Overrides the header text
	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = Some(header.into());
		self
	}

	/// Overrides the CSS classes by element name
	pub fn css_classes(mut self, css_classes: BTreeMap<String, String>) -> Self {
		self.css_classes = Some(css_classes);
		self
	}
}

impl<R> Debug for ColumnConfig<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ColumnConfig")
			.field("cell_renderer", &self.cell_renderer.is_some())
			.field("head_cell_renderer", &self.head_cell_renderer.is_some())
			.field("colspan", &self.colspan)
			.field("weight", &self.weight)
			.field("header", &self.header)
			.field("css_classes", &self.css_classes)
			.finish()
	}
}

/// A column registered with a table under a name
///
/// The table assigns the id and position when it orders its columns.
#[derive(Debug)]
pub struct BoundColumn<R> {
	name: String,
	id: String,
	index: usize,
	column: Box<dyn Column<R>>,
	config: ColumnConfig<R>,
}

impl<R> BoundColumn<R> {
	pub(crate) fn new(name: String, column: Box<dyn Column<R>>, config: ColumnConfig<R>) -> Self {
		Self {
			name,
			id: String::new(),
			index: 0,
			column,
			config,
		}
	}

	pub(crate) fn bind(&mut self, prefix: &str, index: usize) {
		self.index = index;
		self.id = format!("{prefix}-{}-{index}", self.name);
	}

	pub(crate) fn column_mut(&mut self) -> &mut dyn Column<R> {
		self.column.as_mut()
	}

	/// Returns the name the column was registered under
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the column id (`{prefix}-{name}-{index}`)
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the position of the column in the table
	pub fn index(&self) -> usize {
		self.index
	}

	/// Returns the header text
	pub fn header(&self) -> &str {
		self.config
			.header
			.as_deref()
			.unwrap_or_else(|| self.column.header())
	}

	/// Returns the column weight
	pub fn weight(&self) -> i32 {
		self.config.weight.unwrap_or_else(|| self.column.weight())
	}

	/// Returns the colspan of the cell for `item`
	pub fn colspan(&self, item: &R) -> usize {
		self.config
			.colspan
			.unwrap_or_else(|| self.column.colspan(item))
	}

	/// Returns the CSS class for `element`
	pub fn css_class(&self, element: &str) -> Option<&str> {
		match &self.config.css_classes {
			Some(css_classes) => css_classes.get(element).map(String::as_str),
			None => self.column.css_class(element),
		}
	}

	/// Returns the key rows are sorted by
	pub fn sort_key(&self, item: &R, ctx: &ColumnContext<'_>) -> SortKey {
		self.column
			.sort_key(item, ctx)
			.unwrap_or_else(|| SortKey::Text(self.render_cell(item, ctx)))
	}

	/// Returns the header cell content when it is not left to the header
	/// renderer
	pub fn render_head_cell(&self) -> Option<String> {
		match &self.config.head_cell_renderer {
			Some(renderer) => Some(renderer()),
			None => self.column.render_head_cell(),
		}
	}

	/// Renders the cell content for `item`
	pub fn render_cell(&self, item: &R, ctx: &ColumnContext<'_>) -> String {
		match &self.config.cell_renderer {
			Some(renderer) => renderer(item),
			None => self.column.render_cell(item, ctx),
		}
	}
}
