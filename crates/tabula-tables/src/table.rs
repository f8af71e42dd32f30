//! Table controller
//!
//! A [`Table`] owns its columns, reads sorting, batching and selection state
//! from a [`TableRequest`] on [`Table::update`] and renders the current batch
//! of rows as an HTML table.

use crate::batch::BatchProvider;
use crate::column::{BoundColumn, Column, ColumnConfig, ColumnContext, SortKey};
use crate::error::{Result, TableError};
use crate::header::{ColumnHeader, HeaderContext, PlainHeader, SortingHeader};
use crate::html::{class_attr, join_classes};
use crate::request::TableRequest;
use crate::settings::TableSettings;
use crate::values::Values;
use std::collections::HashSet;
use tabula_batching::Batch;

/// Adjusts the CSS class of a body cell: `(column id, item, class) -> class`
pub type HighlightFn<R> = Box<dyn Fn(&str, &R, Option<String>) -> Option<String>>;

/// One cell of a table row
///
/// Cells swallowed by the colspan of a preceding cell have no column and
/// render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
	column: Option<usize>,
	colspan: usize,
}

impl Cell {
	/// Returns the index of the column rendering this cell
	pub fn column(&self) -> Option<usize> {
		self.column
	}

	/// Returns the colspan of this cell (`0` for a plain cell)
	pub fn colspan(&self) -> usize {
		self.colspan
	}

	/// Returns true if a preceding cell spans over this one
	pub fn is_spanned(&self) -> bool {
		self.column.is_none()
	}
}

/// One row of a table: an item and one cell per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	item: usize,
	cells: Vec<Cell>,
}

impl Row {
	/// Returns the index of the row item in the table values
	pub fn item_index(&self) -> usize {
		self.item
	}

	/// Returns the cells of this row in column order
	pub fn cells(&self) -> &[Cell] {
		&self.cells
	}
}

/// A sortable, batched HTML table
///
/// # Example
///
/// ```rust
/// use tabula_tables::column::FieldColumn;
/// use tabula_tables::values::SequenceValues;
/// use tabula_tables::{Table, TableRequest};
///
/// let values = SequenceValues::new(vec![("zero", 0), ("one", 1), ("two", 2)]);
/// let mut table = Table::builder(values)
///     .column("title", FieldColumn::text("Title", |row: &(&str, i32)| row.0.to_string()))
///     .build()
///     .unwrap();
///
/// table.update(&TableRequest::new("http://localhost/table")).unwrap();
///
/// let html = table.render();
/// assert!(html.starts_with("<table>"));
/// assert!(html.contains("<td class=\"sorted-on ascending\">one</td>"));
/// ```
pub struct Table<R> {
	values: Box<dyn Values<R>>,
	settings: TableSettings,
	columns: Vec<BoundColumn<R>>,
	header: Box<dyn ColumnHeader>,
	highlight: Option<HighlightFn<R>>,
	batch_provider: BatchProvider,
	request: TableRequest,
	items: Vec<R>,
	rows: Vec<Row>,
	batch: Option<Batch<Row>>,
	selected: Vec<usize>,
	sort_on: Option<usize>,
	sort_order: String,
	batch_start: usize,
	batch_size: usize,
}

impl<R: 'static> Table<R> {
	/// Creates a builder for a table showing the items of `values`
	pub fn builder(values: impl Values<R> + 'static) -> TableBuilder<R> {
		TableBuilder::new(values)
	}
}

impl<R> Table<R> {
	/// Reads the table state from `request` and prepares the rows
	///
	/// Request parameters are read under the table prefix:
	/// `{prefix}-batchStart`, `{prefix}-batchSize`, `{prefix}-sortOn` and
	/// `{prefix}-sortOrder`. Unusable values fall back to the settings.
	///
	/// # Errors
	///
	/// Returns [`TableError::ColspanOverflow`] when a cell spans past the last
	/// column and [`TableError::Batch`] when the rows cannot be batched.
	pub fn update(&mut self, request: &TableRequest) -> Result<()> {
		self.request = request.clone();
		self.selected.clear();
		self.batch = None;

		self.batch_size = self.request_batch_size();
		self.batch_start = self.request_usize("batchStart", self.settings.batch_start);
		self.sort_order = self
			.request
			.get_non_empty(&self.param_key("sortOrder"))
			.map_or_else(|| self.settings.sort_order.clone(), str::to_string);

		self.order_columns();
		self.sort_on = self.resolve_sort_on();

		self.items = self.values.values();
		self.update_columns();
		self.rows = self.set_up_rows()?;
		self.sort_rows();
		self.batch_rows()?;

		tracing::debug!(
			prefix = %self.settings.prefix,
			rows = self.items.len(),
			sort_on = ?self.sort_on,
			sort_order = %self.sort_order,
			batched = self.batch.is_some(),
			"updated table"
		);
		Ok(())
	}

	fn param_key(&self, name: &str) -> String {
		format!("{}-{name}", self.settings.prefix)
	}

	fn request_usize(&self, name: &str, default: usize) -> usize {
		let key = self.param_key(name);
		let Some(value) = self.request.get_non_empty(&key) else {
			return default;
		};
		match value.parse::<usize>() {
			Ok(parsed) => parsed,
			Err(error) => {
				tracing::warn!(%key, value, %error, default, "invalid request parameter, using default");
				default
			}
		}
	}

	fn request_batch_size(&self) -> usize {
		let default = self.settings.batch_size;
		match self.request_usize("batchSize", default) {
			0 => {
				tracing::warn!(default, "batch size must be greater than zero, using default");
				default
			}
			size => size,
		}
	}

	/// Resolves the sort column to an index
	///
	/// Both column ids (`{prefix}-{name}-{index}`) and bare indices end in the
	/// column index.
	fn resolve_sort_on(&self) -> Option<usize> {
		let count = self.columns.len();
		let key = self.param_key("sortOn");
		let Some(value) = self.request.get_non_empty(&key) else {
			return self
				.settings
				.sort_on
				.map(|index| if index < count { index } else { 0 });
		};
		let index = value
			.rsplit('-')
			.next()
			.and_then(|index| index.parse::<usize>().ok());
		match index {
			Some(index) if index < count => Some(index),
			_ => {
				tracing::warn!(%key, value, "unknown sort column, sorting on the first column");
				Some(0)
			}
		}
	}

	fn order_columns(&mut self) {
		self.columns.sort_by_key(|column| column.weight());
		let prefix = &self.settings.prefix;
		for (index, column) in self.columns.iter_mut().enumerate() {
			column.bind(prefix, index);
		}
		tracing::debug!(
			columns = ?self.columns.iter().map(BoundColumn::id).collect::<Vec<_>>(),
			"ordered table columns"
		);
	}

	fn update_columns(&mut self) {
		let mut selected = None;
		for column in &mut self.columns {
			let id = column.id().to_string();
			let ctx = ColumnContext {
				id: &id,
				prefix: &self.settings.prefix,
				request: &self.request,
			};
			if let Some(indices) = column.column_mut().update(&ctx, &self.items) {
				selected = Some(indices);
			}
		}
		if let Some(selected) = selected {
			self.selected = selected;
		}
	}

	fn set_up_rows(&self) -> Result<Vec<Row>> {
		self.items
			.iter()
			.enumerate()
			.map(|(index, item)| self.set_up_row(index, item))
			.collect()
	}

	fn set_up_row(&self, item_index: usize, item: &R) -> Result<Row> {
		let count = self.columns.len();
		let mut cells = Vec::with_capacity(count);
		let mut spanned = 0;
		for (index, column) in self.columns.iter().enumerate() {
			if spanned > 0 {
				spanned -= 1;
				cells.push(Cell {
					column: None,
					colspan: 0,
				});
				continue;
			}
			let colspan = column.colspan(item);
			if index + colspan > count {
				return Err(TableError::ColspanOverflow {
					column: column.name().to_string(),
				});
			}
			spanned = colspan.saturating_sub(1);
			cells.push(Cell {
				column: Some(index),
				colspan,
			});
		}
		Ok(Row {
			item: item_index,
			cells,
		})
	}

	fn sort_key(&self, row: &Row, sort_on: usize) -> SortKey {
		match row.cells.get(sort_on).and_then(|cell| cell.column) {
			Some(index) => {
				let column = &self.columns[index];
				column.sort_key(&self.items[row.item], &self.column_context(column))
			}
			None => SortKey::Empty,
		}
	}

	fn sort_rows(&mut self) {
		let Some(sort_on) = self.sort_on else {
			return;
		};
		if self.rows.is_empty() || self.columns.is_empty() {
			return;
		}
		let rows = std::mem::take(&mut self.rows);
		let mut keyed: Vec<(SortKey, Row)> = rows
			.into_iter()
			.map(|row| (self.sort_key(&row, sort_on), row))
			.collect();
		keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
		self.rows = keyed.into_iter().map(|(_, row)| row).collect();
		if self.settings.is_reverse_order(&self.sort_order) {
			self.rows.reverse();
		}
	}

	fn batch_rows(&mut self) -> Result<()> {
		if self.rows.len() > self.settings.start_batching_at {
			let rows = std::mem::take(&mut self.rows);
			self.batch = Some(Batch::clamped(rows, self.batch_start, self.batch_size)?);
		}
		Ok(())
	}

	fn column_context<'a>(&'a self, column: &'a BoundColumn<R>) -> ColumnContext<'a> {
		ColumnContext {
			id: column.id(),
			prefix: &self.settings.prefix,
			request: &self.request,
		}
	}

	/// Returns the table settings
	pub fn settings(&self) -> &TableSettings {
		&self.settings
	}

	/// Returns the request of the last update
	pub fn request(&self) -> &TableRequest {
		&self.request
	}

	/// Returns the columns ordered by weight
	pub fn columns(&self) -> &[BoundColumn<R>] {
		&self.columns
	}

	/// Returns the column registered under `name`
	pub fn column_by_name(&self, name: &str) -> Option<&BoundColumn<R>> {
		self.columns.iter().find(|column| column.name() == name)
	}

	/// Returns the position of the column with `id`
	pub fn column_index_by_id(&self, id: &str) -> Option<usize> {
		self.columns.iter().position(|column| column.id() == id)
	}

	/// Returns all items of the last update in their natural order
	pub fn items(&self) -> &[R] {
		&self.items
	}

	/// Returns the item shown in `row`
	pub fn item(&self, row: &Row) -> Option<&R> {
		self.items.get(row.item)
	}

	/// Returns the rows of the current batch, or all rows of an unbatched
	/// table
	pub fn rows(&self) -> &[Row] {
		match &self.batch {
			Some(batch) => batch.items(),
			None => &self.rows,
		}
	}

	/// Returns the batch of rows, `None` when the table is not batched
	pub fn batch(&self) -> Option<&Batch<Row>> {
		self.batch.as_ref()
	}

	/// Returns the selected items
	pub fn selected_items(&self) -> Vec<&R> {
		self.selected
			.iter()
			.filter_map(|index| self.items.get(*index))
			.collect()
	}

	/// Returns true if the item of `row` is selected
	pub fn is_selected_row(&self, row: &Row) -> bool {
		self.selected.contains(&row.item)
	}

	/// Returns the index of the sort column, `None` when rows are not sorted
	pub fn sort_on(&self) -> Option<usize> {
		self.sort_on
	}

	/// Returns the sort order
	pub fn sort_order(&self) -> &str {
		&self.sort_order
	}

	/// Returns the requested offset of the first shown row
	pub fn batch_start(&self) -> usize {
		self.batch_start
	}

	/// Returns the number of rows per batch
	pub fn batch_size(&self) -> usize {
		self.batch_size
	}

	/// Renders the batch navigation, or an empty string when the table is not
	/// batched
	///
	/// # Errors
	///
	/// Propagates [`TableError::Batch`] from the batch provider.
	pub fn render_batch(&self) -> Result<String> {
		match &self.batch {
			Some(batch) => self.batch_provider.render(batch, &self.request),
			None => Ok(String::new()),
		}
	}

	/// Renders the table
	pub fn render(&self) -> String {
		self.render_table()
	}

	/// Renders the table, or an empty string for a table without columns
	pub fn render_table(&self) -> String {
		if self.columns.is_empty() {
			return String::new();
		}
		format!(
			"<table{}>{}{}\n</table>",
			self.css_class("table", None),
			self.render_head(),
			self.render_body()
		)
	}

	/// Renders the `thead` element
	pub fn render_head(&self) -> String {
		format!(
			"\n  <thead{}>{}\n  </thead>",
			self.css_class("thead", None),
			self.render_head_row()
		)
	}

	fn render_head_row(&self) -> String {
		let cells: String = self
			.columns
			.iter()
			.map(|column| self.render_head_cell(column))
			.collect();
		format!("\n    <tr{}>{}\n    </tr>", self.css_class("tr", None), cells)
	}

	/// Renders the header cell of `column`
	pub fn render_head_cell(&self, column: &BoundColumn<R>) -> String {
		let css = self.sort_class(column, column.css_class("th").map(str::to_string));
		let content = column.render_head_cell().unwrap_or_else(|| {
			self.header.render(&HeaderContext {
				header: column.header(),
				column_id: column.id(),
				column_index: column.index(),
				prefix: &self.settings.prefix,
				sort_on: self.sort_on,
				sort_order: &self.sort_order,
				reverse_sort_order_names: &self.settings.reverse_sort_order_names,
				request: &self.request,
			})
		});
		format!("\n      <th{}>{}</th>", self.css_class("th", css.as_deref()), content)
	}

	/// Renders the `tbody` element
	pub fn render_body(&self) -> String {
		format!(
			"\n  <tbody{}>{}\n  </tbody>",
			self.css_class("tbody", None),
			self.render_rows()
		)
	}

	fn render_rows(&self) -> String {
		let even_odd = [&self.settings.css_class_even, &self.settings.css_class_odd];
		self.rows()
			.iter()
			.enumerate()
			.map(|(index, row)| self.render_row(row, even_odd[index % 2]))
			.collect()
	}

	/// Renders `row` with the row class `css_class`
	pub fn render_row(&self, row: &Row, css_class: &str) -> String {
		let mut css = Some(css_class.to_string()).filter(|class| !class.is_empty());
		if self.is_selected_row(row) {
			css = join_classes(Some(self.settings.css_class_selected.as_str()), css.as_deref());
		}
		let cells: String = row
			.cells
			.iter()
			.map(|cell| self.render_cell(row, cell))
			.collect();
		format!(
			"\n    <tr{}>{}\n    </tr>",
			self.css_class("tr", css.as_deref()),
			cells
		)
	}

	/// Renders one body cell of `row`
	pub fn render_cell(&self, row: &Row, cell: &Cell) -> String {
		let (Some(index), Some(item)) = (cell.column, self.item(row)) else {
			return String::new();
		};
		let column = &self.columns[index];
		let mut css = column.css_class("td").map(str::to_string);
		if let Some(highlight) = &self.highlight {
			css = highlight(column.id(), item, css);
		}
		let css = self.sort_class(column, css);
		let colspan = if cell.colspan > 0 {
			format!(" colspan=\"{}\"", cell.colspan)
		} else {
			String::new()
		};
		format!(
			"\n      <td{}{}>{}</td>",
			self.css_class("td", css.as_deref()),
			colspan,
			column.render_cell(item, &self.column_context(column))
		)
	}

	/// Appends the sort marker to `css` when `column` is the sort column
	fn sort_class(&self, column: &BoundColumn<R>, css: Option<String>) -> Option<String> {
		match self.settings.css_class_sorted_on.as_deref() {
			Some(sorted_on) if !sorted_on.is_empty() && self.sort_on == Some(column.index()) => {
				let marker = format!("{sorted_on} {}", self.sort_order);
				join_classes(css.as_deref(), Some(marker.as_str()))
			}
			_ => css,
		}
	}

	/// Renders the class attribute of `element`: `extra` followed by the
	/// table-level class of the element
	pub fn css_class(&self, element: &str, extra: Option<&str>) -> String {
		let table_class = self.settings.css_classes.get(element).map(String::as_str);
		class_attr(join_classes(extra, table_class).as_deref())
	}
}

impl<R> std::fmt::Debug for Table<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Table")
			.field("prefix", &self.settings.prefix)
			.field(
				"columns",
				&self.columns.iter().map(BoundColumn::id).collect::<Vec<_>>(),
			)
			.field("rows", &self.rows().len())
			.field("sort_on", &self.sort_on)
			.field("sort_order", &self.sort_order)
			.finish_non_exhaustive()
	}
}

/// Builder for [`Table`]
pub struct TableBuilder<R> {
	values: Box<dyn Values<R>>,
	settings: TableSettings,
	columns: Vec<BoundColumn<R>>,
	header: Option<Box<dyn ColumnHeader>>,
	highlight: Option<HighlightFn<R>>,
	batch_provider: Option<BatchProvider>,
}

impl<R: 'static> TableBuilder<R> {
	fn new(values: impl Values<R> + 'static) -> Self {
		Self {
			values: Box::new(values),
			settings: TableSettings::default(),
			columns: Vec::new(),
			header: None,
			highlight: None,
			batch_provider: None,
		}
	}

	/// Sets the table settings
	pub fn settings(mut self, settings: TableSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Adds a column under `name`
	pub fn column(self, name: impl Into<String>, column: impl Column<R> + 'static) -> Self {
		self.column_with(name, column, ColumnConfig::new())
	}

	/// Adds a column under `name` with overrides
	pub fn column_with(
		mut self,
		name: impl Into<String>,
		column: impl Column<R> + 'static,
		config: ColumnConfig<R>,
	) -> Self {
		self.columns
			.push(BoundColumn::new(name.into(), Box::new(column), config));
		self
	}

	/// Sets the header renderer used for every column
	pub fn header(mut self, header: impl ColumnHeader + 'static) -> Self {
		self.header = Some(Box::new(header));
		self
	}

	/// Renders headers as sort links
	pub fn sorting_headers(self) -> Self {
		self.header(SortingHeader::new())
	}

	/// Sets the hook adjusting the CSS class of body cells
	pub fn highlight(
		mut self,
		highlight: impl Fn(&str, &R, Option<String>) -> Option<String> + 'static,
	) -> Self {
		self.highlight = Some(Box::new(highlight));
		self
	}

	/// Replaces the batch navigation renderer
	pub fn batch_provider(mut self, batch_provider: BatchProvider) -> Self {
		self.batch_provider = Some(batch_provider);
		self
	}

	/// Builds the table
	///
	/// # Errors
	///
	/// Returns [`TableError::Settings`] for invalid settings and
	/// [`TableError::DuplicateColumn`] when two columns share a name.
	pub fn build(self) -> Result<Table<R>> {
		self.settings.validate()?;

		let mut names = HashSet::new();
		for column in &self.columns {
			if !names.insert(column.name()) {
				return Err(TableError::DuplicateColumn(column.name().to_string()));
			}
		}

		let batch_provider = self.batch_provider.unwrap_or_else(|| {
			BatchProvider::new(self.settings.prefix.clone(), self.settings.batch.clone())
		});
		let mut table = Table {
			values: self.values,
			header: self.header.unwrap_or_else(|| Box::new(PlainHeader)),
			highlight: self.highlight,
			columns: self.columns,
			batch_provider,
			request: TableRequest::default(),
			items: Vec::new(),
			rows: Vec::new(),
			batch: None,
			selected: Vec::new(),
			sort_on: self.settings.sort_on,
			sort_order: self.settings.sort_order.clone(),
			batch_start: self.settings.batch_start,
			batch_size: self.settings.batch_size,
			settings: self.settings,
		};
		table.order_columns();
		Ok(table)
	}
}

impl<R> std::fmt::Debug for TableBuilder<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableBuilder")
			.field("settings", &self.settings)
			.field("columns", &self.columns.iter().map(BoundColumn::name).collect::<Vec<_>>())
			.finish_non_exhaustive()
	}
}
