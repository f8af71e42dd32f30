//! Base column trait and implementation

use crate::html::escape;
use crate::request::TableRequest;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Per-column view of the table state, handed to column callbacks
#[derive(Debug, Clone, Copy)]
pub struct ColumnContext<'a> {
	/// Column id (`{prefix}-{name}-{index}`)
	pub id: &'a str,
	/// Table prefix
	pub prefix: &'a str,
	/// The request the table is updated for
	pub request: &'a TableRequest,
}

/// Key used to order rows by a column
///
/// Keys of different kinds order by kind first (`Empty` < `Number` < `Text`
/// < `DateTime`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
	/// No value
	Empty,
	/// Integer value
	Number(i64),
	/// Text value
	Text(String),
	/// Date and time value
	#[cfg(feature = "chrono")]
	DateTime(chrono::NaiveDateTime),
}

impl From<i64> for SortKey {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

impl From<String> for SortKey {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for SortKey {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

/// Trait for table column definitions
///
/// A column renders one cell per row item plus its header cell. Every method
/// but [`Column::render_cell`] has a default, so simple columns only describe
/// how a cell looks.
pub trait Column<R>: Debug {
	/// Returns the header text for this column
	fn header(&self) -> &str {
		""
	}

	/// Returns the weight used to order columns (lighter columns first)
	fn weight(&self) -> i32 {
		0
	}

	/// Returns how many columns the cell for `item` spans
	///
	/// `0` and `1` both mean a plain cell; `0` renders no `colspan` attribute.
	fn colspan(&self, _item: &R) -> usize {
		0
	}

	/// Returns the CSS class for `element` (`th` or `td`)
	fn css_class(&self, _element: &str) -> Option<&str> {
		None
	}

	/// Prepares the column for rendering `items`
	///
	/// Columns that read a selection from the request return the indices of
	/// the selected items.
	fn update(&mut self, _ctx: &ColumnContext<'_>, _items: &[R]) -> Option<Vec<usize>> {
		None
	}

	/// Returns the key rows are sorted by
	///
	/// `None` sorts by the rendered cell text.
	fn sort_key(&self, _item: &R, _ctx: &ColumnContext<'_>) -> Option<SortKey> {
		None
	}

	/// Returns the content of the header cell
	///
	/// `None` lets the table's header renderer decide.
	fn render_head_cell(&self) -> Option<String> {
		None
	}

	/// Renders the cell content for `item`
	fn render_cell(&self, item: &R, ctx: &ColumnContext<'_>) -> String;
}

/// Extracts the (unescaped) text of a field from a row item
pub type Extractor<R> = Box<dyn Fn(&R) -> Option<String>>;

/// Extracts the sort key of a row item
pub type SortKeyFn<R> = Box<dyn Fn(&R) -> SortKey>;

/// A column showing one field of the row item
///
/// Missing values render the default value. Values are HTML-escaped.
///
/// # Example
///
/// ```rust
/// use tabula_tables::column::FieldColumn;
///
/// struct User {
///     name: String,
///     email: Option<String>,
/// }
///
/// let name_column = FieldColumn::text("User Name", |user: &User| user.name.clone());
/// let email_column = FieldColumn::new("Email", |user: &User| user.email.clone())
///     .default_value("n/a");
/// ```
pub struct FieldColumn<R> {
	header: String,
	extractor: Extractor<R>,
	default_value: String,
	sort_key: Option<SortKeyFn<R>>,
	weight: i32,
	css_classes: BTreeMap<String, String>,
}

impl<R: 'static> FieldColumn<R> {
	/// Creates a column reading an optional field
	pub fn new(header: impl Into<String>, extractor: impl Fn(&R) -> Option<String> + 'static) -> Self {
		Self {
			header: header.into(),
			extractor: Box::new(extractor),
			default_value: String::new(),
			sort_key: None,
			weight: 0,
			css_classes: BTreeMap::new(),
		}
	}

	/// Creates a column reading a field that is always present
	pub fn text(header: impl Into<String>, extractor: impl Fn(&R) -> String + 'static) -> Self {
		Self::new(header, move |item| Some(extractor(item)))
	}

	/// Sets the value rendered when the field is missing
	pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
		self.default_value = default_value.into();
		self
	}

	/// Sorts rows by `sort_key` instead of the cell text
	pub fn sort_by(mut self, sort_key: impl Fn(&R) -> SortKey + 'static) -> Self {
		self.sort_key = Some(Box::new(sort_key));
		self
	}

	/// Sets the column weight
	pub fn weight(mut self, weight: i32) -> Self {
		self.weight = weight;
		self
	}

	/// Sets the CSS class of `element` cells
	pub fn css_class(mut self, element: impl Into<String>, css_class: impl Into<String>) -> Self {
		self.css_classes.insert(element.into(), css_class.into());
		self
	}

	/// Returns the field value or the default value
	pub fn value(&self, item: &R) -> String {
		(self.extractor)(item).unwrap_or_else(|| self.default_value.clone())
	}
}

impl<R> Debug for FieldColumn<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FieldColumn")
			.field("header", &self.header)
			.field("default_value", &self.default_value)
			.field("weight", &self.weight)
			.field("css_classes", &self.css_classes)
			.finish_non_exhaustive()
	}
}

impl<R: 'static> Column<R> for FieldColumn<R> {
	fn header(&self) -> &str {
		&self.header
	}

	fn weight(&self) -> i32 {
		self.weight
	}

	fn css_class(&self, element: &str) -> Option<&str> {
		self.css_classes.get(element).map(String::as_str)
	}

	fn sort_key(&self, item: &R, _ctx: &ColumnContext<'_>) -> Option<SortKey> {
		self.sort_key.as_ref().map(|sort_key| sort_key(item))
	}

	fn render_cell(&self, item: &R, _ctx: &ColumnContext<'_>) -> String {
		escape(&self.value(item)).into_owned()
	}
}
