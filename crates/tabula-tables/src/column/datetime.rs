//! Date and time columns

use super::base::{Column, ColumnContext, SortKey};
use crate::html::escape;
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Extracts a timestamp from a row item
pub type DateTimeFn<R> = Box<dyn Fn(&R) -> Option<NaiveDateTime>>;

/// Output format of a [`DateTimeColumn`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFormat {
	/// `%y/%m/%d %H:%M`
	Short,
	/// `%Y %b %d %H:%M:%S`
	#[default]
	Medium,
	/// Any `strftime` pattern; an invalid pattern renders the default value
	Custom(String),
}

impl DateFormat {
	/// Returns the `strftime` pattern of this format
	pub fn pattern(&self) -> &str {
		match self {
			Self::Short => "%y/%m/%d %H:%M",
			Self::Medium => "%Y %b %d %H:%M:%S",
			Self::Custom(pattern) => pattern,
		}
	}
}

/// Column formatting a timestamp
///
/// Rows sort chronologically; items without a timestamp render the default
/// value and sort first.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDateTime;
/// use tabula_tables::column::{DateFormat, DateTimeColumn};
///
/// struct Document {
///     published: Option<NaiveDateTime>,
/// }
///
/// let column = DateTimeColumn::new("Published", |doc: &Document| doc.published)
///     .format(DateFormat::Short);
/// ```
pub struct DateTimeColumn<R> {
	header: String,
	weight: i32,
	value: DateTimeFn<R>,
	format: DateFormat,
	default_value: String,
}

impl<R: 'static> DateTimeColumn<R> {
	/// Creates a column reading the timestamp with `value`
	pub fn new(header: impl Into<String>, value: impl Fn(&R) -> Option<NaiveDateTime> + 'static) -> Self {
		Self {
			header: header.into(),
			weight: 0,
			value: Box::new(value),
			format: DateFormat::default(),
			default_value: String::new(),
		}
	}

	/// Creates the `Created` column (weight 100)
	pub fn created(value: impl Fn(&R) -> Option<NaiveDateTime> + 'static) -> Self {
		Self::new("Created", value).weight(100)
	}

	/// Creates the `Modified` column (weight 110)
	pub fn modified(value: impl Fn(&R) -> Option<NaiveDateTime> + 'static) -> Self {
		Self::new("Modified", value).weight(110)
	}

	/// Sets the output format
	pub fn format(mut self, format: DateFormat) -> Self {
		self.format = format;
		self
	}

	/// Sets the column weight
	pub fn weight(mut self, weight: i32) -> Self {
		self.weight = weight;
		self
	}

	/// Sets the value rendered for items without a timestamp
	pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
		self.default_value = default_value.into();
		self
	}
}

impl<R> std::fmt::Debug for DateTimeColumn<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DateTimeColumn")
			.field("header", &self.header)
			.field("weight", &self.weight)
			.field("format", &self.format)
			.finish_non_exhaustive()
	}
}

impl<R> Column<R> for DateTimeColumn<R> {
	fn header(&self) -> &str {
		&self.header
	}

	fn weight(&self) -> i32 {
		self.weight
	}

	fn sort_key(&self, item: &R, _ctx: &ColumnContext<'_>) -> Option<SortKey> {
		Some((self.value)(item).map_or(SortKey::Empty, SortKey::DateTime))
	}

	fn render_cell(&self, item: &R, _ctx: &ColumnContext<'_>) -> String {
		match (self.value)(item) {
			Some(value) => {
				let mut formatted = String::new();
				match write!(formatted, "{}", value.format(self.format.pattern())) {
					Ok(()) => escape(&formatted).into_owned(),
					Err(_) => {
						tracing::warn!(pattern = self.format.pattern(), "invalid date format pattern");
						escape(&self.default_value).into_owned()
					}
				}
			}
			None => escape(&self.default_value).into_owned(),
		}
	}
}
