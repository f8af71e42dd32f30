//! Column header renderers

use crate::html::escape;
use crate::request::{TableRequest, encode_query};

/// Everything a header renderer may look at
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
	/// Header text of the column
	pub header: &'a str,
	/// Column id (`{prefix}-{name}-{index}`)
	pub column_id: &'a str,
	/// Position of the column in the table
	pub column_index: usize,
	/// Table prefix
	pub prefix: &'a str,
	/// Index of the column the table is sorted on
	pub sort_on: Option<usize>,
	/// Current sort order
	pub sort_order: &'a str,
	/// Sort order names that reverse the row order
	pub reverse_sort_order_names: &'a [String],
	/// The request the table is rendered for
	pub request: &'a TableRequest,
}

/// Renders the content of a header cell
pub trait ColumnHeader: std::fmt::Debug {
	/// Renders the header cell content for the column in `ctx`
	fn render(&self, ctx: &HeaderContext<'_>) -> String;
}

/// Renders the escaped header text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHeader;

impl ColumnHeader for PlainHeader {
	fn render(&self, ctx: &HeaderContext<'_>) -> String {
		escape(ctx.header).into_owned()
	}
}

/// Renders the header text as a link that sorts the table by the column
///
/// Clicking the header of the sorted column toggles the sort order; other
/// columns keep the current order.
#[derive(Debug, Clone, Default)]
pub struct SortingHeader {
	request_args: Vec<String>,
}

impl SortingHeader {
	/// Creates a sorting header
	pub fn new() -> Self {
		Self::default()
	}

	/// Preserves the request argument `name` in the sort links
	pub fn request_arg(mut self, name: impl Into<String>) -> Self {
		self.request_args.push(name.into());
		self
	}

	/// Returns the sort order the link for `ctx` requests
	pub fn next_sort_order(ctx: &HeaderContext<'_>) -> String {
		if ctx.sort_on != Some(ctx.column_index) {
			return ctx.sort_order.to_string();
		}
		if ctx
			.reverse_sort_order_names
			.iter()
			.any(|name| name == ctx.sort_order)
		{
			return "ascending".to_string();
		}
		match ctx.reverse_sort_order_names.first() {
			Some(reverse) if ctx.sort_order == "ascending" => reverse.clone(),
			_ => ctx.sort_order.to_string(),
		}
	}

	/// Returns the query string of the sort link for `ctx`
	pub fn query(&self, ctx: &HeaderContext<'_>) -> String {
		let mut args: Vec<(String, String)> = self
			.request_args
			.iter()
			.filter_map(|name| {
				ctx.request
					.get_non_empty(name)
					.map(|value| (name.clone(), value.to_string()))
			})
			.collect();
		args.push((format!("{}-sortOn", ctx.prefix), ctx.column_id.to_string()));
		args.push((format!("{}-sortOrder", ctx.prefix), Self::next_sort_order(ctx)));
		encode_query(args)
	}
}

impl ColumnHeader for SortingHeader {
	fn render(&self, ctx: &HeaderContext<'_>) -> String {
		format!(
			"<a href=\"{}\" title=\"Sort\">{}</a>",
			escape(&format!("?{}", self.query(ctx))),
			escape(ctx.header)
		)
	}
}
