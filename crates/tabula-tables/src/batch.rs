//! Batch navigation rendering
//!
//! The [`BatchProvider`] turns the current [`Batch`] of a table into a strip
//! of page links. Long page lists are reduced with
//! [`first_neighbours_last`]; skipped runs render as the spacer markup.

use crate::error::Result;
use crate::html::{class_attr, escape};
use crate::request::{TableRequest, encode_query};
use crate::settings::BatchSettings;
use tabula_batching::{Batch, Page, WindowItem, first_neighbours_last, fits_window};

/// Renders the page links of a batched table
///
/// # Example
///
/// ```rust
/// use tabula_batching::Batch;
/// use tabula_tables::{BatchProvider, BatchSettings, TableRequest};
///
/// let batch = Batch::new((0..20).collect::<Vec<_>>(), 5, 5).unwrap();
/// let provider = BatchProvider::new("table", BatchSettings::default());
/// let html = provider.render(&batch, &TableRequest::new("/people")).unwrap();
///
/// assert!(html.contains(
///     "<a href=\"/people?table-batchSize=5&amp;table-batchStart=5\" class=\"current\">2</a>"
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct BatchProvider {
	prefix: String,
	settings: BatchSettings,
	request_args: Vec<String>,
}

impl BatchProvider {
	/// Creates a provider for the table with `prefix`
	///
	/// The sort parameters of the table are carried over into every link.
	pub fn new(prefix: impl Into<String>, settings: BatchSettings) -> Self {
		let prefix = prefix.into();
		let request_args = vec![format!("{prefix}-sortOn"), format!("{prefix}-sortOrder")];
		Self {
			prefix,
			settings,
			request_args,
		}
	}

	/// Preserves the request argument `name` in the page links
	pub fn request_arg(mut self, name: impl Into<String>) -> Self {
		self.request_args.push(name.into());
		self
	}

	/// Returns the batch navigation settings
	pub fn settings(&self) -> &BatchSettings {
		&self.settings
	}

	/// Returns the items of the navigation strip for `batch`
	///
	/// Page lists that fit into the window are shown in full.
	///
	/// # Errors
	///
	/// Propagates [`tabula_batching::BatchError`] from the window reduction.
	pub fn window<T>(&self, batch: &Batch<T>) -> Result<Vec<WindowItem>> {
		let prev = self.settings.prev_batch_size;
		let next = self.settings.next_batch_size;
		if fits_window(batch.total(), prev, next) {
			return Ok(batch.pages().iter().copied().map(WindowItem::Page).collect());
		}
		Ok(first_neighbours_last(batch.pages(), batch.index(), prev, next)?)
	}

	/// Returns the query arguments of the link to `page`
	pub fn query_args(&self, page: &Page, request: &TableRequest) -> Vec<(String, String)> {
		let mut args: Vec<(String, String)> = self
			.request_args
			.iter()
			.filter_map(|name| {
				request
					.get_non_empty(name)
					.map(|value| (name.clone(), value.to_string()))
			})
			.collect();
		args.push((format!("{}-batchStart", self.prefix), page.start.to_string()));
		args.push((format!("{}-batchSize", self.prefix), page.size.to_string()));
		args
	}

	/// Renders the link to `page`
	pub fn render_link(&self, page: &Page, request: &TableRequest, css_class: Option<&str>) -> String {
		let url = format!("{}?{}", request.url(), encode_query(self.query_args(page, request)));
		format!(
			"<a href=\"{}\"{}>{}</a>",
			escape(&url),
			class_attr(css_class),
			page.number()
		)
	}

	/// Renders the navigation strip for `batch`, one element per line
	///
	/// # Errors
	///
	/// Propagates [`tabula_batching::BatchError`] from the window reduction.
	pub fn render<T>(&self, batch: &Batch<T>, request: &TableRequest) -> Result<String> {
		let window = self.window(batch)?;
		let current = batch.current();
		let last = window.len().saturating_sub(1);

		let parts: Vec<String> = window
			.iter()
			.enumerate()
			.map(|(position, item)| match item {
				WindowItem::Elision => self.settings.batch_spacer.clone(),
				WindowItem::Page(page) => {
					let mut classes = Vec::new();
					if *page == current {
						classes.push("current");
					}
					if position == 0 {
						classes.push("first");
					}
					if position == last {
						classes.push("last");
					}
					self.render_link(page, request, Some(&classes.join(" ")))
				}
			})
			.collect();
		Ok(parts.join("\n"))
	}
}
