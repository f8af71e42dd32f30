//! Link column types

use super::base::{Column, ColumnContext};
use crate::html::escape;
use crate::values::Named;

/// Computes the URL of a row item
pub type UrlFn<R> = Box<dyn Fn(&R) -> String>;

/// Column that renders the item as a hyperlink
///
/// The link target is the item URL, optionally followed by a view name
/// (`{url}/{link_name}`). The link text is the item name unless a fixed
/// content is configured.
///
/// # Example
///
/// ```rust
/// use tabula_tables::column::LinkColumn;
///
/// struct Document {
///     name: String,
/// }
///
/// impl tabula_tables::Named for Document {
///     fn name(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let column = LinkColumn::new(|doc: &Document| format!("/docs/{}", doc.name))
///     .link_name("edit.html")
///     .link_target("_blank");
/// ```
pub struct LinkColumn<R> {
	header: String,
	url: UrlFn<R>,
	link_name: Option<String>,
	link_target: Option<String>,
	link_content: Option<String>,
	link_css: Option<String>,
}

impl<R: Named + 'static> LinkColumn<R> {
	/// Creates a link column pointing at the item URL
	pub fn new(url: impl Fn(&R) -> String + 'static) -> Self {
		Self {
			header: "Name".to_string(),
			url: Box::new(url),
			link_name: None,
			link_target: None,
			link_content: None,
			link_css: None,
		}
	}

	/// Creates a link column pointing at the `contents.html` view of the item
	pub fn contents(url: impl Fn(&R) -> String + 'static) -> Self {
		Self::new(url).link_name("contents.html")
	}

	/// Creates a link column pointing at the `index.html` view of the item
	pub fn index(url: impl Fn(&R) -> String + 'static) -> Self {
		Self::new(url).link_name("index.html")
	}

	/// Creates a link column pointing at the `edit.html` view of the item
	pub fn edit(url: impl Fn(&R) -> String + 'static) -> Self {
		Self::new(url).link_name("edit.html")
	}

	/// Sets the header text
	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = header.into();
		self
	}

	/// Appends a view name to the item URL
	pub fn link_name(mut self, link_name: impl Into<String>) -> Self {
		self.link_name = Some(link_name.into());
		self
	}

	/// Sets the `target` attribute of the link
	pub fn link_target(mut self, link_target: impl Into<String>) -> Self {
		self.link_target = Some(link_target.into());
		self
	}

	/// Uses a fixed link text instead of the item name
	pub fn link_content(mut self, link_content: impl Into<String>) -> Self {
		self.link_content = Some(link_content.into());
		self
	}

	/// Sets the CSS class of the link
	pub fn link_css(mut self, link_css: impl Into<String>) -> Self {
		self.link_css = Some(link_css.into());
		self
	}
}

impl<R> LinkColumn<R> {
	fn link_url(&self, item: &R) -> String {
		let url = (self.url)(item);
		match &self.link_name {
			Some(link_name) => format!("{url}/{link_name}"),
			None => url,
		}
	}
}

/// Renders an anchor tag with optional target and class attributes
fn anchor(url: &str, target: Option<&str>, css: Option<&str>, content: &str) -> String {
	let target = target
		.map(|target| format!(" target=\"{}\"", escape(target)))
		.unwrap_or_default();
	let css = css
		.map(|css| format!(" class=\"{}\"", escape(css)))
		.unwrap_or_default();
	format!("<a href=\"{}\"{}{}>{}</a>", escape(url), target, css, content)
}

impl<R> std::fmt::Debug for LinkColumn<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LinkColumn")
			.field("header", &self.header)
			.field("link_name", &self.link_name)
			.field("link_target", &self.link_target)
			.field("link_content", &self.link_content)
			.field("link_css", &self.link_css)
			.finish_non_exhaustive()
	}
}

impl<R: Named> Column<R> for LinkColumn<R> {
	fn header(&self) -> &str {
		&self.header
	}

	fn render_cell(&self, item: &R, _ctx: &ColumnContext<'_>) -> String {
		let content = self.link_content.as_deref().unwrap_or_else(|| item.name());
		anchor(
			&self.link_url(item),
			self.link_target.as_deref(),
			self.link_css.as_deref(),
			&escape(content),
		)
	}
}

/// Extracts an e-mail address from a row item
pub type AddressFn<R> = Box<dyn Fn(&R) -> Option<String>>;

/// Column rendering `mailto:` links
///
/// Items without an address render the default value.
pub struct EmailColumn<R> {
	header: String,
	address: AddressFn<R>,
	default_value: String,
	link_content: Option<String>,
}

impl<R: 'static> EmailColumn<R> {
	/// Creates an e-mail column reading the address with `address`
	pub fn new(address: impl Fn(&R) -> Option<String> + 'static) -> Self {
		Self {
			header: "E-Mail".to_string(),
			address: Box::new(address),
			default_value: String::new(),
			link_content: None,
		}
	}

	/// Sets the value rendered for items without an address
	pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
		self.default_value = default_value.into();
		self
	}

	/// Uses a fixed link text instead of the address
	pub fn link_content(mut self, link_content: impl Into<String>) -> Self {
		self.link_content = Some(link_content.into());
		self
	}
}

impl<R> std::fmt::Debug for EmailColumn<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EmailColumn")
			.field("header", &self.header)
			.field("default_value", &self.default_value)
			.field("link_content", &self.link_content)
			.finish_non_exhaustive()
	}
}

impl<R> Column<R> for EmailColumn<R> {
	fn header(&self) -> &str {
		&self.header
	}

	fn render_cell(&self, item: &R, _ctx: &ColumnContext<'_>) -> String {
		match (self.address)(item) {
			Some(address) => {
				let content = self.link_content.as_deref().unwrap_or(&address);
				anchor(&format!("mailto:{address}"), None, None, &escape(content))
			}
			None => escape(&self.default_value).into_owned(),
		}
	}
}
