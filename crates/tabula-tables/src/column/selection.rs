//! Columns that let users select rows
//!
//! Selection columns read the submitted selection from the request during
//! the table update and report the selected item indices back to the table,
//! which marks those rows as selected.

use super::base::{Column, ColumnContext, SortKey};
use crate::html::escape;
use crate::request::encode_query;
use crate::values::Named;
use std::collections::HashSet;

/// Returns the indices of `items` whose name was submitted under `key`
fn submitted<R: Named>(ctx: &ColumnContext<'_>, key: &str, items: &[R]) -> Vec<usize> {
	let submitted: HashSet<&str> = ctx.request.get_all(key).into_iter().collect();
	items
		.iter()
		.enumerate()
		.filter(|(_, item)| submitted.contains(item.name()))
		.map(|(index, _)| index)
		.collect()
}

/// Column with a checkbox per row
///
/// Checked boxes are submitted as `{id}-selectedItems` with the item name as
/// value; every checked item is selected.
#[derive(Debug, Clone)]
pub struct CheckBoxColumn {
	header: String,
	weight: i32,
	selected: HashSet<String>,
}

impl CheckBoxColumn {
	/// Creates a checkbox column
	pub fn new() -> Self {
		Self {
			header: "X".to_string(),
			weight: 10,
			selected: HashSet::new(),
		}
	}

	/// Returns the request key carrying the selection
	pub fn item_key(ctx: &ColumnContext<'_>) -> String {
		format!("{}-selectedItems", ctx.id)
	}

	/// Returns true if the item named `name` is checked
	pub fn is_selected(&self, name: &str) -> bool {
		self.selected.contains(name)
	}
}

impl Default for CheckBoxColumn {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Named> Column<R> for CheckBoxColumn {
	fn header(&self) -> &str {
		&self.header
	}

	fn weight(&self) -> i32 {
		self.weight
	}

	fn update(&mut self, ctx: &ColumnContext<'_>, items: &[R]) -> Option<Vec<usize>> {
		let selected = submitted(ctx, &Self::item_key(ctx), items);
		self.selected = selected
			.iter()
			.map(|index| items[*index].name().to_string())
			.collect();
		Some(selected)
	}

	fn sort_key(&self, item: &R, _ctx: &ColumnContext<'_>) -> Option<SortKey> {
		Some(SortKey::from(item.name()))
	}

	fn render_cell(&self, item: &R, ctx: &ColumnContext<'_>) -> String {
		let checked = if self.is_selected(item.name()) {
			"checked=\"checked\""
		} else {
			""
		};
		format!(
			"<input type=\"checkbox\" class=\"checkbox-widget\" name=\"{}\" value=\"{}\" {} />",
			escape(&Self::item_key(ctx)),
			escape(item.name()),
			checked
		)
	}
}

/// Column with a radio button per row
///
/// The checked button is submitted as `{id}-selectedItem`; when several
/// items match, the last one wins.
#[derive(Debug, Clone)]
pub struct RadioColumn {
	header: String,
	selected: Option<String>,
}

impl RadioColumn {
	/// Creates a radio column
	pub fn new() -> Self {
		Self {
			header: "X".to_string(),
			selected: None,
		}
	}

	/// Returns the request key carrying the selection
	pub fn item_key(ctx: &ColumnContext<'_>) -> String {
		format!("{}-selectedItem", ctx.id)
	}

	/// Returns the name of the selected item
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}
}

impl Default for RadioColumn {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Named> Column<R> for RadioColumn {
	fn header(&self) -> &str {
		&self.header
	}

	fn update(&mut self, ctx: &ColumnContext<'_>, items: &[R]) -> Option<Vec<usize>> {
		let last = submitted(ctx, &Self::item_key(ctx), items).pop()?;
		self.selected = Some(items[last].name().to_string());
		Some(vec![last])
	}

	fn sort_key(&self, item: &R, _ctx: &ColumnContext<'_>) -> Option<SortKey> {
		Some(SortKey::from(item.name()))
	}

	fn render_cell(&self, item: &R, ctx: &ColumnContext<'_>) -> String {
		let checked = if self.selected() == Some(item.name()) {
			"checked=\"checked\""
		} else {
			""
		};
		format!(
			"<input type=\"radio\" class=\"radio-widget\" name=\"{}\" value=\"{}\" {} />",
			escape(&Self::item_key(ctx)),
			escape(item.name()),
			checked
		)
	}
}

/// Column with a link that selects the row item
///
/// The link points back to the table with `{id}-selectedItems={name}`; a
/// submitted selection makes that item the table's only selected item.
#[derive(Debug, Clone)]
pub struct SelectedItemColumn {
	header: String,
	link_content: Option<String>,
	selected: Option<String>,
}

impl SelectedItemColumn {
	/// Creates a selected item column
	pub fn new() -> Self {
		Self {
			header: "Name".to_string(),
			link_content: None,
			selected: None,
		}
	}

	/// Uses `content` as link text instead of the item name
	pub fn link_content(mut self, content: impl Into<String>) -> Self {
		self.link_content = Some(content.into());
		self
	}

	/// Returns the request key carrying the selection
	pub fn item_key(ctx: &ColumnContext<'_>) -> String {
		format!("{}-selectedItems", ctx.id)
	}

	/// Returns the name of the selected item
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	fn content<'a>(&'a self, item: &'a impl Named) -> &'a str {
		self.link_content.as_deref().unwrap_or_else(|| item.name())
	}
}

impl Default for SelectedItemColumn {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Named> Column<R> for SelectedItemColumn {
	fn header(&self) -> &str {
		&self.header
	}

	fn update(&mut self, ctx: &ColumnContext<'_>, items: &[R]) -> Option<Vec<usize>> {
		let last = submitted(ctx, &Self::item_key(ctx), items).pop()?;
		self.selected = Some(items[last].name().to_string());
		Some(vec![last])
	}

	fn sort_key(&self, item: &R, _ctx: &ColumnContext<'_>) -> Option<SortKey> {
		Some(SortKey::from(self.content(item)))
	}

	fn render_cell(&self, item: &R, ctx: &ColumnContext<'_>) -> String {
		let query = encode_query(vec![(Self::item_key(ctx), item.name().to_string())]);
		let url = format!("{}?{}", ctx.request.url(), query);
		format!("<a href=\"{}\">{}</a>", escape(&url), escape(self.content(item)))
	}
}
