//! Table and batch settings
//!
//! Settings are plain serde structures with defaults for every field, so a
//! settings file only lists what it changes:
//!
//! ```toml
//! prefix = "users"
//! batch_size = 20
//! css_class_even = "even"
//! css_class_odd = "odd"
//!
//! [css_classes]
//! table = "listing"
//!
//! [batch]
//! prev_batch_size = 2
//! next_batch_size = 2
//! ```

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Configuration of a [`crate::Table`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Prefix used for column ids and request parameter names
	pub prefix: String,
	/// CSS classes by element name (`table`, `thead`, `tbody`, `tr`, `th`, `td`)
	pub css_classes: BTreeMap<String, String>,
	/// CSS class for even rows (the first row is even)
	pub css_class_even: String,
	/// CSS class for odd rows
	pub css_class_odd: String,
	/// CSS class prepended for selected rows
	pub css_class_selected: String,
	/// CSS class marking the sorted column, `None` turns marking off
	pub css_class_sorted_on: Option<String>,
	/// Index of the column sorted on by default, `None` disables sorting
	pub sort_on: Option<usize>,
	/// Default sort order
	pub sort_order: String,
	/// Sort order names that reverse the row order
	pub reverse_sort_order_names: Vec<String>,
	/// Default offset of the first shown row
	pub batch_start: usize,
	/// Default number of rows per batch
	pub batch_size: usize,
	/// Rows are batched only when there are more rows than this
	pub start_batching_at: usize,
	/// Batch navigation settings
	pub batch: BatchSettings,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			prefix: "table".to_string(),
			css_classes: BTreeMap::new(),
			css_class_even: String::new(),
			css_class_odd: String::new(),
			css_class_selected: String::new(),
			css_class_sorted_on: Some("sorted-on".to_string()),
			sort_on: Some(0),
			sort_order: "ascending".to_string(),
			reverse_sort_order_names: vec![
				"descending".to_string(),
				"reverse".to_string(),
				"down".to_string(),
			],
			batch_start: 0,
			batch_size: 50,
			start_batching_at: 50,
			batch: BatchSettings::default(),
		}
	}
}

impl TableSettings {
	/// Parses settings from a TOML document and validates them
	///
	/// # Examples
	///
	/// ```
	/// use tabula_tables::TableSettings;
	///
	/// let settings = TableSettings::from_toml_str("batch_size = 10").unwrap();
	/// assert_eq!(settings.batch_size, 10);
	/// assert_eq!(settings.prefix, "table");
	/// ```
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Toml`] for malformed TOML or values of the
	/// wrong type (negative sizes included) and [`SettingsError::Invalid`] when
	/// validation fails.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a TOML file
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Io`] if the file cannot be read, otherwise the
	/// errors of [`TableSettings::from_toml_str`].
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let content = fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading table settings");
		Self::from_toml_str(&content)
	}

	/// Checks the values serde cannot express as types
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Invalid`] for an empty prefix, a zero batch
	/// size or an empty list of reverse sort order names.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.prefix.is_empty() {
			return Err(SettingsError::Invalid {
				field: "prefix",
				message: "must not be empty".to_string(),
			});
		}
		if self.batch_size == 0 {
			return Err(SettingsError::Invalid {
				field: "batch_size",
				message: "must be greater than zero".to_string(),
			});
		}
		if self.reverse_sort_order_names.is_empty() {
			return Err(SettingsError::Invalid {
				field: "reverse_sort_order_names",
				message: "must name at least one order".to_string(),
			});
		}
		Ok(())
	}

	/// Returns true if `order` reverses the row order
	pub fn is_reverse_order(&self, order: &str) -> bool {
		self.reverse_sort_order_names
			.iter()
			.any(|name| name == order)
	}
}

/// Configuration of the batch navigation strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
	/// Number of page links shown before the current page
	pub prev_batch_size: usize,
	/// Number of page links shown after the current page
	pub next_batch_size: usize,
	/// Markup rendered verbatim for omitted pages
	pub batch_spacer: String,
}

impl Default for BatchSettings {
	fn default() -> Self {
		Self {
			prev_batch_size: 3,
			next_batch_size: 3,
			batch_spacer: "...".to_string(),
		}
	}
}
