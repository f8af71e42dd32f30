//! Request parameters seen by a table

use url::form_urlencoded;

/// The part of an HTTP request a table reads: its own URL and the decoded
/// query parameters.
///
/// Parameters keep their order and may repeat (multi-select widgets submit
/// one pair per selected value).
///
/// # Example
///
/// ```rust
/// use tabula_tables::TableRequest;
///
/// let request = TableRequest::from_query(
///     "http://localhost/container/table",
///     "table-sortOn=table-title-0&table-sortOrder=descending",
/// );
///
/// assert_eq!(request.get("table-sortOrder"), Some("descending"));
/// assert_eq!(request.url(), "http://localhost/container/table");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRequest {
	url: String,
	params: Vec<(String, String)>,
}

impl TableRequest {
	/// Creates a request without parameters
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			params: Vec::new(),
		}
	}

	/// Creates a request from an `application/x-www-form-urlencoded` query
	///
	/// A leading `?` is ignored. Malformed percent escapes are decoded
	/// lossily.
	pub fn from_query(url: impl Into<String>, query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		Self {
			url: url.into(),
			params: form_urlencoded::parse(query.as_bytes())
				.into_owned()
				.collect(),
		}
	}

	/// Adds a parameter
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.push((key.into(), value.into()));
		self
	}

	/// Returns the absolute URL of the table
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Returns the first value of `key`
	pub fn get(&self, key: &str) -> Option<&str> {
		self.params
			.iter()
			.find(|(name, _)| name == key)
			.map(|(_, value)| value.as_str())
	}

	/// Returns the first value of `key` unless it is empty
	pub fn get_non_empty(&self, key: &str) -> Option<&str> {
		self.get(key).filter(|value| !value.is_empty())
	}

	/// Returns every value submitted for `key`
	pub fn get_all(&self, key: &str) -> Vec<&str> {
		self.params
			.iter()
			.filter(|(name, _)| name == key)
			.map(|(_, value)| value.as_str())
			.collect()
	}

	/// Returns all parameters in submission order
	pub fn params(&self) -> &[(String, String)] {
		&self.params
	}
}

/// Encodes `args` as a query string, keys sorted
///
/// # Examples
///
/// ```
/// use tabula_tables::request::encode_query;
///
/// let query = encode_query(vec![
///     ("table-batchStart".to_string(), "10".to_string()),
///     ("table-batchSize".to_string(), "5".to_string()),
/// ]);
/// assert_eq!(query, "table-batchSize=5&table-batchStart=10");
/// ```
pub fn encode_query(mut args: Vec<(String, String)>) -> String {
	args.sort();
	form_urlencoded::Serializer::new(String::new())
		.extend_pairs(&args)
		.finish()
}
