//! HTML helpers for escaping and attribute assembly

use std::borrow::Cow;

/// Escapes text for use in element content and quoted attribute values
///
/// Text without markup characters is borrowed as is.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use tabula_tables::html::escape;
///
/// assert!(matches!(escape("table-title-0"), Cow::Borrowed(_)));
/// assert_eq!(escape("<b>\"x\" & 'y'</b>"),
///            "&lt;b&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(text);
	}
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	Cow::Owned(result)
}

/// Renders a ` class="..."` attribute, or nothing for an empty class list
///
/// # Examples
///
/// ```
/// use tabula_tables::html::class_attr;
///
/// assert_eq!(class_attr(Some("odd selected")), " class=\"odd selected\"");
/// assert_eq!(class_attr(Some("")), "");
/// assert_eq!(class_attr(None), "");
/// ```
pub fn class_attr(classes: Option<&str>) -> String {
	match classes {
		Some(classes) if !classes.is_empty() => format!(" class=\"{}\"", escape(classes)),
		_ => String::new(),
	}
}

/// Joins two optional class lists with a space, skipping empty parts
///
/// # Examples
///
/// ```
/// use tabula_tables::html::join_classes;
///
/// assert_eq!(join_classes(Some("a"), Some("b")), Some("a b".to_string()));
/// assert_eq!(join_classes(None, Some("b")), Some("b".to_string()));
/// assert_eq!(join_classes(Some(""), None), None);
/// ```
pub fn join_classes(first: Option<&str>, second: Option<&str>) -> Option<String> {
	match (
		first.filter(|class| !class.is_empty()),
		second.filter(|class| !class.is_empty()),
	) {
		(Some(first), Some(second)) => Some(format!("{first} {second}")),
		(Some(class), None) | (None, Some(class)) => Some(class.to_string()),
		(None, None) => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_plain_text_untouched() {
		assert!(matches!(escape("table-title-0"), Cow::Borrowed("table-title-0")));
	}

	#[test]
	fn test_escape_ampersand_first() {
		assert_eq!(escape("&lt;"), "&amp;lt;");
	}

	#[test]
	fn test_class_attr_escapes_quotes() {
		assert_eq!(class_attr(Some("a\"b")), " class=\"a&quot;b\"");
	}
}
