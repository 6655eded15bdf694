// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! List-field codec.
//!
//! Multi-value fields such as `keywords` are stored as ordered lists but
//! edited as a single comma-separated text field. Decoding trims every
//! segment and drops empty ones; order is kept and duplicates are not
//! removed.

/// Separator used when rendering a list into an edit field.
pub const LIST_SEPARATOR: &str = ", ";

/// Join list values into the comma-separated edit representation.
///
/// # Example
///
/// ```
/// use pagecraft_content_core::encode_list;
///
/// assert_eq!(encode_list(&["rust", "web"]), "rust, web");
/// assert_eq!(encode_list::<&str>(&[]), "");
/// ```
pub fn encode_list<S: AsRef<str>>(values: &[S]) -> String {
	values
		.iter()
		.map(AsRef::as_ref)
		.collect::<Vec<_>>()
		.join(LIST_SEPARATOR)
}

/// Split comma-separated text into trimmed, non-empty values.
///
/// # Example
///
/// ```
/// use pagecraft_content_core::decode_list;
///
/// assert_eq!(decode_list("a, , b,,c"), vec!["a", "b", "c"]);
/// assert!(decode_list("  ").is_empty());
/// ```
pub fn decode_list(text: &str) -> Vec<String> {
	text
		.split(',')
		.map(str::trim)
		.filter(|segment| !segment.is_empty())
		.map(str::to_string)
		.collect()
}

/// Like [`decode_list`], treating absent input as an empty list.
pub fn decode_list_opt(text: Option<&str>) -> Vec<String> {
	text.map(decode_list).unwrap_or_default()
}

/// Re-normalize an already split list: trim elements, drop blank ones.
pub(crate) fn normalize_list<I, S>(values: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	values
		.into_iter()
		.filter_map(|value| {
			let trimmed = value.as_ref().trim();
			(!trimmed.is_empty()).then(|| trimmed.to_string())
		})
		.collect()
}
