// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Asset URL resolution.

/// Resolve a stored image path into a URL the page can render.
///
/// - absent or empty path: `""` (the page shows its placeholder image)
/// - `http://` or `https://` URL: returned unchanged
/// - anything else: appended to `base_url` as is
///
/// Stored relative paths start with `/`; no slash repair is attempted.
///
/// # Example
///
/// ```
/// use pagecraft_content_resolver::resolve_asset_url;
///
/// let base = "https://cdn.example.com";
/// assert_eq!(resolve_asset_url(None, base), "");
/// assert_eq!(resolve_asset_url(Some("https://other.com/x.png"), base), "https://other.com/x.png");
/// assert_eq!(resolve_asset_url(Some("/images/a.png"), base), "https://cdn.example.com/images/a.png");
/// ```
pub fn resolve_asset_url(path: Option<&str>, base_url: &str) -> String {
	match path {
		None | Some("") => String::new(),
		Some(path) if is_absolute(path) => path.to_string(),
		Some(path) => format!("{base_url}{path}"),
	}
}

fn is_absolute(path: &str) -> bool {
	path.starts_with("http://") || path.starts_with("https://")
}
