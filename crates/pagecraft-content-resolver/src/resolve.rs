// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request locale resolution.

use pagecraft_content_core::{locale_info, DEFAULT_LOCALE};

/// Map a language tag such as "vi-VN" or "EN" onto a supported locale code.
fn supported(tag: &str) -> Option<&'static str> {
	let primary = tag.trim().split(['-', '_']).next()?;
	locale_info(&primary.to_ascii_lowercase()).map(|info| info.code)
}

/// Resolve the effective locale for a page request.
///
/// Resolution order (highest to lowest priority):
/// 1. The requested locale (route segment, cookie), if supported
/// 2. The site default locale, if supported
/// 3. Fallback to English ("en")
///
/// Region subtags are ignored, so "vi-VN" resolves to "vi".
///
/// # Example
///
/// ```
/// use pagecraft_content_resolver::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("vi"), "en"), "vi");
/// assert_eq!(resolve_locale(None, "vi"), "vi");
/// assert_eq!(resolve_locale(Some("fr"), "de"), "en");
/// ```
pub fn resolve_locale(requested: Option<&str>, site_default: &str) -> &'static str {
	if let Some(locale) = requested.and_then(supported) {
		return locale;
	}

	supported(site_default).unwrap_or(DEFAULT_LOCALE)
}

/// Pick a locale from an `Accept-Language` header value.
///
/// Entries are ranked by their `q` weight (default 1.0); ties keep header
/// order. Entries with `q=0` or a weight that is not a number in `0..=1` are
/// skipped. Falls back to [`resolve_locale`] with no requested locale.
///
/// # Example
///
/// ```
/// use pagecraft_content_resolver::negotiate_locale;
///
/// assert_eq!(negotiate_locale("fr-FR, vi;q=0.8, en;q=0.5", "en"), "vi");
/// assert_eq!(negotiate_locale("", "vi"), "vi");
/// ```
pub fn negotiate_locale(accept_language: &str, site_default: &str) -> &'static str {
	let mut best: Option<(f32, &'static str)> = None;

	for entry in accept_language.split(',') {
		let mut parts = entry.split(';');
		let tag = parts.next().unwrap_or_default();
		let weight = parts
			.find_map(|param| param.trim().strip_prefix("q="))
			.map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())
			.filter(|w| *w > 0.0 && *w <= 1.0);

		let (Some(weight), Some(locale)) = (weight, supported(tag)) else {
			continue;
		};
		if best.map_or(true, |(w, _)| weight > w) {
			best = Some((weight, locale));
		}
	}

	match best {
		Some((_, locale)) => locale,
		None => resolve_locale(None, site_default),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_requested_takes_priority() {
		assert_eq!(resolve_locale(Some("vi"), "en"), "vi");
		assert_eq!(resolve_locale(Some("en"), "vi"), "en");
	}

	#[test]
	fn test_site_default_when_nothing_requested() {
		assert_eq!(resolve_locale(None, "vi"), "vi");
	}

	#[test]
	fn test_site_default_when_requested_unsupported() {
		assert_eq!(resolve_locale(Some("fr"), "vi"), "vi");
	}

	#[test]
	fn test_fallback_to_english_when_both_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
		assert_eq!(resolve_locale(None, ""), "en");
	}

	#[test]
	fn test_region_and_case_are_ignored() {
		assert_eq!(resolve_locale(Some("vi-VN"), "en"), "vi");
		assert_eq!(resolve_locale(Some("EN_us"), "vi"), "en");
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(Some(""), "vi"), "vi");
	}

	#[test]
	fn test_negotiate_by_weight() {
		assert_eq!(negotiate_locale("en;q=0.4, vi;q=0.9", "en"), "vi");
		assert_eq!(negotiate_locale("vi-VN,vi;q=0.9,en-US;q=0.8,en;q=0.7", "en"), "vi");
	}

	#[test]
	fn test_negotiate_ties_keep_header_order() {
		assert_eq!(negotiate_locale("en, vi", "vi"), "en");
	}

	#[test]
	fn test_negotiate_skips_rejected_and_garbage() {
		assert_eq!(negotiate_locale("vi;q=0, en;q=0.1", "vi"), "en");
		assert_eq!(negotiate_locale("vi;q=abc", "en"), "en");
		assert_eq!(negotiate_locale("*, fr", "vi"), "vi");
	}

	#[test]
	fn test_negotiate_skips_out_of_range_weights() {
		assert_eq!(negotiate_locale("vi;q=NaN, en", "vi"), "en");
		assert_eq!(negotiate_locale("en, vi;q=5", "en"), "en");
		assert_eq!(negotiate_locale("vi;q=inf, en;q=0.2", "vi"), "en");
		assert_eq!(negotiate_locale("vi;q=-1", "en"), "en");
	}
}
