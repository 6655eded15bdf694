// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locales the site publishes content in.

use serde::Serialize;

/// The site's base locale, used when nothing better is known.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
	pub code: &'static str,
	/// Name of the language in the language itself, for the locale switcher.
	pub native_name: &'static str,
}

pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		native_name: "English",
	},
	LocaleInfo {
		code: "vi",
		native_name: "Tiếng Việt",
	},
];

pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|info| info.code == code)
}

pub fn is_supported(code: &str) -> bool {
	locale_info(code).is_some()
}

pub fn available_locales() -> impl Iterator<Item = &'static str> {
	LOCALES.iter().map(|info| info.code)
}
