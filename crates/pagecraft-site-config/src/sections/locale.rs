// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration section.

use std::fmt;
use std::str::FromStr;

use pagecraft_content_core::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};

/// How pages pick a translation when the requested locale has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
	/// First translation in API order.
	#[default]
	FirstAvailable,
	/// The site default locale if present, then first in API order.
	PreferDefault,
}

impl FallbackMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			FallbackMode::FirstAvailable => "first_available",
			FallbackMode::PreferDefault => "prefer_default",
		}
	}
}

impl fmt::Display for FallbackMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FallbackMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().replace('-', "_").as_str() {
			"first_available" | "first" => Ok(FallbackMode::FirstAvailable),
			"prefer_default" | "default" => Ok(FallbackMode::PreferDefault),
			other => Err(format!(
				"unknown fallback policy '{other}' (expected first_available or prefer_default)"
			)),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfigLayer {
	pub default_locale: Option<String>,
	pub fallback_policy: Option<FallbackMode>,
}

impl LocaleConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.fallback_policy.is_some() {
			self.fallback_policy = other.fallback_policy;
		}
	}

	pub fn finalize(self) -> LocaleConfig {
		LocaleConfig {
			default_locale: self
				.default_locale
				.map(|l| l.trim().to_lowercase())
				.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
			fallback_policy: self.fallback_policy.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
	pub default_locale: String,
	pub fallback_policy: FallbackMode,
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE.to_string(),
			fallback_policy: FallbackMode::FirstAvailable,
		}
	}
}
