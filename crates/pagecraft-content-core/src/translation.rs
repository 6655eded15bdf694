// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::de;

/// One language's rendering of a localized entity.
///
/// The same record shape serves every entity kind. The content API names the
/// display label `name` on members and the body `content` on blogs or
/// `address` on contacts; those spellings are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
	/// Locale code, e.g. "en" or "vi".
	#[serde(default, deserialize_with = "de::string")]
	pub language: String,
	#[serde(default, alias = "name", deserialize_with = "de::string")]
	pub title: String,
	/// Free-text body, possibly HTML.
	#[serde(
		default,
		alias = "content",
		alias = "address",
		deserialize_with = "de::string"
	)]
	pub description: String,
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "de::opt_string"
	)]
	pub meta_title: Option<String>,
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "de::opt_string"
	)]
	pub meta_description: Option<String>,
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "de::opt_string"
	)]
	pub og_title: Option<String>,
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "de::opt_string"
	)]
	pub og_description: Option<String>,
	#[serde(default, deserialize_with = "de::list")]
	pub keywords: Vec<String>,
	/// Call-to-action label, banners only.
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "de::opt_string"
	)]
	pub button_text: Option<String>,
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "de::opt_string"
	)]
	pub button_link: Option<String>,
}

impl Translation {
	/// A translation-shaped placeholder for content with no usable translation.
	pub fn placeholder(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			..Default::default()
		}
	}

	/// Exact, case-sensitive match. A record with no language matches nothing.
	pub fn is_language(&self, locale: &str) -> bool {
		!self.language.is_empty() && self.language == locale
	}

	/// Whether both halves of the call-to-action pair are present.
	pub fn has_call_to_action(&self) -> bool {
		self.button_text.is_some() && self.button_link.is_some()
	}
}
