// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin edit representation of a translation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::list::{decode_list, encode_list};
use crate::translation::Translation;
use crate::validate::validate_translation;

/// A translation as bound to admin form fields.
///
/// Every field is plain text; `keywords` is the comma-separated edit value.
/// Blank optional fields mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationForm {
	pub language: String,
	pub title: String,
	pub description: String,
	pub meta_title: String,
	pub meta_description: String,
	pub og_title: String,
	pub og_description: String,
	pub keywords: String,
	pub button_text: String,
	pub button_link: String,
}

impl From<&Translation> for TranslationForm {
	fn from(t: &Translation) -> Self {
		Self {
			language: t.language.clone(),
			title: t.title.clone(),
			description: t.description.clone(),
			meta_title: t.meta_title.clone().unwrap_or_default(),
			meta_description: t.meta_description.clone().unwrap_or_default(),
			og_title: t.og_title.clone().unwrap_or_default(),
			og_description: t.og_description.clone().unwrap_or_default(),
			keywords: encode_list(&t.keywords),
			button_text: t.button_text.clone().unwrap_or_default(),
			button_link: t.button_link.clone().unwrap_or_default(),
		}
	}
}

fn non_blank(value: String) -> Option<String> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		None
	} else if trimmed.len() == value.len() {
		Some(value)
	} else {
		Some(trimmed.to_string())
	}
}

impl TranslationForm {
	/// Normalize the submitted fields into a [`Translation`] and validate it.
	///
	/// Keywords are decoded, the language and optional fields are trimmed.
	/// Titles and bodies are kept as typed.
	pub fn into_translation(self) -> Result<Translation> {
		let translation = Translation {
			language: self.language.trim().to_string(),
			title: self.title,
			description: self.description,
			meta_title: non_blank(self.meta_title),
			meta_description: non_blank(self.meta_description),
			og_title: non_blank(self.og_title),
			og_description: non_blank(self.og_description),
			keywords: decode_list(&self.keywords),
			button_text: non_blank(self.button_text),
			button_link: non_blank(self.button_link),
		};

		validate_translation(&translation)?;
		Ok(translation)
	}
}
