// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Edit-boundary validation for translations.
//!
//! Lengths are counted in characters, not bytes, so Vietnamese diacritics
//! count once. Optional SEO fields are only checked when present.

use std::collections::HashSet;

use crate::error::{ValidationError, ValidationErrors};
use crate::translation::Translation;

/// Inclusive character-length bounds for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
	/// Wire name of the field, used in messages.
	pub field: &'static str,
	pub min: usize,
	pub max: usize,
}

impl LengthRule {
	pub const fn new(field: &'static str, min: usize, max: usize) -> Self {
		Self { field, min, max }
	}

	pub fn check(&self, value: &str) -> Option<ValidationError> {
		let actual = value.chars().count();
		if actual < self.min {
			Some(ValidationError::TooShort {
				field: self.field,
				min: self.min,
				actual,
			})
		} else if actual > self.max {
			Some(ValidationError::TooLong {
				field: self.field,
				max: self.max,
				actual,
			})
		} else {
			None
		}
	}
}

pub const META_TITLE: LengthRule = LengthRule::new("metaTitle", 10, 60);
pub const META_DESCRIPTION: LengthRule = LengthRule::new("metaDescription", 50, 160);
pub const OG_TITLE: LengthRule = LengthRule::new("ogTitle", 10, 60);
pub const OG_DESCRIPTION: LengthRule = LengthRule::new("ogDescription", 50, 200);

pub const SEO_RULES: [LengthRule; 4] = [META_TITLE, META_DESCRIPTION, OG_TITLE, OG_DESCRIPTION];

fn seo_fields(translation: &Translation) -> [(&LengthRule, Option<&str>); 4] {
	[
		(&META_TITLE, translation.meta_title.as_deref()),
		(&META_DESCRIPTION, translation.meta_description.as_deref()),
		(&OG_TITLE, translation.og_title.as_deref()),
		(&OG_DESCRIPTION, translation.og_description.as_deref()),
	]
}

fn collect_translation_errors(translation: &Translation, errors: &mut Vec<ValidationError>) {
	if translation.language.trim().is_empty() {
		errors.push(ValidationError::EmptyLanguage);
	}

	for (rule, value) in seo_fields(translation) {
		if let Some(error) = value.and_then(|v| rule.check(v)) {
			errors.push(error);
		}
	}

	if translation.button_text.is_some() != translation.button_link.is_some() {
		errors.push(ValidationError::IncompleteCallToAction);
	}
}

/// Check one translation against the edit rules, collecting every violation.
pub fn validate_translation(translation: &Translation) -> Result<(), ValidationErrors> {
	let mut errors = Vec::new();
	collect_translation_errors(translation, &mut errors);
	ValidationErrors(errors).into_result()
}

/// Check a full translation list: every record, plus language uniqueness.
pub fn validate_translations(translations: &[Translation]) -> Result<(), ValidationErrors> {
	let mut errors = Vec::new();
	let mut seen = HashSet::new();

	for translation in translations {
		collect_translation_errors(translation, &mut errors);

		let language = translation.language.trim();
		if !language.is_empty() && !seen.insert(language) {
			errors.push(ValidationError::DuplicateLanguage(language.to_string()));
		}
	}

	ValidationErrors(errors).into_result()
}
