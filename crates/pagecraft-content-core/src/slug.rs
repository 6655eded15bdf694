// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Routing slugs.
//!
//! Slugs are trimmed, non-empty keys made of lowercase ASCII letters, digits
//! and single hyphens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
	pub fn parse(s: &str) -> Result<Self, ContentError> {
		if is_valid_slug(s) {
			Ok(Self(s.to_string()))
		} else {
			Err(ContentError::InvalidSlug(s.to_string()))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Slug {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for Slug {
	type Err = ContentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<String> for Slug {
	type Error = ContentError;

	fn try_from(s: String) -> Result<Self, Self::Error> {
		Self::parse(&s)
	}
}

impl From<Slug> for String {
	fn from(slug: Slug) -> Self {
		slug.0
	}
}

fn is_valid_slug(value: &str) -> bool {
	!value.is_empty()
		&& !value.starts_with('-')
		&& !value.ends_with('-')
		&& !value.contains("--")
		&& value
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// Vietnamese vowels with tone and quality marks, folded to their base letter.
const FOLDS: &[(char, &str)] = &[
	('a', "àáảãạăằắẳẵặâầấẩẫậ"),
	('e', "èéẻẽẹêềếểễệ"),
	('i', "ìíỉĩị"),
	('o', "òóỏõọôồốổỗộơờớởỡợ"),
	('u', "ùúủũụưừứửữự"),
	('y', "ỳýỷỹỵ"),
	('d', "đ"),
];

fn fold(c: char) -> char {
	FOLDS
		.iter()
		.find(|(_, variants)| variants.contains(c))
		.map(|(base, _)| *base)
		.unwrap_or(c)
}

/// Derive a slug candidate from a display title.
///
/// Returns an empty string when the title has no usable characters; callers
/// must still run the result through [`Slug::parse`].
///
/// # Example
///
/// ```
/// use pagecraft_content_core::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("Dịch vụ phần mềm"), "dich-vu-phan-mem");
/// ```
pub fn slugify(title: &str) -> String {
	let mut slug = String::with_capacity(title.len());
	let mut pending_hyphen = false;

	for c in title.chars().flat_map(char::to_lowercase).map(fold) {
		if c.is_ascii_lowercase() || c.is_ascii_digit() {
			if pending_hyphen && !slug.is_empty() {
				slug.push('-');
			}
			pending_hyphen = false;
			slug.push(c);
		} else {
			pending_hyphen = true;
		}
	}

	slug
}
