// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for Pagecraft localized content.
//!
//! This crate provides the shared content model used by the public site and
//! the admin panel. Every publishable record (banner, blog post, team member,
//! contact office) carries a list of per-language [`Translation`] records.
//!
//! # Overview
//!
//! - [`Banner`], [`Blog`], [`Member`], [`Contact`]: entities as served by the
//!   content API, deserialized tolerantly (missing or `null` lists become
//!   empty, keyword fields may arrive as arrays or comma-separated strings)
//! - [`encode_list`] / [`decode_list`]: the list-field codec shared by edit
//!   forms and rendering
//! - [`TranslationForm`]: the admin edit representation, validated on the
//!   way back into a [`Translation`]
//! - [`LOCALES`]: the locales the site publishes in
//!
//! # Example
//!
//! ```
//! use pagecraft_content_core::{decode_list, encode_list, Blog, Localized};
//!
//! let blog: Blog = serde_json::from_str(r#"{
//!     "id": "b1",
//!     "translations": [{"language": "en", "title": "Hello", "keywords": "rust, web"}]
//! }"#).unwrap();
//!
//! assert_eq!(blog.translations()[0].keywords, vec!["rust", "web"]);
//! assert_eq!(encode_list(&blog.translations()[0].keywords), "rust, web");
//! assert_eq!(decode_list("a, , b,,c"), vec!["a", "b", "c"]);
//! ```

mod de;

pub mod entity;
pub mod error;
pub mod form;
pub mod list;
pub mod locale;
pub mod slug;
pub mod translation;
pub mod validate;

pub use entity::{Banner, Blog, Contact, EntityId, EntityKind, Localized, Member};
pub use error::{ContentError, Result, ValidationError, ValidationErrors};
pub use form::TranslationForm;
pub use list::{decode_list, decode_list_opt, encode_list};
pub use locale::{available_locales, is_supported, locale_info, LocaleInfo, DEFAULT_LOCALE, LOCALES};
pub use slug::{slugify, Slug};
pub use translation::Translation;
pub use validate::{validate_translation, validate_translations, LengthRule, SEO_RULES};

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn slugified_titles_are_valid_slugs(title in "[A-Za-z][A-Za-z0-9 ]{0,40}") {
			let slug = slugify(&title);
			prop_assert!(Slug::parse(&slug).is_ok());
		}

		#[test]
		fn form_keywords_survive_edit_cycle(
			keywords in proptest::collection::vec("[a-z][a-z0-9 ]{0,10}[a-z0-9]", 0..6)
		) {
			let translation = Translation {
				language: "en".to_string(),
				title: "Title".to_string(),
				keywords: keywords.clone(),
				..Default::default()
			};
			let form = TranslationForm::from(&translation);
			let back = form.into_translation().unwrap();
			prop_assert_eq!(back.keywords, keywords);
		}
	}
}
