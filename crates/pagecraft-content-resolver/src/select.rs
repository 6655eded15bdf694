// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation selection.
//!
//! No entity is guaranteed to have a translation in any particular locale, so
//! the default policy falls back to whatever translation comes first in the
//! list. A site may opt into trying its default locale before that.

use pagecraft_content_core::{Localized, Translation};
use serde::Serialize;
use tracing::trace;

/// What to show when the requested locale has no translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
	/// Use the first translation in list order.
	#[default]
	FirstAvailable,
	/// Try this locale first, then the first translation in list order.
	PreferLocale(String),
}

/// Which rule produced a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRule {
	/// The requested locale matched.
	Exact,
	/// The policy's preferred locale matched.
	PreferredLocale,
	/// The first translation in list order was used.
	FirstAvailable,
	/// No translations; the caller's placeholder was used.
	Placeholder,
}

impl SelectionRule {
	/// Whether the reader sees content in a language they did not ask for.
	pub fn is_degraded(&self) -> bool {
		!matches!(self, SelectionRule::Exact)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
	pub translation: &'a Translation,
	pub rule: SelectionRule,
}

fn find<'a>(translations: &'a [Translation], locale: &str) -> Option<&'a Translation> {
	translations.iter().find(|t| t.is_language(locale))
}

/// Select a translation under `policy`, reporting which rule applied.
///
/// Never fails: absent or empty `translations` yield `fallback`. When several
/// records share a language the first one in list order wins.
pub fn select_with_policy<'a>(
	translations: Option<&'a [Translation]>,
	requested_locale: &str,
	fallback: &'a Translation,
	policy: &FallbackPolicy,
) -> Selection<'a> {
	let translations = translations.unwrap_or_default();

	let selection = if let Some(t) = find(translations, requested_locale) {
		Selection {
			translation: t,
			rule: SelectionRule::Exact,
		}
	} else if let Some(t) = match policy {
		FallbackPolicy::PreferLocale(locale) => find(translations, locale),
		FallbackPolicy::FirstAvailable => None,
	} {
		Selection {
			translation: t,
			rule: SelectionRule::PreferredLocale,
		}
	} else if let Some(t) = translations.first() {
		Selection {
			translation: t,
			rule: SelectionRule::FirstAvailable,
		}
	} else {
		Selection {
			translation: fallback,
			rule: SelectionRule::Placeholder,
		}
	};

	trace!(
		requested = requested_locale,
		selected = %selection.translation.language,
		rule = ?selection.rule,
		available = translations.len(),
		"selected translation"
	);
	selection
}

/// Pick the translation to display for `requested_locale`.
///
/// Returns the first translation whose language matches, else the first
/// translation in the list, else `fallback`.
///
/// # Example
///
/// ```
/// use pagecraft_content_core::Translation;
/// use pagecraft_content_resolver::select_translation;
///
/// let translations = vec![
///     Translation { language: "vi".into(), title: "Xin chào".into(), ..Default::default() },
///     Translation { language: "en".into(), title: "Hello".into(), ..Default::default() },
/// ];
/// let fallback = Translation::placeholder("N/A");
///
/// assert_eq!(select_translation(Some(translations.as_slice()), "en", &fallback).title, "Hello");
/// assert_eq!(select_translation(Some(translations.as_slice()), "fr", &fallback).title, "Xin chào");
/// assert_eq!(select_translation(None, "en", &fallback).title, "N/A");
/// ```
pub fn select_translation<'a>(
	translations: Option<&'a [Translation]>,
	requested_locale: &str,
	fallback: &'a Translation,
) -> &'a Translation {
	select_with_policy(
		translations,
		requested_locale,
		fallback,
		&FallbackPolicy::FirstAvailable,
	)
	.translation
}

/// Select a translation from an entity's own list.
pub fn select_for<'a, E>(
	entity: &'a E,
	requested_locale: &str,
	fallback: &'a Translation,
	policy: &FallbackPolicy,
) -> Selection<'a>
where
	E: Localized + ?Sized,
{
	select_with_policy(
		Some(entity.translations()),
		requested_locale,
		fallback,
		policy,
	)
}
