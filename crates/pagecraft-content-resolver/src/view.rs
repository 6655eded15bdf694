// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized read views for page rendering.

use pagecraft_content_core::{encode_list, EntityId, EntityKind, Localized, Translation, DEFAULT_LOCALE};
use pagecraft_site_config::{FallbackMode, SiteConfig};
use serde::Serialize;
use tracing::{debug, warn};

use crate::asset::resolve_asset_url;
use crate::resolve::resolve_locale;
use crate::select::{select_for, FallbackPolicy, Selection, SelectionRule};

/// An entity flattened to what a page needs for one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedView {
	pub kind: EntityKind,
	pub id: EntityId,
	pub slug: Option<String>,
	/// Locale the page asked for; `translation.language` may differ.
	pub locale: String,
	pub rule: SelectionRule,
	pub translation: Translation,
	/// Absolute image URL, or `""` when the entity has no image.
	pub image_url: String,
	/// Keywords joined for display and `<meta name="keywords">`.
	pub keywords_text: String,
}

/// Stateless content resolver bound to one site's settings.
///
/// Cheap to clone and safe to share between request handlers.
#[derive(Debug, Clone)]
pub struct Resolver {
	base_url: String,
	default_locale: String,
	policy: FallbackPolicy,
	placeholder: Translation,
}

impl Resolver {
	/// A resolver using positional fallback and an empty placeholder.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			default_locale: DEFAULT_LOCALE.to_string(),
			policy: FallbackPolicy::FirstAvailable,
			placeholder: Translation::default(),
		}
	}

	pub fn from_config(config: &SiteConfig) -> Self {
		let default_locale = config.locale.default_locale.clone();
		let policy = match config.locale.fallback_policy {
			FallbackMode::FirstAvailable => FallbackPolicy::FirstAvailable,
			FallbackMode::PreferDefault => FallbackPolicy::PreferLocale(default_locale.clone()),
		};

		Self {
			base_url: config.assets.base_url.clone(),
			default_locale,
			policy,
			placeholder: Translation::default(),
		}
	}

	pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
		self.default_locale = locale.into();
		self
	}

	/// Placeholder shown for entities with no translations at all.
	pub fn with_placeholder(mut self, placeholder: Translation) -> Self {
		self.placeholder = placeholder;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn policy(&self) -> &FallbackPolicy {
		&self.policy
	}

	/// Resolve the page locale from a requested one, using the site default.
	pub fn page_locale(&self, requested: Option<&str>) -> &'static str {
		resolve_locale(requested, &self.default_locale)
	}

	pub fn asset_url(&self, path: Option<&str>) -> String {
		resolve_asset_url(path, &self.base_url)
	}

	pub fn select<'a, E>(&'a self, entity: &'a E, locale: &str) -> Selection<'a>
	where
		E: Localized + ?Sized,
	{
		select_for(entity, locale, &self.placeholder, &self.policy)
	}

	/// Build the read view of `entity` for `locale`.
	pub fn localize<E>(&self, entity: &E, locale: &str) -> LocalizedView
	where
		E: Localized + ?Sized,
	{
		let selection = self.select(entity, locale);

		match selection.rule {
			SelectionRule::Exact => {}
			SelectionRule::Placeholder => warn!(
				kind = %entity.kind(),
				id = %entity.id(),
				locale,
				"entity has no translations, rendering placeholder"
			),
			rule => debug!(
				kind = %entity.kind(),
				id = %entity.id(),
				locale,
				shown = %selection.translation.language,
				?rule,
				"requested locale missing, using fallback translation"
			),
		}

		LocalizedView {
			kind: entity.kind(),
			id: entity.id().clone(),
			slug: entity.slug().map(str::to_string),
			locale: locale.to_string(),
			rule: selection.rule,
			keywords_text: encode_list(&selection.translation.keywords),
			translation: selection.translation.clone(),
			image_url: self.asset_url(entity.image()),
		}
	}

	/// Localize a list of entities, keeping their order.
	pub fn localize_all<'e, E, I>(&self, entities: I, locale: &str) -> Vec<LocalizedView>
	where
		E: Localized + 'e,
		I: IntoIterator<Item = &'e E>,
	{
		entities
			.into_iter()
			.map(|entity| self.localize(entity, locale))
			.collect()
	}
}
