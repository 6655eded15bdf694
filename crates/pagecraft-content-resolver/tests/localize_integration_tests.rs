// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end tests for localized content resolution.
//!
//! Tests cover:
//! - Raw API payloads through selection, codec and asset resolution
//! - Degraded payloads (missing lists, wrong field types)
//! - The admin edit cycle back into a submittable translation
//! - Resolvers built from layered site configuration

use std::io::Write;

use pagecraft_content_core::{
	decode_list, encode_list, Banner, Blog, Contact, Localized, Member, Translation, TranslationForm,
};
use pagecraft_content_resolver::{
	negotiate_locale, resolve_asset_url, select_translation, Resolver, SelectionRule,
};
use pagecraft_site_config::{
	load_from_sources, ConfigSource, DefaultsSource, FallbackMode, TomlSource,
};

const CDN: &str = "https://cdn.example.com";

#[test]
fn test_requested_locale_found_past_index_zero() {
	let blog: Blog = serde_json::from_str(
		r#"{"id": "b1", "translations": [
			{"language": "vi", "title": "Xin chào"},
			{"language": "en", "title": "Hello"}
		]}"#,
	)
	.unwrap();
	let fallback = Translation::placeholder("N/A");

	let selected = select_translation(Some(blog.translations()), "en", &fallback);
	assert_eq!(selected.language, "en");
	assert_eq!(selected.title, "Hello");
}

#[test]
fn test_empty_translations_return_fallback_unchanged() {
	let blog: Blog = serde_json::from_str(r#"{"id": "b1", "translations": []}"#).unwrap();
	let fallback = Translation::placeholder("N/A");

	let selected = select_translation(Some(blog.translations()), "en", &fallback);
	assert_eq!(selected, &fallback);
	assert_eq!(selected.title, "N/A");
}

#[test]
fn test_codec_examples() {
	assert_eq!(decode_list("a, , b,,c"), vec!["a", "b", "c"]);
	let xs = vec!["offshore".to_string(), "web development".to_string()];
	assert_eq!(decode_list(&encode_list(&xs)), xs);
}

#[test]
fn test_asset_examples() {
	assert_eq!(resolve_asset_url(None, CDN), "");
	assert_eq!(
		resolve_asset_url(Some("https://other.com/x.png"), CDN),
		"https://other.com/x.png"
	);
	assert_eq!(
		resolve_asset_url(Some("/images/a.png"), CDN),
		"https://cdn.example.com/images/a.png"
	);
}

#[test]
fn test_home_page_banners() {
	let banners: Vec<Banner> = serde_json::from_str(
		r#"[
			{
				"_id": "1",
				"image": "/uploads/hero.jpg",
				"translations": [
					{"language": "en", "title": "Build with us", "buttonText": "Talk to sales", "buttonLink": "/contact", "keywords": ["outsourcing", "teams"]},
					{"language": "vi", "title": "Xây dựng cùng chúng tôi", "buttonText": "Liên hệ", "buttonLink": "/lien-he"}
				]
			},
			{
				"_id": "2",
				"image": "https://images.example.org/remote.png",
				"translations": null
			}
		]"#,
	)
	.unwrap();

	let resolver = Resolver::new(CDN).with_placeholder(Translation::placeholder("Coming soon"));
	let views = resolver.localize_all(&banners, "vi");

	assert_eq!(views.len(), 2);
	assert_eq!(views[0].translation.title, "Xây dựng cùng chúng tôi");
	assert_eq!(views[0].translation.button_link.as_deref(), Some("/lien-he"));
	assert_eq!(views[0].image_url, "https://cdn.example.com/uploads/hero.jpg");
	assert_eq!(views[0].keywords_text, "");

	assert_eq!(views[1].rule, SelectionRule::Placeholder);
	assert_eq!(views[1].translation.title, "Coming soon");
	assert_eq!(views[1].image_url, "https://images.example.org/remote.png");
}

#[test]
fn test_malformed_payload_degrades() {
	let member: Member = serde_json::from_str(
		r#"{
			"id": 42,
			"image": null,
			"phone": 2812345678,
			"translations": [{"language": "en", "name": null, "keywords": {"oops": true}}]
		}"#,
	)
	.unwrap();

	let view = Resolver::new(CDN).localize(&member, "en");
	assert_eq!(view.id.as_str(), "42");
	assert_eq!(view.translation.title, "");
	assert!(view.translation.keywords.is_empty());
	assert_eq!(view.image_url, "");
	assert_eq!(member.phone.as_deref(), Some("2812345678"));
}

#[test]
fn test_contact_page_from_accept_language() {
	let contact: Contact = serde_json::from_str(
		r#"{"id": "hcm", "translations": [
			{"language": "en", "name": "Ho Chi Minh City", "address": "District 1"},
			{"language": "vi", "name": "TP. Hồ Chí Minh", "address": "Quận 1"}
		]}"#,
	)
	.unwrap();

	let locale = negotiate_locale("vi-VN,vi;q=0.9,en;q=0.8", "en");
	let view = Resolver::new(CDN).localize(&contact, locale);
	assert_eq!(view.locale, "vi");
	assert_eq!(view.translation.description, "Quận 1");
}

#[test]
fn test_admin_edit_cycle() {
	let blog: Blog = serde_json::from_str(
		r#"{"id": "b1", "slug": "hello", "translations": [
			{"language": "en", "title": "Hello", "keywords": ["rust", "web"]}
		]}"#,
	)
	.unwrap();

	let mut form = TranslationForm::from(&blog.translations()[0]);
	assert_eq!(form.keywords, "rust, web");

	form.keywords.push_str(", , cloud ");
	let updated = form.into_translation().unwrap();
	assert_eq!(updated.keywords, vec!["rust", "web", "cloud"]);

	// The fetched entity is untouched.
	assert_eq!(blog.translations()[0].keywords, vec!["rust", "web"]);
}

#[test]
fn test_resolver_from_config_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(
		file,
		"[assets]\nbase_url = \"https://media.example.com/\"\n\n[locale]\ndefault_locale = \"en\"\nfallback_policy = \"prefer_default\""
	)
	.unwrap();

	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(file.path())),
	];
	let config = load_from_sources(sources).unwrap();
	assert_eq!(config.locale.fallback_policy, FallbackMode::PreferDefault);

	let member: Member = serde_json::from_str(
		r#"{"id": "m", "image": "/a.png", "translations": [
			{"language": "ko", "name": "Kim"},
			{"language": "en", "name": "Kim (EN)"}
		]}"#,
	)
	.unwrap();

	let view = Resolver::from_config(&config).localize(&member, "vi");
	assert_eq!(view.rule, SelectionRule::PreferredLocale);
	assert_eq!(view.translation.title, "Kim (EN)");
	assert_eq!(view.image_url, "https://media.example.com/a.png");
}
