// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized entities as served by the content API.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::de;
use crate::translation::Translation;

/// Opaque identifier assigned by the content API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(#[serde(deserialize_with = "de::string")] String);

impl EntityId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for EntityId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
	Banner,
	Blog,
	Member,
	Contact,
}

impl EntityKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			EntityKind::Banner => "banner",
			EntityKind::Blog => "blog",
			EntityKind::Member => "member",
			EntityKind::Contact => "contact",
		}
	}
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A record carrying per-language translations.
pub trait Localized {
	fn kind(&self) -> EntityKind;
	fn id(&self) -> &EntityId;
	fn slug(&self) -> Option<&str>;
	/// Translations in API order. Empty for degraded records.
	fn translations(&self) -> &[Translation];
	/// Stored image path, relative or absolute.
	fn image(&self) -> Option<&str>;
}

macro_rules! impl_localized {
	($ty:ty, $kind:expr) => {
		impl Localized for $ty {
			fn kind(&self) -> EntityKind {
				$kind
			}

			fn id(&self) -> &EntityId {
				&self.id
			}

			fn slug(&self) -> Option<&str> {
				self.slug.as_deref()
			}

			fn translations(&self) -> &[Translation] {
				&self.translations
			}

			fn image(&self) -> Option<&str> {
				self.image.as_deref()
			}
		}
	};
}

/// Home page hero banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawBanner")]
pub struct Banner {
	pub id: EntityId,
	pub slug: Option<String>,
	pub image: Option<String>,
	/// Display position on the carousel.
	pub order: Option<i32>,
	pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawBlog")]
pub struct Blog {
	pub id: EntityId,
	pub slug: Option<String>,
	pub image: Option<String>,
	pub date: Option<NaiveDate>,
	pub author: Option<String>,
	pub translations: Vec<Translation>,
}

/// Team member profile. `image` is the avatar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawMember")]
pub struct Member {
	pub id: EntityId,
	pub slug: Option<String>,
	pub image: Option<String>,
	pub email: Option<String>,
	pub phone: Option<String>,
	pub translations: Vec<Translation>,
}

/// Office contact card; the translated body holds the postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawContact")]
pub struct Contact {
	pub id: EntityId,
	pub slug: Option<String>,
	pub image: Option<String>,
	pub phone: Option<String>,
	pub email: Option<String>,
	pub translations: Vec<Translation>,
}

// Wire shapes. Document stores emit `_id`, sometimes alongside an `id`
// virtual, so both keys are read separately and `id` wins when non-blank.

fn pick_id(id: Option<EntityId>, legacy_id: Option<EntityId>) -> EntityId {
	id.filter(|id| !id.as_str().is_empty())
		.or(legacy_id)
		.unwrap_or_default()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBanner {
	#[serde(default)]
	id: Option<EntityId>,
	#[serde(default, rename = "_id")]
	legacy_id: Option<EntityId>,
	#[serde(default, deserialize_with = "de::opt_string")]
	slug: Option<String>,
	#[serde(default, deserialize_with = "de::opt_string")]
	image: Option<String>,
	#[serde(default)]
	order: Option<i32>,
	#[serde(default, deserialize_with = "de::null_as_empty")]
	translations: Vec<Translation>,
}

impl From<RawBanner> for Banner {
	fn from(raw: RawBanner) -> Self {
		Self {
			id: pick_id(raw.id, raw.legacy_id),
			slug: raw.slug,
			image: raw.image,
			order: raw.order,
			translations: raw.translations,
		}
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlog {
	#[serde(default)]
	id: Option<EntityId>,
	#[serde(default, rename = "_id")]
	legacy_id: Option<EntityId>,
	#[serde(default, deserialize_with = "de::opt_string")]
	slug: Option<String>,
	#[serde(default, deserialize_with = "de::opt_string")]
	image: Option<String>,
	#[serde(default, deserialize_with = "de::date")]
	date: Option<NaiveDate>,
	#[serde(default, deserialize_with = "de::opt_string")]
	author: Option<String>,
	#[serde(default, deserialize_with = "de::null_as_empty")]
	translations: Vec<Translation>,
}

impl From<RawBlog> for Blog {
	fn from(raw: RawBlog) -> Self {
		Self {
			id: pick_id(raw.id, raw.legacy_id),
			slug: raw.slug,
			image: raw.image,
			date: raw.date,
			author: raw.author,
			translations: raw.translations,
		}
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMember {
	#[serde(default)]
	id: Option<EntityId>,
	#[serde(default, rename = "_id")]
	legacy_id: Option<EntityId>,
	#[serde(default, deserialize_with = "de::opt_string")]
	slug: Option<String>,
	#[serde(default, deserialize_with = "de::opt_string")]
	image: Option<String>,
	#[serde(default, deserialize_with = "de::opt_string")]
	email: Option<String>,
	#[serde(default, deserialize_with = "de::opt_string")]
	phone: Option<String>,
	#[serde(default, deserialize_with = "de::null_as_empty")]
	translations: Vec<Translation>,
}

impl From<RawMember> for Member {
	fn from(raw: RawMember) -> Self {
		Self {
			id: pick_id(raw.id, raw.legacy_id),
			slug: raw.slug,
			image: raw.image,
			email: raw.email,
			phone: raw.phone,
			translations: raw.translations,
		}
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContact {
	#[serde(default)]
	id: Option<EntityId>,
	#[serde(default, rename = "_id")]
	legacy_id: Option<EntityId>,
	#[serde(default, deserialize_with = "de::opt_string")]
	slug: Option<String>,
	#[serde(default, deserialize_with = "de::opt_string")]
	image: Option<String>,
	#[serde(default, deserialize_with = "de::opt_string")]
	phone: Option<String>,
	#[serde(default, deserialize_with = "de::opt_string")]
	email: Option<String>,
	#[serde(default, deserialize_with = "de::null_as_empty")]
	translations: Vec<Translation>,
}

impl From<RawContact> for Contact {
	fn from(raw: RawContact) -> Self {
		Self {
			id: pick_id(raw.id, raw.legacy_id),
			slug: raw.slug,
			image: raw.image,
			phone: raw.phone,
			email: raw.email,
			translations: raw.translations,
		}
	}
}

impl_localized!(Banner, EntityKind::Banner);
impl_localized!(Blog, EntityKind::Blog);
impl_localized!(Member, EntityKind::Member);
impl_localized!(Contact, EntityKind::Contact);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_banner_from_api() {
		let banner: Banner = serde_json::from_str(
			r#"{
				"_id": "65f1c0",
				"image": "/uploads/banner.png",
				"order": 2,
				"translations": [
					{"language": "vi", "title": "Chào mừng", "buttonText": "Liên hệ", "buttonLink": "/lien-he"},
					{"language": "en", "title": "Welcome", "buttonText": "Contact", "buttonLink": "/contact"}
				]
			}"#,
		)
		.unwrap();

		assert_eq!(banner.kind(), EntityKind::Banner);
		assert_eq!(banner.id().as_str(), "65f1c0");
		assert_eq!(banner.image(), Some("/uploads/banner.png"));
		assert_eq!(banner.order, Some(2));
		assert_eq!(banner.translations().len(), 2);
		assert!(banner.translations()[1].has_call_to_action());
	}

	#[test]
	fn test_blog_with_date_and_string_keywords() {
		let blog: Blog = serde_json::from_str(
			r#"{
				"id": "b-1",
				"slug": "hello-world",
				"date": "2024-05-01",
				"translations": [{"language": "en", "title": "Hello", "keywords": "rust, , web"}]
			}"#,
		)
		.unwrap();

		assert_eq!(blog.slug(), Some("hello-world"));
		assert_eq!(blog.date, NaiveDate::from_ymd_opt(2024, 5, 1));
		assert_eq!(blog.translations()[0].keywords, vec!["rust", "web"]);
	}

	#[test]
	fn test_numeric_id() {
		let member: Member = serde_json::from_str(r#"{"id": 17}"#).unwrap();
		assert_eq!(member.id().as_str(), "17");
	}

	#[test]
	fn test_missing_and_null_translations() {
		let member: Member = serde_json::from_str(r#"{"id": "m1"}"#).unwrap();
		assert!(member.translations().is_empty());

		let contact: Contact =
			serde_json::from_str(r#"{"id": "c1", "translations": null}"#).unwrap();
		assert!(contact.translations().is_empty());
	}

	#[test]
	fn test_blank_slug_is_absent() {
		let blog: Blog = serde_json::from_str(r#"{"id": "b", "slug": ""}"#).unwrap();
		assert!(blog.slug().is_none());
	}

	#[test]
	fn test_contact_address_alias() {
		let contact: Contact = serde_json::from_str(
			r#"{"id": "c", "phone": "+84 28 1234", "translations": [{"language": "en", "name": "HCMC office", "address": "District 1"}]}"#,
		)
		.unwrap();
		let t = &contact.translations()[0];
		assert_eq!(t.title, "HCMC office");
		assert_eq!(t.description, "District 1");
		assert_eq!(contact.phone.as_deref(), Some("+84 28 1234"));
	}

	#[test]
	fn test_both_id_keys_present() {
		let blog: Blog = serde_json::from_str(
			r#"{"_id": "mongo-1", "id": "post-1", "translations": [{"language": "en", "title": "Hi"}]}"#,
		)
		.unwrap();
		assert_eq!(blog.id().as_str(), "post-1");
		assert_eq!(blog.translations().len(), 1);

		let banner: Banner = serde_json::from_str(r#"{"id": null, "_id": "65f1c0"}"#).unwrap();
		assert_eq!(banner.id().as_str(), "65f1c0");

		let contact: Contact = serde_json::from_str(r#"{"id": "", "_id": 9}"#).unwrap();
		assert_eq!(contact.id().as_str(), "9");
	}

	#[test]
	fn test_serializes_plain_id() {
		let member: Member = serde_json::from_str(r#"{"_id": "m1"}"#).unwrap();
		let json = serde_json::to_value(&member).unwrap();
		assert_eq!(json["id"], "m1");
		assert!(json.get("_id").is_none());
	}

	#[test]
	fn test_kind_display() {
		assert_eq!(EntityKind::Member.to_string(), "member");
		assert_eq!(
			serde_json::to_string(&EntityKind::Contact).unwrap(),
			"\"contact\""
		);
	}
}
