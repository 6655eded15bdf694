// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tolerant deserializers for content API payloads.
//!
//! The content API is not strict about shapes: strings arrive as `null` or
//! numbers, lists arrive as comma-separated strings. These helpers normalize
//! every such variant into the strict model types instead of failing the
//! whole payload.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use tracing::warn;

use crate::list::{decode_list, normalize_list};

/// A scalar that may be missing or of the wrong type.
struct LenientString(Option<String>);

impl<'de> Deserialize<'de> for LenientString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(LenientStringVisitor).map(LenientString)
	}
}

struct LenientStringVisitor;

impl<'de> Visitor<'de> for LenientStringVisitor {
	type Value = Option<String>;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("a string, number, boolean or null")
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		Ok(Some(v.to_string()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
		Ok(Some(v))
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
		Ok(Some(v.to_string()))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
		Ok(Some(v.to_string()))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
		Ok(Some(v.to_string()))
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
		Ok(Some(v.to_string()))
	}

	fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(None)
	}

	fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(None)
	}

	fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(self)
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		while seq.next_element::<IgnoredAny>()?.is_some() {}
		Ok(None)
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
		Ok(None)
	}
}

/// Deserialize any scalar into a `String`, mapping `null` and non-scalars to `""`.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(LenientString::deserialize(deserializer)?.0.unwrap_or_default())
}

/// Deserialize an optional text field, mapping `null`, blanks and non-scalars to `None`.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(LenientString::deserialize(deserializer)?
		.0
		.filter(|s| !s.trim().is_empty()))
}

struct ListVisitor;

impl<'de> Visitor<'de> for ListVisitor {
	type Value = Vec<String>;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("a list of strings or a comma-separated string")
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		Ok(decode_list(v))
	}

	fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(Vec::new())
	}

	fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(Vec::new())
	}

	fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
		Ok(Vec::new())
	}

	fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
		Ok(Vec::new())
	}

	fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
		Ok(Vec::new())
	}

	fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
		Ok(Vec::new())
	}

	fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(self)
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut values = Vec::new();
		while let Some(LenientString(value)) = seq.next_element()? {
			values.extend(value);
		}
		Ok(normalize_list(values))
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
		Ok(Vec::new())
	}
}

/// Deserialize a list field given either as an array or as comma-separated text.
pub(crate) fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	deserializer.deserialize_any(ListVisitor)
}

/// Deserialize a sequence, treating `null` as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a date given as RFC 3339 or `YYYY-MM-DD`; anything else is dropped.
pub(crate) fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
	D: Deserializer<'de>,
{
	let Some(raw) = opt_string(deserializer)? else {
		return Ok(None);
	};
	let raw = raw.trim();

	if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
		return Ok(Some(parsed.date_naive()));
	}
	if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
		return Ok(Some(parsed));
	}

	warn!(value = raw, "ignoring unparseable content date");
	Ok(None)
}
