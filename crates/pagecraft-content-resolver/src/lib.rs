// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized content resolution for Pagecraft pages.
//!
//! This crate decides what a page shows for a localized entity:
//!
//! - which [`Translation`](pagecraft_content_core::Translation) is displayed
//!   for a requested locale ([`select_translation`], [`FallbackPolicy`])
//! - which locale a request is served in ([`resolve_locale`],
//!   [`negotiate_locale`])
//! - where the entity's image lives ([`resolve_asset_url`])
//!
//! Every function is pure and never fails; missing data degrades to
//! fallbacks. [`Resolver`] bundles the site settings and produces
//! [`LocalizedView`]s ready for rendering.
//!
//! # Example
//!
//! ```
//! use pagecraft_content_core::Blog;
//! use pagecraft_content_resolver::{Resolver, SelectionRule};
//!
//! let blog: Blog = serde_json::from_str(r#"{
//!     "id": "b1",
//!     "image": "/uploads/cover.png",
//!     "translations": [
//!         {"language": "vi", "title": "Xin chào"},
//!         {"language": "en", "title": "Hello"}
//!     ]
//! }"#).unwrap();
//!
//! let resolver = Resolver::new("https://cdn.example.com");
//! let view = resolver.localize(&blog, "en");
//!
//! assert_eq!(view.translation.title, "Hello");
//! assert_eq!(view.rule, SelectionRule::Exact);
//! assert_eq!(view.image_url, "https://cdn.example.com/uploads/cover.png");
//! ```

mod asset;
mod resolve;
mod select;
mod view;

pub use asset::resolve_asset_url;
pub use resolve::{negotiate_locale, resolve_locale};
pub use select::{
	select_for, select_translation, select_with_policy, FallbackPolicy, Selection, SelectionRule,
};
pub use view::{LocalizedView, Resolver};

#[cfg(test)]
mod tests {
	use super::*;
	use pagecraft_site_config::SiteConfig;

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn test_public_types_are_send_sync() {
		assert_send_sync::<Resolver>();
		assert_send_sync::<LocalizedView>();
		assert_send_sync::<Selection<'static>>();
		assert_send_sync::<FallbackPolicy>();
		assert_send_sync::<SelectionRule>();
		assert_send_sync::<SiteConfig>();
		assert_send_sync::<pagecraft_content_core::Blog>();
		assert_send_sync::<pagecraft_content_core::Translation>();
	}
}
