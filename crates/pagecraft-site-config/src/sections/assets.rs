// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Asset hosting configuration section.

use serde::{Deserialize, Serialize};

/// Origin of the content API when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfigLayer {
	pub base_url: Option<String>,
}

impl AssetsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	/// Apply defaults. Trailing slashes are trimmed so stored `/path` values
	/// concatenate cleanly.
	pub fn finalize(self) -> AssetsConfig {
		let base_url = self
			.base_url
			.map(|url| url.trim().trim_end_matches('/').to_string())
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		AssetsConfig { base_url }
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
	/// Origin prepended to relative image paths.
	pub base_url: String,
}

impl Default for AssetsConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}
}
