// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::SiteConfigLayer;
use crate::sections::{AssetsConfigLayer, FallbackMode, LocaleConfigLayer, LoggingConfigLayer};

/// Default location of the site configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/pagecraft/site.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<SiteConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(SiteConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(SiteConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: SiteConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: PAGECRAFT_<SECTION>_<FIELD>, plus `PAGECRAFT_DEFAULT_LOCALE`,
/// `PAGECRAFT_FALLBACK_POLICY` and `PAGECRAFT_LOG_LEVEL`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_from(|name| std::env::var(name).ok())
	}
}

/// Build a layer from a variable lookup. Empty values count as unset.
fn load_from<F>(lookup: F) -> Result<SiteConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	let fallback_policy = match var("PAGECRAFT_FALLBACK_POLICY") {
		Some(v) => Some(v.parse::<FallbackMode>().map_err(|message| {
			ConfigError::InvalidValue {
				key: "PAGECRAFT_FALLBACK_POLICY".to_string(),
				message,
			}
		})?),
		None => None,
	};

	Ok(SiteConfigLayer {
		assets: Some(AssetsConfigLayer {
			base_url: var("PAGECRAFT_ASSETS_BASE_URL"),
		}),
		locale: Some(LocaleConfigLayer {
			default_locale: var("PAGECRAFT_DEFAULT_LOCALE"),
			fallback_policy,
		}),
		logging: Some(LoggingConfigLayer {
			level: var("PAGECRAFT_LOG_LEVEL"),
		}),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::io::Write;

	fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name| map.get(name).cloned()
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn test_env_values() {
		let layer = load_from(env(&[
			("PAGECRAFT_ASSETS_BASE_URL", "https://cdn.example.com"),
			("PAGECRAFT_DEFAULT_LOCALE", "vi"),
			("PAGECRAFT_FALLBACK_POLICY", "prefer_default"),
			("PAGECRAFT_LOG_LEVEL", "debug"),
		]))
		.unwrap();

		assert_eq!(
			layer.assets.unwrap().base_url.as_deref(),
			Some("https://cdn.example.com")
		);
		let locale = layer.locale.unwrap();
		assert_eq!(locale.default_locale.as_deref(), Some("vi"));
		assert_eq!(locale.fallback_policy, Some(FallbackMode::PreferDefault));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
	}

	#[test]
	fn test_env_empty_values_are_unset() {
		let layer = load_from(env(&[("PAGECRAFT_ASSETS_BASE_URL", "")])).unwrap();
		assert!(layer.assets.unwrap().base_url.is_none());
	}

	#[test]
	fn test_env_invalid_policy() {
		let err = load_from(env(&[("PAGECRAFT_FALLBACK_POLICY", "random")])).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PAGECRAFT_FALLBACK_POLICY"));
	}

	#[test]
	fn test_toml_missing_file_is_empty() {
		let source = TomlSource::new("/nonexistent/pagecraft/site.toml");
		assert_eq!(source.load().unwrap(), SiteConfigLayer::default());
	}

	#[test]
	fn test_toml_file_loads() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[assets]\nbase_url = \"https://files.example.com\"").unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(
			layer.assets.unwrap().base_url.as_deref(),
			Some("https://files.example.com")
		);
	}

	#[test]
	fn test_toml_parse_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[assets\nbase_url = ").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}
}
