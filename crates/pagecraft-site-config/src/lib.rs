// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site configuration for Pagecraft.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Validation of the asset base URL and default locale
//! - Consistent environment variable naming (`PAGECRAFT_*`)
//! - Tracing subscriber setup driven by the logging section
//!
//! # Usage
//!
//! ```ignore
//! use pagecraft_site_config::{init_tracing, load_config};
//!
//! let config = load_config()?;
//! init_tracing(&config.logging)?;
//! println!("Assets served from {}", config.assets.base_url);
//! ```

pub mod error;
pub mod layer;
pub mod logging;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::SiteConfigLayer;
pub use logging::{env_filter, init_tracing};
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH};

use pagecraft_content_core::is_supported;
use tracing::{debug, info};

/// Fully resolved site configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
	pub assets: AssetsConfig,
	pub locale: LocaleConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`PAGECRAFT_*`)
/// 2. Config file (`/etc/pagecraft/site.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<SiteConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<SiteConfig, ConfigError> {
	let mut merged = SiteConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<SiteConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<SiteConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = SiteConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: SiteConfigLayer) -> Result<SiteConfig, ConfigError> {
	let assets = layer.assets.unwrap_or_default().finalize();
	let locale = layer.locale.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&assets, &locale)?;

	info!(
		base_url = %assets.base_url,
		default_locale = %locale.default_locale,
		fallback_policy = %locale.fallback_policy,
		log_level = %logging.level,
		"Site configuration loaded"
	);

	Ok(SiteConfig {
		assets,
		locale,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(assets: &AssetsConfig, locale: &LocaleConfig) -> Result<(), ConfigError> {
	if !(assets.base_url.starts_with("http://") || assets.base_url.starts_with("https://")) {
		return Err(ConfigError::Validation(format!(
			"assets.base_url must be an http(s) origin, got '{}'",
			assets.base_url
		)));
	}

	if !is_supported(&locale.default_locale) {
		return Err(ConfigError::Validation(format!(
			"locale.default_locale '{}' is not a supported locale",
			locale.default_locale
		)));
	}

	Ok(())
}
