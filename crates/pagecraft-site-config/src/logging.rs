// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing subscriber setup for processes embedding the resolver.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ConfigError;
use crate::sections::LoggingConfig;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return Ok(filter);
	}

	EnvFilter::try_new(&config.level).map_err(|e| ConfigError::InvalidValue {
		key: "logging.level".to_string(),
		message: e.to_string(),
	})
}

/// Install the global fmt subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
	tracing_subscriber::registry()
		.with(env_filter(config)?)
		.with(tracing_subscriber::fmt::layer())
		.try_init()
		.map_err(|e| ConfigError::Logging(e.to_string()))
}
