// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections. Each has a partial `*ConfigLayer` that sources
//! produce and merge, and a resolved `*Config` with defaults applied.

mod assets;
mod locale;
mod logging;

pub use assets::{AssetsConfig, AssetsConfigLayer, DEFAULT_BASE_URL};
pub use locale::{FallbackMode, LocaleConfig, LocaleConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer, DEFAULT_LOG_LEVEL};
