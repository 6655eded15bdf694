// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for content edit operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised at the admin edit boundary.
///
/// Read paths never produce these; they degrade instead.
#[derive(Debug, Error)]
pub enum ContentError {
	#[error("invalid slug {0:?}: use lowercase letters, digits and hyphens")]
	InvalidSlug(String),

	#[error(transparent)]
	Validation(#[from] ValidationErrors),
}

/// A single rule violation on a translation being edited.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("translation language must not be empty")]
	EmptyLanguage,

	#[error("duplicate translation for language {0:?}")]
	DuplicateLanguage(String),

	#[error("{field} must be at least {min} characters (got {actual})")]
	TooShort {
		field: &'static str,
		min: usize,
		actual: usize,
	},

	#[error("{field} must be at most {max} characters (got {actual})")]
	TooLong {
		field: &'static str,
		max: usize,
		actual: usize,
	},

	#[error("buttonText and buttonLink must be provided together")]
	IncompleteCallToAction,
}

/// Every violation found on a submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
	pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// `Ok(())` when nothing was collected.
	pub fn into_result(self) -> std::result::Result<(), Self> {
		if self.0.is_empty() {
			Ok(())
		} else {
			Err(self)
		}
	}
}

fn join_errors(errors: &[ValidationError]) -> String {
	errors
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}
