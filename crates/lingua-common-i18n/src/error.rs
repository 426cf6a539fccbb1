// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog loading, locale lookup and formatting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the catalog store and the locale registry.
#[derive(Debug, Error)]
pub enum I18nError {
	#[error("invalid locale code: {0:?}")]
	InvalidLocale(String),

	#[error("locale {0:?} is not in the supported locale set")]
	UnsupportedLocale(String),

	#[error("failed to read catalog directory {path}: {source}")]
	ReadDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("no catalog for locale {locale:?} at {path}")]
	CatalogNotFound { locale: String, path: PathBuf },

	#[error("failed to parse catalog for locale {locale:?} at {path}: {source}")]
	CatalogParse {
		locale: String,
		path: PathBuf,
		#[source]
		source: gettext::Error,
	},

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Errors raised while rendering dates, times and durations.
#[derive(Debug, Error)]
pub enum FormatError {
	#[error("invalid date/time pattern: {0:?}")]
	InvalidPattern(String),

	#[error("threshold must be in (0, 1], got {0}")]
	InvalidThreshold(f64),

	#[error("unknown granularity: {0:?}")]
	UnknownGranularity(String),

	#[error("failed to render formatted value")]
	Render(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, I18nError>;
