// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation catalog and locale selection settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_LOCALE: &str = "en_US";
const DEFAULT_CATALOG_DIR: &str = "locale";
const DEFAULT_DOMAIN: &str = "messages";
const DEFAULT_COOKIE_NAME: &str = "locale";

/// Whether cached locales see catalogs loaded after they were built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReloadMode {
	/// Cached locales keep their original catalogs.
	#[default]
	Keep,
	/// Reloading catalogs drops every cached locale.
	Invalidate,
}

impl ReloadMode {
	/// Parse reload mode from string value.
	pub fn from_str_value(value: &str) -> Result<Self, ConfigError> {
		match value.to_lowercase().as_str() {
			"keep" => Ok(ReloadMode::Keep),
			"invalidate" => Ok(ReloadMode::Invalidate),
			_ => Err(ConfigError::InvalidValue {
				key: "reload_policy".to_string(),
				message: format!("Invalid value: '{value}'. Expected: keep, invalidate"),
			}),
		}
	}
}

/// Resolved i18n settings.
#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	pub default_locale: String,
	pub catalog_dir: PathBuf,
	pub domain: String,
	pub cookie_name: String,
	pub reload_policy: ReloadMode,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE.to_string(),
			catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
			domain: DEFAULT_DOMAIN.to_string(),
			cookie_name: DEFAULT_COOKIE_NAME.to_string(),
			reload_policy: ReloadMode::default(),
		}
	}
}

/// I18n configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub catalog_dir: Option<PathBuf>,
	#[serde(default)]
	pub domain: Option<String>,
	#[serde(default)]
	pub cookie_name: Option<String>,
	#[serde(default)]
	pub reload_policy: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.catalog_dir.is_some() {
			self.catalog_dir = other.catalog_dir;
		}
		if other.domain.is_some() {
			self.domain = other.domain;
		}
		if other.cookie_name.is_some() {
			self.cookie_name = other.cookie_name;
		}
		if other.reload_policy.is_some() {
			self.reload_policy = other.reload_policy;
		}
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let reload_policy = match self.reload_policy {
			Some(value) => ReloadMode::from_str_value(&value)?,
			None => ReloadMode::default(),
		};

		Ok(I18nConfig {
			default_locale: self
				.default_locale
				.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
			catalog_dir: self
				.catalog_dir
				.unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_DIR)),
			domain: self.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
			cookie_name: self
				.cookie_name
				.unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
			reload_policy,
		})
	}
}
