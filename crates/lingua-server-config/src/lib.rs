// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Lingua server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`LINGUA_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use lingua_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Serving {} from {}", config.i18n.domain, config.i18n.catalog_dir.display());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`LINGUA_SERVER_*`)
/// 2. Config file (`/etc/lingua/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&i18n)?;

	info!(
		host = %http.host,
		port = http.port,
		default_locale = %i18n.default_locale,
		catalog_dir = %i18n.catalog_dir.display(),
		domain = %i18n.domain,
		reload_policy = ?i18n.reload_policy,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		i18n,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(i18n: &I18nConfig) -> Result<(), ConfigError> {
	if i18n.domain.trim().is_empty() {
		return Err(ConfigError::Validation(
			"catalog domain must not be empty (LINGUA_SERVER_CATALOG_DOMAIN)".to_string(),
		));
	}

	if lingua_common_i18n::validate_code(&i18n.default_locale).is_err() {
		return Err(ConfigError::Validation(format!(
			"default locale '{}' is not a valid locale code (LINGUA_SERVER_DEFAULT_LOCALE)",
			i18n.default_locale
		)));
	}

	Ok(())
}
