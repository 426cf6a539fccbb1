// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{HttpConfigLayer, I18nConfigLayer, LoggingConfigLayer};

/// Server configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub i18n: Option<I18nConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_option(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_option(&mut self.i18n, other.i18n, I18nConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_empty_layers() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer::default());
		assert!(base.http.is_none());
		assert!(base.i18n.is_none());
	}

	#[test]
	fn test_merge_other_overwrites() {
		let mut base = ServerConfigLayer {
			i18n: Some(I18nConfigLayer {
				default_locale: Some("en_US".to_string()),
				domain: Some("messages".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		let other = ServerConfigLayer {
			i18n: Some(I18nConfigLayer {
				default_locale: Some("fr".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(other);
		let i18n = base.i18n.unwrap();
		assert_eq!(i18n.default_locale, Some("fr".to_string()));
		assert_eq!(i18n.domain, Some("messages".to_string()));
	}

	#[test]
	fn test_merge_adds_missing_sections() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(9000),
				..Default::default()
			}),
			..Default::default()
		};
		let other = ServerConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("warn".to_string()),
			}),
			..Default::default()
		};
		base.merge(other);
		assert_eq!(base.http.as_ref().unwrap().port, Some(9000));
		assert_eq!(base.logging.unwrap().level, Some("warn".to_string()));
	}

	#[test]
	fn test_deserialize_sections_from_toml() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
[http]
port = 3000

[i18n]
default_locale = "es_ES"
reload_policy = "invalidate"
"#,
		)
		.unwrap();
		assert_eq!(layer.http.unwrap().port, Some(3000));
		let i18n = layer.i18n.unwrap();
		assert_eq!(i18n.default_locale, Some("es_ES".to_string()));
		assert_eq!(i18n.reload_policy, Some("invalidate".to_string()));
		assert!(layer.logging.is_none());
	}
}
