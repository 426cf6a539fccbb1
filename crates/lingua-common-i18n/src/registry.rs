// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The i18n context: catalog store plus the process-lifetime locale cache.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{I18nError, Result};
use crate::locale::Locale;
use crate::store::{CatalogStore, LoadSummary};

/// What happens to cached [`Locale`]s when catalogs are (re)loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReloadPolicy {
	/// Cached locales keep the catalogs they were built with.
	#[default]
	KeepCached,
	/// Every successful load drops the cache so new catalogs become visible.
	InvalidateCache,
}

/// Shared i18n state, usually held as `Arc<I18n>`.
///
/// Catalogs are expected to be loaded at startup; afterwards the store is
/// only read. The locale cache is append-only.
#[derive(Debug, Default)]
pub struct I18n {
	store: RwLock<CatalogStore>,
	cache: RwLock<HashMap<String, Arc<Locale>>>,
	reload_policy: ReloadPolicy,
}

impl I18n {
	/// Create a context whose default locale is `default_locale`.
	pub fn new(default_locale: &str) -> Result<Self> {
		Ok(Self {
			store: RwLock::new(CatalogStore::with_default_locale(default_locale)?),
			..Self::default()
		})
	}

	pub fn with_reload_policy(mut self, policy: ReloadPolicy) -> Self {
		self.reload_policy = policy;
		self
	}

	pub fn reload_policy(&self) -> ReloadPolicy {
		self.reload_policy
	}

	/// Scan `root` for `<code>/LC_MESSAGES/<domain>.mo` catalogs and merge them in.
	pub fn load_catalogs(&self, root: impl AsRef<Path>, domain: &str) -> Result<LoadSummary> {
		let summary = self.store.write().load_catalogs(root, domain)?;
		if self.reload_policy == ReloadPolicy::InvalidateCache {
			let dropped = {
				let mut cache = self.cache.write();
				let dropped = cache.len();
				cache.clear();
				dropped
			};
			debug!(dropped, "invalidated locale cache after catalog load");
		}
		Ok(summary)
	}

	pub fn set_default_locale(&self, code: &str) -> Result<()> {
		self.store.write().set_default_locale(code)
	}

	pub fn default_locale(&self) -> String {
		self.store.read().default_locale().to_string()
	}

	/// Supported codes in sorted order.
	pub fn supported_locales(&self) -> Vec<String> {
		self.store.read().supported_locales().iter().cloned().collect()
	}

	pub fn is_supported(&self, code: &str) -> bool {
		self.store.read().is_supported(code)
	}

	pub fn uses_gettext(&self) -> bool {
		self.store.read().uses_gettext()
	}

	/// Catalog for `code`, or the pass-through catalog.
	pub fn catalog(&self, code: &str) -> Catalog {
		self.store.read().get_catalog(code)
	}

	/// Number of locales built so far.
	pub fn cached_locales(&self) -> usize {
		self.cache.read().len()
	}

	/// Locale for an exact supported code.
	///
	/// Unlike [`I18n::resolve`] this does no matching; asking for a code
	/// outside the supported set is a caller bug reported as
	/// [`I18nError::UnsupportedLocale`].
	pub fn get(&self, code: &str) -> Result<Arc<Locale>> {
		if let Some(locale) = self.cache.read().get(code) {
			return Ok(Arc::clone(locale));
		}
		if !self.is_supported(code) {
			return Err(I18nError::UnsupportedLocale(code.to_string()));
		}
		Ok(self.build_and_cache(code))
	}

	/// Cached locale for `code`, building it on first use. `code` must be supported.
	pub(crate) fn locale_for(&self, code: &str) -> Arc<Locale> {
		if let Some(locale) = self.cache.read().get(code) {
			return Arc::clone(locale);
		}
		debug_assert!(self.is_supported(code), "resolved unsupported locale {code}");
		self.build_and_cache(code)
	}

	fn build_and_cache(&self, code: &str) -> Arc<Locale> {
		let built = Arc::new(Locale::new(code, self.catalog(code)));
		let mut cache = self.cache.write();
		Arc::clone(cache.entry(code.to_string()).or_insert(built))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mo::MoBuilder;

	fn write_catalog(root: &Path, code: &str, builder: MoBuilder) {
		builder
			.write_to(Catalog::path_for(root, code, "messages"))
			.unwrap();
	}

	#[test]
	fn test_new_rejects_invalid_default() {
		assert!(matches!(
			I18n::new("not a locale"),
			Err(I18nError::InvalidLocale(_))
		));
	}

	#[test]
	fn test_get_unsupported_is_an_error() {
		let i18n = I18n::default();
		assert!(matches!(
			i18n.get("fr"),
			Err(I18nError::UnsupportedLocale(code)) if code == "fr"
		));
	}

	#[test]
	fn test_get_default_has_pass_through_catalog() {
		let i18n = I18n::default();
		let locale = i18n.get("en_US").unwrap();
		assert!(locale.catalog().is_empty());
		assert_eq!(locale.translate("Hello"), "Hello");
	}

	#[test]
	fn test_get_returns_cached_instance() {
		let i18n = I18n::default();
		let first = i18n.get("en_US").unwrap();
		let second = i18n.get("en_US").unwrap();
		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(i18n.cached_locales(), 1);
	}

	#[test]
	fn test_keep_cached_policy_serves_stale_catalog() {
		let first = tempfile::tempdir().unwrap();
		let second = tempfile::tempdir().unwrap();
		write_catalog(first.path(), "fr", MoBuilder::new().message("Hello", "Salut"));
		write_catalog(second.path(), "fr", MoBuilder::new().message("Hello", "Bonjour"));

		let i18n = I18n::default();
		i18n.load_catalogs(first.path(), "messages").unwrap();
		let before = i18n.get("fr").unwrap();
		i18n.load_catalogs(second.path(), "messages").unwrap();
		let after = i18n.get("fr").unwrap();

		assert!(Arc::ptr_eq(&before, &after));
		assert_eq!(after.translate("Hello"), "Salut");
		assert_eq!(i18n.catalog("fr").gettext("Hello"), "Bonjour");
	}

	#[test]
	fn test_invalidate_policy_rebuilds_locales() {
		let first = tempfile::tempdir().unwrap();
		let second = tempfile::tempdir().unwrap();
		write_catalog(first.path(), "fr", MoBuilder::new().message("Hello", "Salut"));
		write_catalog(second.path(), "fr", MoBuilder::new().message("Hello", "Bonjour"));

		let i18n = I18n::default().with_reload_policy(ReloadPolicy::InvalidateCache);
		i18n.load_catalogs(first.path(), "messages").unwrap();
		assert_eq!(i18n.get("fr").unwrap().translate("Hello"), "Salut");
		i18n.load_catalogs(second.path(), "messages").unwrap();
		assert_eq!(i18n.cached_locales(), 0);
		assert_eq!(i18n.get("fr").unwrap().translate("Hello"), "Bonjour");
	}

	#[test]
	fn test_concurrent_first_use_converges() {
		let i18n = Arc::new(I18n::default());
		let handles: Vec<_> = (0..8)
			.map(|_| {
				let i18n = Arc::clone(&i18n);
				std::thread::spawn(move || i18n.get("en_US").unwrap())
			})
			.collect();
		let locales: Vec<Arc<Locale>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
		assert!(locales.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
	}
}
