// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog store: locale code to merged catalog, plus the supported locale set.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::{debug, error, info, instrument};
use unic_langid::LanguageIdentifier;

use crate::catalog::Catalog;
use crate::error::{I18nError, Result};

/// Default locale until [`CatalogStore::set_default_locale`] is called.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Outcome of one [`CatalogStore::load_catalogs`] pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadSummary {
	/// Locale codes whose catalog loaded (and merged) successfully, in scan order.
	pub loaded: Vec<String>,
	/// Locale codes that were skipped because their catalog failed to load.
	pub failed: Vec<String>,
}

/// Owns every loaded catalog and the set of locales they make available.
#[derive(Debug)]
pub struct CatalogStore {
	catalogs: HashMap<String, Catalog>,
	default_locale: String,
	supported: BTreeSet<String>,
	uses_gettext: bool,
}

impl Default for CatalogStore {
	fn default() -> Self {
		let mut store = Self {
			catalogs: HashMap::new(),
			default_locale: DEFAULT_LOCALE.to_string(),
			supported: BTreeSet::new(),
			uses_gettext: false,
		};
		store.recompute_supported();
		store
	}
}

/// Check that `code` parses as a language identifier.
pub fn validate_code(code: &str) -> Result<LanguageIdentifier> {
	if code.is_empty() {
		return Err(I18nError::InvalidLocale(code.to_string()));
	}
	code.parse::<LanguageIdentifier>()
		.map_err(|_| I18nError::InvalidLocale(code.to_string()))
}

impl CatalogStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store with a custom default locale.
	pub fn with_default_locale(code: &str) -> Result<Self> {
		let mut store = Self::default();
		store.set_default_locale(code)?;
		Ok(store)
	}

	/// Load every `<root>/<code>/LC_MESSAGES/<domain>.mo` catalog.
	///
	/// Directories are visited in lexicographic order. Names starting with a
	/// dot and plain files are ignored. A catalog that fails to load is logged
	/// and skipped; only an unreadable `root` fails the whole pass. Catalogs
	/// for codes already present are merged, newer entries winning.
	#[instrument(skip(self, root), fields(root = %root.as_ref().display()))]
	pub fn load_catalogs(&mut self, root: impl AsRef<Path>, domain: &str) -> Result<LoadSummary> {
		let root = root.as_ref();
		let entries = std::fs::read_dir(root).map_err(|source| I18nError::ReadDir {
			path: root.to_path_buf(),
			source,
		})?;

		let mut names: Vec<String> = entries
			.filter_map(|entry| entry.ok())
			.filter(|entry| entry.path().is_dir())
			.filter_map(|entry| entry.file_name().into_string().ok())
			.filter(|name| !name.starts_with('.'))
			.collect();
		names.sort();

		let mut summary = LoadSummary::default();
		for code in names {
			match self.load_one(root, &code, domain) {
				Ok(()) => {
					debug!(locale = %code, "loaded translation catalog");
					summary.loaded.push(code);
				}
				Err(e) => {
					error!(locale = %code, error = %e, "cannot load translation catalog");
					summary.failed.push(code);
				}
			}
		}

		self.recompute_supported();
		self.uses_gettext = true;
		info!(supported = ?self.supported, "supported locales");

		Ok(summary)
	}

	fn load_one(&mut self, root: &Path, code: &str, domain: &str) -> Result<()> {
		validate_code(code)?;
		let parsed = Catalog::load(root, code, domain)?;
		let merged = match self.catalogs.get(code) {
			Some(existing) => existing.merge(parsed),
			None => Catalog::from_gettext(parsed),
		};
		self.catalogs.insert(code.to_string(), merged);
		Ok(())
	}

	/// Replace the default locale and recompute the supported set.
	pub fn set_default_locale(&mut self, code: &str) -> Result<()> {
		validate_code(code)?;
		self.default_locale = code.to_string();
		self.recompute_supported();
		Ok(())
	}

	/// Catalog for `code`, or the pass-through catalog when none was loaded.
	pub fn get_catalog(&self, code: &str) -> Catalog {
		self.catalogs.get(code).cloned().unwrap_or_default()
	}

	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	pub fn supported_locales(&self) -> &BTreeSet<String> {
		&self.supported
	}

	pub fn is_supported(&self, code: &str) -> bool {
		self.supported.contains(code)
	}

	/// True once any gettext directory has been scanned.
	pub fn uses_gettext(&self) -> bool {
		self.uses_gettext
	}

	fn recompute_supported(&mut self) {
		self.supported = self
			.catalogs
			.keys()
			.cloned()
			.chain(std::iter::once(self.default_locale.clone()))
			.collect();
	}
}
