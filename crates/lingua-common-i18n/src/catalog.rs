// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered gettext catalogs.
//!
//! A [`Catalog`] is a stack of parsed `.mo` files for one locale. Merging a
//! newly loaded file pushes it on top of the stack, so its entries shadow the
//! older ones key-by-key while keys unique to older layers stay reachable.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{I18nError, Result};

/// Directory between the locale directory and the domain file.
pub const MESSAGES_DIR: &str = "LC_MESSAGES";

/// An immutable, cheaply clonable translation catalog.
///
/// The empty catalog is the pass-through catalog: every lookup returns the
/// text it was given.
#[derive(Clone, Default)]
pub struct Catalog {
	/// Newest layer first.
	layers: Arc<Vec<Arc<gettext::Catalog>>>,
}

impl Catalog {
	/// The no-op catalog.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Wrap a single parsed gettext catalog.
	pub fn from_gettext(catalog: gettext::Catalog) -> Self {
		Self {
			layers: Arc::new(vec![Arc::new(catalog)]),
		}
	}

	/// Path of the compiled catalog for `code` and `domain` under `root`.
	pub fn path_for(root: &Path, code: &str, domain: &str) -> PathBuf {
		root.join(code)
			.join(MESSAGES_DIR)
			.join(format!("{domain}.mo"))
	}

	/// Parse `<root>/<code>/LC_MESSAGES/<domain>.mo`.
	pub fn load(root: &Path, code: &str, domain: &str) -> Result<gettext::Catalog> {
		let path = Self::path_for(root, code, domain);
		if !path.is_file() {
			return Err(I18nError::CatalogNotFound {
				locale: code.to_string(),
				path,
			});
		}

		let file = File::open(&path)?;
		gettext::Catalog::parse(BufReader::new(file)).map_err(|source| I18nError::CatalogParse {
			locale: code.to_string(),
			path,
			source,
		})
	}

	/// Return a catalog in which `newer` shadows every existing layer.
	pub fn merge(&self, newer: gettext::Catalog) -> Self {
		let mut layers = Vec::with_capacity(self.layers.len() + 1);
		layers.push(Arc::new(newer));
		layers.extend(self.layers.iter().cloned());
		Self {
			layers: Arc::new(layers),
		}
	}

	/// Look up a singular message, returning `msgid` itself when no layer has it.
	pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
		self.layers
			.iter()
			.map(|layer| layer.gettext(msgid))
			// A miss hands back the caller's own slice.
			.find(|found| !std::ptr::eq(*found, msgid))
			.unwrap_or(msgid)
	}

	/// Look up a plural message using the plural rule of the layer holding it.
	///
	/// Without an entry the singular text is returned for `n == 1` and the
	/// plural text otherwise.
	pub fn ngettext<'a>(&'a self, msgid: &'a str, msgid_plural: &'a str, n: u64) -> &'a str {
		self.layers
			.iter()
			.map(|layer| layer.ngettext(msgid, msgid_plural, n))
			.find(|found| !std::ptr::eq(*found, msgid) && !std::ptr::eq(*found, msgid_plural))
			.unwrap_or(if n == 1 { msgid } else { msgid_plural })
	}

	/// Whether any layer translates `msgid`.
	pub fn contains(&self, msgid: &str) -> bool {
		!std::ptr::eq(self.gettext(msgid), msgid)
	}

	pub fn layer_count(&self) -> usize {
		self.layers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.layers.is_empty()
	}
}

impl fmt::Debug for Catalog {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Catalog")
			.field("layers", &self.layers.len())
			.finish()
	}
}
