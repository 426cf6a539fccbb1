// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Writer for compiled GNU gettext (`.mo`) catalogs.
//!
//! Deployments normally compile `.po` sources with `msgfmt`. This writer
//! produces the same binary layout from in-memory entries, which keeps
//! tooling and test fixtures independent of a system gettext install.

use std::path::Path;

const MAGIC: u32 = 0x9504_12de;
const HEADER_LEN: u32 = 28;

/// Default plural rule, shared by English and most Germanic/Romance languages.
pub const DEFAULT_PLURAL_FORMS: &str = "nplurals=2; plural=(n != 1);";

/// Builder for a single compiled catalog.
#[derive(Debug, Clone)]
pub struct MoBuilder {
	plural_forms: String,
	entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl Default for MoBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl MoBuilder {
	pub fn new() -> Self {
		Self {
			plural_forms: DEFAULT_PLURAL_FORMS.to_string(),
			entries: Vec::new(),
		}
	}

	/// Set the `Plural-Forms` header, e.g. `nplurals=3; plural=(n==1 ? 0 : n==2 ? 1 : 2);`.
	pub fn plural_forms(mut self, rule: impl Into<String>) -> Self {
		self.plural_forms = rule.into();
		self
	}

	/// Add a singular translation.
	pub fn message(mut self, msgid: &str, msgstr: &str) -> Self {
		self.entries
			.push((msgid.as_bytes().to_vec(), msgstr.as_bytes().to_vec()));
		self
	}

	/// Add a plural translation with one string per plural form.
	pub fn plural<I, S>(mut self, msgid: &str, msgid_plural: &str, forms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let original = [msgid.as_bytes(), msgid_plural.as_bytes()].join(&0u8);
		let forms: Vec<S> = forms.into_iter().collect();
		let translation = forms
			.iter()
			.map(|form| form.as_ref().as_bytes())
			.collect::<Vec<_>>()
			.join(&0u8);
		self.entries.push((original, translation));
		self
	}

	fn header(&self) -> Vec<u8> {
		format!(
			"Content-Type: text/plain; charset=UTF-8\nContent-Transfer-Encoding: 8bit\nPlural-Forms: {}\n",
			self.plural_forms
		)
		.into_bytes()
	}

	/// Serialize to little-endian `.mo` bytes.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut entries = Vec::with_capacity(self.entries.len() + 1);
		entries.push((Vec::new(), self.header()));
		entries.extend(self.entries.iter().cloned());
		entries.sort_by(|a, b| a.0.cmp(&b.0));

		let count = entries.len() as u32;
		let originals_offset = HEADER_LEN;
		let translations_offset = originals_offset + count * 8;
		let mut data_offset = translations_offset + count * 8;

		let mut originals = Vec::with_capacity(entries.len());
		let mut translations = Vec::with_capacity(entries.len());
		let mut data = Vec::new();

		for (original, _) in &entries {
			originals.push((original.len() as u32, data_offset));
			data.extend_from_slice(original);
			data.push(0);
			data_offset += original.len() as u32 + 1;
		}
		for (_, translation) in &entries {
			translations.push((translation.len() as u32, data_offset));
			data.extend_from_slice(translation);
			data.push(0);
			data_offset += translation.len() as u32 + 1;
		}

		let mut out = Vec::with_capacity(data_offset as usize);
		for word in [
			MAGIC,
			0,
			count,
			originals_offset,
			translations_offset,
			0,
			translations_offset + count * 8,
		] {
			out.extend_from_slice(&word.to_le_bytes());
		}
		for (len, offset) in originals.into_iter().chain(translations) {
			out.extend_from_slice(&len.to_le_bytes());
			out.extend_from_slice(&offset.to_le_bytes());
		}
		out.extend_from_slice(&data);
		out
	}

	/// Write the catalog to `path`, creating parent directories.
	pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
		let path = path.as_ref();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, self.to_bytes())
	}
}
