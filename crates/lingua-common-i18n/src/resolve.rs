// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use std::sync::Arc;

use crate::locale::Locale;
use crate::registry::I18n;

/// A candidate code after separator and case normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCode {
	/// Canonical code, e.g. `en_US` or `fr`.
	pub code: String,
	/// Lower-cased language segment, e.g. `en`.
	pub language: String,
}

/// Normalize a caller-supplied locale code.
///
/// Dashes become underscores. Two segments are canonicalized to
/// `lower(language)_UPPER(region)`, a single segment is lower-cased, and
/// anything with more than two segments is rejected. Empty input is rejected.
///
/// # Example
///
/// ```
/// use lingua_common_i18n::normalize_candidate;
///
/// assert_eq!(normalize_candidate("EN-us").unwrap().code, "en_US");
/// assert_eq!(normalize_candidate("Fr").unwrap().code, "fr");
/// assert!(normalize_candidate("zh-Hant-TW").is_none());
/// ```
pub fn normalize_candidate(candidate: &str) -> Option<NormalizedCode> {
	if candidate.is_empty() {
		return None;
	}

	let replaced = candidate.replace('-', "_");
	let parts: Vec<&str> = replaced.split('_').collect();
	match parts.as_slice() {
		[language] => {
			let language = language.to_lowercase();
			Some(NormalizedCode {
				code: language.clone(),
				language,
			})
		}
		[language, region] => {
			let language = language.to_lowercase();
			Some(NormalizedCode {
				code: format!("{language}_{}", region.to_uppercase()),
				language,
			})
		}
		_ => None,
	}
}

impl I18n {
	/// Resolve the best supported locale for a prioritized list of candidates.
	///
	/// Resolution order, per candidate in the order given:
	/// 1. Exact match of the normalized code (`es-es` matches `es_ES`)
	/// 2. Match of its language segment alone (`fr_CA` matches `fr`)
	///
	/// Empty and malformed candidates are skipped. When nothing matches, the
	/// default locale is returned.
	///
	/// # Example
	///
	/// ```
	/// use lingua_common_i18n::I18n;
	///
	/// let i18n = I18n::new("en_US").unwrap();
	/// assert_eq!(i18n.resolve(["de", ""]).code(), "en_US");
	/// ```
	pub fn resolve<I, S>(&self, candidates: I) -> Arc<Locale>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for candidate in candidates {
			let Some(normalized) = normalize_candidate(candidate.as_ref()) else {
				continue;
			};
			if self.is_supported(&normalized.code) {
				return self.locale_for(&normalized.code);
			}
			if self.is_supported(&normalized.language) {
				return self.locale_for(&normalized.language);
			}
		}

		self.locale_for(&self.default_locale())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Catalog;
	use crate::mo::MoBuilder;
	use proptest::prelude::*;
	use std::path::Path;

	fn write_catalog(root: &Path, code: &str, builder: MoBuilder) {
		builder
			.write_to(Catalog::path_for(root, code, "messages"))
			.unwrap();
	}

	fn fixture() -> (I18n, tempfile::TempDir) {
		let dir = tempfile::tempdir().unwrap();
		write_catalog(dir.path(), "fr", MoBuilder::new().message("Hello", "Bonjour"));
		write_catalog(dir.path(), "es_ES", MoBuilder::new().message("Hello", "Hola"));
		write_catalog(dir.path(), "en_US", MoBuilder::new().message("Color", "Color"));

		let i18n = I18n::default();
		i18n.set_default_locale("en_US").unwrap();
		i18n.load_catalogs(dir.path(), "messages").unwrap();
		(i18n, dir)
	}

	#[test]
	fn test_normalize_two_segments() {
		let normalized = normalize_candidate("pt-br").unwrap();
		assert_eq!(normalized.code, "pt_BR");
		assert_eq!(normalized.language, "pt");
	}

	#[test]
	fn test_normalize_rejects_three_segments() {
		assert!(normalize_candidate("sr_Latn_RS").is_none());
		assert!(normalize_candidate("a-b-c").is_none());
	}

	#[test]
	fn test_normalize_empty() {
		assert!(normalize_candidate("").is_none());
	}

	#[test]
	fn test_exact_match() {
		let (i18n, _dir) = fixture();
		assert_eq!(i18n.resolve(["es-es"]).code(), "es_ES");
		assert_eq!(i18n.resolve(["es_ES"]).translate("Hello"), "Hola");
	}

	#[test]
	fn test_language_fallback() {
		let (i18n, _dir) = fixture();
		assert_eq!(i18n.resolve(["fr_FR"]).code(), "fr");
		assert_eq!(i18n.resolve(["fr_CA"]).translate("Hello"), "Bonjour");
	}

	#[test]
	fn test_default_when_nothing_matches() {
		let (i18n, _dir) = fixture();
		assert_eq!(i18n.resolve(["de"]).code(), "en_US");
		assert_eq!(i18n.resolve(Vec::<String>::new()).code(), "en_US");
		assert_eq!(i18n.resolve(["", "x-y-z", "ja_JP"]).code(), "en_US");
	}

	#[test]
	fn test_first_matching_candidate_wins() {
		let (i18n, _dir) = fixture();
		assert_eq!(i18n.resolve(["de", "fr_BE", "es_ES"]).code(), "fr");
		assert_eq!(i18n.resolve(["a_b_c", "es-ES", "fr"]).code(), "es_ES");
	}

	#[test]
	fn test_language_only_candidate_does_not_match_regional_code() {
		let (i18n, _dir) = fixture();
		assert_eq!(i18n.resolve(["es"]).code(), "en_US");
	}

	#[test]
	fn test_separator_and_case_variants_share_instance() {
		let (i18n, _dir) = fixture();
		let a = i18n.resolve(["es-es"]);
		let b = i18n.resolve(["ES_es"]);
		let c = i18n.resolve(["es_ES"]);
		assert!(Arc::ptr_eq(&a, &b));
		assert!(Arc::ptr_eq(&b, &c));
	}

	#[test]
	fn test_default_change_takes_effect() {
		let (i18n, _dir) = fixture();
		i18n.set_default_locale("fr").unwrap();
		assert_eq!(i18n.resolve(["de"]).code(), "fr");
		assert!(!i18n.is_supported("xx"));
		assert!(i18n.is_supported("en_US"));
	}

	proptest! {
		#[test]
		fn separator_and_case_variants_normalize_alike(
			language in "[a-zA-Z]{2,3}",
			region in "[a-zA-Z]{2}",
			dash in any::<bool>(),
		) {
			let sep = if dash { "-" } else { "_" };
			let variant = normalize_candidate(&format!("{language}{sep}{region}")).unwrap();
			let canonical = normalize_candidate(&format!(
				"{}_{}",
				language.to_lowercase(),
				region.to_uppercase()
			))
			.unwrap();
			prop_assert_eq!(variant, canonical);
		}

		#[test]
		fn resolve_always_returns_a_supported_locale(candidates in prop::collection::vec(".{0,12}", 0..4)) {
			let (i18n, _dir) = fixture();
			let locale = i18n.resolve(&candidates);
			prop_assert!(i18n.is_supported(locale.code()));
		}

		#[test]
		fn unknown_languages_fall_back_to_default(code in "(de|it|nl|ru)([-_][A-Z]{2})?") {
			let (i18n, _dir) = fixture();
			let resolved = i18n.resolve([code.as_str()]);
			prop_assert_eq!(resolved.code(), "en_US");
		}
	}
}
