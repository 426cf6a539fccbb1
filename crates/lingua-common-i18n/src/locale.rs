// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolved locale objects and message translation.

use std::fmt;
use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveTime};
use unic_langid::LanguageIdentifier;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::store::validate_code;

/// Field order of a locale's numeric date format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
	/// `22/11/2033`
	DayMonthYear,
	/// `11/22/2033`
	MonthDayYear,
	/// `2033-11-22`
	YearMonthDay,
}

/// A locale with its translation catalog and date rendering rules.
///
/// Locales are built by [`crate::I18n`] and shared as `Arc<Locale>`; they are
/// never mutated after construction.
#[derive(Clone)]
pub struct Locale {
	code: String,
	langid: LanguageIdentifier,
	catalog: Catalog,
	pub(crate) time_locale: chrono::Locale,
	pub(crate) date_order: DateOrder,
}

impl Locale {
	/// Build a locale for a code already known to be valid.
	///
	/// A code that does not parse gets the undetermined language identifier.
	pub fn new(code: impl Into<String>, catalog: Catalog) -> Self {
		let code = code.into();
		let langid: LanguageIdentifier = code.parse().unwrap_or_default();
		let time_locale = time_locale_for(&langid);
		Self {
			date_order: detect_date_order(time_locale),
			code,
			langid,
			catalog,
			time_locale,
		}
	}

	/// Build a locale, rejecting codes that are not language identifiers.
	pub fn parse(code: &str, catalog: Catalog) -> Result<Self> {
		validate_code(code)?;
		Ok(Self::new(code, catalog))
	}

	/// The exact code this locale was resolved for, e.g. `es_ES`.
	pub fn code(&self) -> &str {
		&self.code
	}

	pub fn langid(&self) -> &LanguageIdentifier {
		&self.langid
	}

	pub fn language(&self) -> &str {
		self.langid.language.as_str()
	}

	pub fn region(&self) -> Option<&str> {
		self.langid.region.as_ref().map(|region| region.as_str())
	}

	pub fn script(&self) -> Option<&str> {
		self.langid.script.as_ref().map(|script| script.as_str())
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn date_order(&self) -> DateOrder {
		self.date_order
	}

	/// Translate a message; the message itself is the fallback text.
	pub fn translate(&self, message: &str) -> String {
		self.catalog.gettext(message).to_string()
	}

	/// Translate a message and substitute `{name}` placeholders.
	pub fn translate_fmt(&self, message: &str, args: &[(&str, &str)]) -> String {
		interpolate(self.catalog.gettext(message), args)
	}

	/// Translate a message with a plural form chosen by `count`.
	pub fn translate_plural(&self, message: &str, plural: &str, count: u64) -> String {
		self.catalog.ngettext(message, plural, count).to_string()
	}

	/// Plural translation followed by placeholder substitution.
	pub fn translate_plural_fmt(
		&self,
		message: &str,
		plural: &str,
		count: u64,
		args: &[(&str, &str)],
	) -> String {
		interpolate(self.catalog.ngettext(message, plural, count), args)
	}
}

impl fmt::Debug for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Locale")
			.field("code", &self.code)
			.field("langid", &self.langid.to_string())
			.field("catalog", &self.catalog)
			.finish()
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.code)
	}
}

/// Replace `{name}` placeholders with their values in a single pass.
///
/// Substituted values are never scanned again. Text is returned unchanged
/// when `args` is empty; unknown placeholders are left in place.
pub fn interpolate(text: &str, args: &[(&str, &str)]) -> String {
	if args.is_empty() {
		return text.to_string();
	}

	let mut result = String::with_capacity(text.len());
	let mut rest = text;
	while let Some(start) = rest.find('{') {
		result.push_str(&rest[..start]);
		let after = &rest[start + 1..];
		let substitution = after.find('}').and_then(|end| {
			let name = &after[..end];
			args.iter()
				.find(|(key, _)| *key == name)
				.map(|(_, value)| (end, *value))
		});
		match substitution {
			Some((end, value)) => {
				result.push_str(value);
				rest = &after[end + 1..];
			}
			None => {
				result.push('{');
				rest = after;
			}
		}
	}
	result.push_str(rest);
	result
}

/// Pick the chrono locale for `langid`.
///
/// Language-only codes take their region from the CLDR likely subtags, so
/// `ca` renders like `ca_ES` and `sr` like `sr_RS`.
fn time_locale_for(langid: &LanguageIdentifier) -> chrono::Locale {
	let language = langid.language.as_str();
	let mut candidates = Vec::with_capacity(3);
	if let Some(region) = &langid.region {
		candidates.push(format!("{language}_{}", region.as_str()));
	}
	let mut likely = langid.clone();
	if likely.maximize() {
		if let Some(region) = &likely.region {
			candidates.push(format!("{language}_{}", region.as_str()));
		}
	}
	candidates.push(format!("{language}_{}", language.to_ascii_uppercase()));

	candidates
		.iter()
		.find_map(|name| chrono::Locale::try_from(name.as_str()).ok())
		.unwrap_or(chrono::Locale::POSIX)
}

fn detect_date_order(locale: chrono::Locale) -> DateOrder {
	let Some(sample) = NaiveDate::from_ymd_opt(2033, 11, 22) else {
		return DateOrder::DayMonthYear;
	};
	let mut rendered = String::new();
	let formatted = sample
		.and_time(NaiveTime::MIN)
		.and_utc()
		.format_localized("%x", locale);
	if write!(rendered, "{formatted}").is_err() {
		return DateOrder::DayMonthYear;
	}

	let year = rendered.find("2033").or_else(|| rendered.find("33"));
	let month = rendered.find("11");
	let day = rendered.find("22");
	match (year, month, day) {
		(Some(y), Some(m), _) if y < m => DateOrder::YearMonthDay,
		(_, Some(m), Some(d)) if m < d => DateOrder::MonthDayYear,
		_ => DateOrder::DayMonthYear,
	}
}
