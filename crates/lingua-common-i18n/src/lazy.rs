// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Deferred translations.
//!
//! A [`LazyString`] records what to translate and is only looked up when
//! rendered, using whichever locale is current at that point. This lets
//! module-level constants and response structs be built before any request
//! locale exists.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::context;
use crate::locale::{interpolate, Locale};

/// Supplies the locale a [`LazyString`] renders in.
pub type LocaleResolver = Arc<dyn Fn() -> Option<Arc<Locale>> + Send + Sync>;

#[derive(Clone)]
pub struct LazyString {
	message: String,
	plural: Option<(String, u64)>,
	args: Vec<(String, String)>,
	resolver: Option<LocaleResolver>,
}

impl LazyString {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			plural: None,
			args: Vec::new(),
			resolver: None,
		}
	}

	/// Select between `message` and `plural` by `count` at render time.
	pub fn plural(mut self, plural: impl Into<String>, count: u64) -> Self {
		self.plural = Some((plural.into(), count));
		self
	}

	/// Add a `{name}` placeholder value.
	pub fn arg(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
		self.args.push((name.into(), value.to_string()));
		self
	}

	/// Render through `resolver` instead of the task's current locale.
	pub fn with_resolver(mut self, resolver: LocaleResolver) -> Self {
		self.resolver = Some(resolver);
		self
	}

	/// The untranslated source message.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Render in an explicit locale.
	pub fn render_in(&self, locale: &Locale) -> String {
		let args = self.arg_refs();
		match &self.plural {
			Some((plural, count)) => locale.translate_plural_fmt(&self.message, plural, *count, &args),
			None => locale.translate_fmt(&self.message, &args),
		}
	}

	/// Render in the resolver's locale, else the current locale, else as
	/// untranslated source text.
	pub fn render(&self) -> String {
		let locale = match &self.resolver {
			Some(resolver) => resolver(),
			None => context::current_locale(),
		};
		match locale {
			Some(locale) => self.render_in(&locale),
			None => self.render_source(),
		}
	}

	fn render_source(&self) -> String {
		let text = match &self.plural {
			Some((plural, count)) if *count != 1 => plural.as_str(),
			_ => self.message.as_str(),
		};
		interpolate(text, &self.arg_refs())
	}

	fn arg_refs(&self) -> Vec<(&str, &str)> {
		self.args
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
			.collect()
	}
}

impl fmt::Display for LazyString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl fmt::Debug for LazyString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LazyString")
			.field("message", &self.message)
			.field("plural", &self.plural)
			.field("args", &self.args)
			.field("has_resolver", &self.resolver.is_some())
			.finish()
	}
}

impl Serialize for LazyString {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.render())
	}
}

/// Conversion into a [`LazyString`]; lazy values pass through untouched.
pub trait IntoLazy {
	/// Whether the value is already a [`LazyString`].
	const LAZY: bool = false;

	fn into_lazy(self) -> LazyString;
}

impl IntoLazy for LazyString {
	const LAZY: bool = true;

	fn into_lazy(self) -> LazyString {
		self
	}
}

impl IntoLazy for &str {
	fn into_lazy(self) -> LazyString {
		LazyString::new(self)
	}
}

impl IntoLazy for String {
	fn into_lazy(self) -> LazyString {
		LazyString::new(self)
	}
}

/// Deferred translation in the task's current locale.
pub fn lazy_translate(message: impl IntoLazy) -> LazyString {
	message.into_lazy()
}

/// A lazy-translation factory bound to one locale resolver.
#[derive(Clone)]
pub struct LazyGettext {
	resolver: LocaleResolver,
}

impl LazyGettext {
	/// Wrap `message` with this factory's resolver.
	///
	/// A [`LazyString`] is returned unchanged, including one without a
	/// resolver, which keeps rendering in the task's current locale.
	pub fn gettext<M: IntoLazy>(&self, message: M) -> LazyString {
		if M::LAZY {
			return message.into_lazy();
		}
		message.into_lazy().with_resolver(Arc::clone(&self.resolver))
	}
}

/// Build a factory whose strings render in the locale `resolver` returns.
pub fn make_lazy_gettext<F>(resolver: F) -> LazyGettext
where
	F: Fn() -> Option<Arc<Locale>> + Send + Sync + 'static,
{
	LazyGettext {
		resolver: Arc::new(resolver),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Catalog;
	use crate::mo::MoBuilder;

	fn french() -> Arc<Locale> {
		let parsed = gettext::Catalog::parse(
			MoBuilder::new()
				.message("Welcome, {name}", "Bienvenue, {name}")
				.plural("{n} message", "{n} messages", ["{n} message", "{n} messages"])
				.message("Save", "Enregistrer")
				.to_bytes()
				.as_slice(),
		)
		.unwrap();
		Arc::new(Locale::new("fr", Catalog::from_gettext(parsed)))
	}

	#[test]
	fn test_renders_source_without_locale() {
		let lazy = lazy_translate("Welcome, {name}").arg("name", "Ada");
		assert_eq!(lazy.to_string(), "Welcome, Ada");
		let plural = LazyString::new("{n} message").plural("{n} messages", 2).arg("n", 2);
		assert_eq!(plural.to_string(), "2 messages");
	}

	#[test]
	fn test_uses_locale_current_at_render_time() {
		let lazy = lazy_translate("Save");
		assert_eq!(lazy.to_string(), "Save");
		let rendered = context::sync_scope(french(), || lazy.to_string());
		assert_eq!(rendered, "Enregistrer");
	}

	#[test]
	fn test_render_in_explicit_locale() {
		let fr = french();
		let lazy = LazyString::new("{n} message").plural("{n} messages", 1).arg("n", 1);
		assert_eq!(lazy.render_in(&fr), "1 message");
	}

	#[test]
	fn test_factory_binds_resolver() {
		let fr = french();
		let gettext = make_lazy_gettext(move || Some(Arc::clone(&fr)));
		let lazy = gettext.gettext("Welcome, {name}").arg("name", "Ada");
		assert_eq!(lazy.to_string(), "Bienvenue, Ada");
	}

	#[test]
	fn test_factory_passes_lazy_values_through() {
		let inner = make_lazy_gettext(|| None).gettext("Save");
		let fr = french();
		let outer = make_lazy_gettext(move || Some(Arc::clone(&fr)));
		// The original resolver is kept.
		assert_eq!(outer.gettext(inner).to_string(), "Save");
	}

	#[test]
	fn test_factory_keeps_unbound_lazy_values_unbound() {
		let fr = french();
		let outer = make_lazy_gettext(move || Some(Arc::clone(&fr)));
		let lazy = outer.gettext(lazy_translate("Save"));
		assert_eq!(lazy.to_string(), "Save");
		let rendered = context::sync_scope(french(), || lazy.to_string());
		assert_eq!(rendered, "Enregistrer");
	}

	#[test]
	fn test_serializes_rendered_text() {
		let lazy = lazy_translate("Save");
		let json = context::sync_scope(french(), || serde_json::to_string(&lazy).unwrap());
		assert_eq!(json, "\"Enregistrer\"");
	}
}
