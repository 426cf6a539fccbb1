// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The locale of the request currently being handled.
//!
//! The value is scoped to a tokio task (or a synchronous closure), never to
//! an OS thread, so interleaved requests on one worker thread cannot observe
//! each other's locale.

use std::future::Future;
use std::sync::Arc;

use crate::locale::Locale;

tokio::task_local! {
	static CURRENT_LOCALE: Arc<Locale>;
}

/// Run `future` with `locale` as the current locale.
pub async fn scope<F>(locale: Arc<Locale>, future: F) -> F::Output
where
	F: Future,
{
	CURRENT_LOCALE.scope(locale, future).await
}

/// Run a synchronous closure with `locale` as the current locale.
pub fn sync_scope<F, R>(locale: Arc<Locale>, f: F) -> R
where
	F: FnOnce() -> R,
{
	CURRENT_LOCALE.sync_scope(locale, f)
}

/// The current locale, or `None` outside of [`scope`] / [`sync_scope`].
pub fn current_locale() -> Option<Arc<Locale>> {
	CURRENT_LOCALE.try_with(Arc::clone).ok()
}

/// Translate through the current locale; outside a scope the message is
/// returned unchanged.
pub fn translate(message: &str) -> String {
	CURRENT_LOCALE
		.try_with(|locale| locale.translate(message))
		.unwrap_or_else(|_| message.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Catalog;
	use crate::mo::MoBuilder;

	fn locale(code: &str, hello: &str) -> Arc<Locale> {
		let parsed = gettext::Catalog::parse(
			MoBuilder::new()
				.message("Hello", hello)
				.to_bytes()
				.as_slice(),
		)
		.unwrap();
		Arc::new(Locale::new(code, Catalog::from_gettext(parsed)))
	}

	#[test]
	fn test_no_locale_outside_scope() {
		assert!(current_locale().is_none());
		assert_eq!(translate("Hello"), "Hello");
	}

	#[test]
	fn test_sync_scope() {
		let fr = locale("fr", "Bonjour");
		let seen = sync_scope(fr, || (current_locale().map(|l| l.code().to_string()), translate("Hello")));
		assert_eq!(seen, (Some("fr".to_string()), "Bonjour".to_string()));
		assert!(current_locale().is_none());
	}

	#[tokio::test]
	async fn test_async_scope() {
		let es = locale("es", "Hola");
		let result = scope(es, async {
			tokio::task::yield_now().await;
			translate("Hello")
		})
		.await;
		assert_eq!(result, "Hola");
	}

	#[tokio::test(flavor = "current_thread")]
	async fn test_interleaved_tasks_on_one_thread_stay_isolated() {
		let fr = locale("fr", "Bonjour");
		let de = locale("de", "Hallo");

		let a = tokio::spawn(scope(fr, async {
			let mut seen = Vec::new();
			for _ in 0..5 {
				seen.push(translate("Hello"));
				tokio::task::yield_now().await;
			}
			seen
		}));
		let b = tokio::spawn(scope(de, async {
			let mut seen = Vec::new();
			for _ in 0..5 {
				seen.push(translate("Hello"));
				tokio::task::yield_now().await;
			}
			seen
		}));

		assert!(a.await.unwrap().iter().all(|s| s == "Bonjour"));
		assert!(b.await.unwrap().iter().all(|s| s == "Hallo"));
	}

	#[tokio::test]
	async fn test_nested_scope_restores_outer() {
		let fr = locale("fr", "Bonjour");
		let de = locale("de", "Hallo");
		scope(fr, async move {
			let inner = scope(de, async { translate("Hello") }).await;
			assert_eq!(inner, "Hallo");
			assert_eq!(translate("Hello"), "Bonjour");
		})
		.await;
	}
}
