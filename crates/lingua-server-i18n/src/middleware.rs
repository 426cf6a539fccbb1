// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use lingua_common_i18n::{context, I18n};
use parking_lot::RwLock;
use tracing::instrument;

use crate::detect::{CookieHeaderDetector, LocaleDetector};
use crate::extract::CurrentLocale;

/// State shared by [`i18n_middleware`]: the translation context and the
/// active detector.
#[derive(Clone)]
pub struct I18nState {
	i18n: Arc<I18n>,
	detector: Arc<RwLock<Arc<dyn LocaleDetector>>>,
}

impl I18nState {
	/// Use [`CookieHeaderDetector`] with the default cookie name.
	pub fn new(i18n: Arc<I18n>) -> Self {
		Self::with_detector(i18n, CookieHeaderDetector::default())
	}

	pub fn with_detector(i18n: Arc<I18n>, detector: impl LocaleDetector + 'static) -> Self {
		Self {
			i18n,
			detector: Arc::new(RwLock::new(Arc::new(detector))),
		}
	}

	pub fn i18n(&self) -> &Arc<I18n> {
		&self.i18n
	}

	/// Replace the detector for every clone of this state.
	pub fn set_detector(&self, detector: impl LocaleDetector + 'static) {
		*self.detector.write() = Arc::new(detector);
	}

	fn detector(&self) -> Arc<dyn LocaleDetector> {
		self.detector.read().clone()
	}
}

impl fmt::Debug for I18nState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("I18nState")
			.field("i18n", &self.i18n)
			.finish_non_exhaustive()
	}
}

/// Resolve the request locale and run the rest of the stack inside it.
///
/// The resolved locale is inserted into the request extensions as
/// [`CurrentLocale`] and installed as the task's current locale while
/// `next` runs. The response is returned untouched.
#[instrument(name = "i18n_middleware", skip_all, fields(locale = tracing::field::Empty))]
pub async fn i18n_middleware(
	State(state): State<I18nState>,
	mut request: Request,
	next: Next,
) -> Response {
	let candidate = state.detector().detect(&request);
	let locale = state.i18n.resolve(candidate.as_deref());

	tracing::Span::current().record("locale", locale.code());
	tracing::debug!(
		candidate = candidate.as_deref().unwrap_or(""),
		locale = %locale.code(),
		"resolved request locale"
	);

	request.extensions_mut().insert(CurrentLocale(Arc::clone(&locale)));
	context::scope(locale, next.run(request)).await
}
