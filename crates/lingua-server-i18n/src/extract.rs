// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::ops::Deref;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::request::Parts;
use http::StatusCode;
use lingua_common_i18n::Locale;

/// The locale resolved for this request by [`crate::i18n_middleware`].
///
/// Extraction fails with `500 Internal Server Error` when the middleware is
/// not installed on the route.
#[derive(Debug, Clone)]
pub struct CurrentLocale(pub Arc<Locale>);

impl Deref for CurrentLocale {
	type Target = Locale;

	fn deref(&self) -> &Locale {
		&self.0
	}
}

impl<S> FromRequestParts<S> for CurrentLocale
where
	S: Send + Sync,
{
	type Rejection = Response;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		match parts.extensions.get::<CurrentLocale>() {
			Some(locale) => Ok(locale.clone()),
			None => {
				tracing::warn!(path = %parts.uri.path(), "CurrentLocale requested without i18n middleware");
				Err((StatusCode::INTERNAL_SERVER_ERROR, "locale not resolved").into_response())
			}
		}
	}
}
