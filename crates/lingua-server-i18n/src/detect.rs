// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::extract::Request;
use http::header::{ACCEPT_LANGUAGE, COOKIE};
use http::HeaderMap;
use unic_langid::LanguageIdentifier;

/// Default name of the cookie carrying an explicit locale choice.
pub const LOCALE_COOKIE_NAME: &str = "locale";

const FALLBACK_LANGUAGE: &str = "en";

/// Picks a candidate locale code for a request.
///
/// The returned code is a candidate only; it is resolved against the
/// supported set by the middleware. Closures of the right shape implement
/// this trait, so a detector can be swapped in without a new type.
pub trait LocaleDetector: Send + Sync {
	fn detect(&self, request: &Request) -> Option<String>;
}

impl<F> LocaleDetector for F
where
	F: Fn(&Request) -> Option<String> + Send + Sync,
{
	fn detect(&self, request: &Request) -> Option<String> {
		self(request)
	}
}

/// Reads the locale cookie, else the language prefix of `Accept-Language`.
///
/// Only the first two characters of the header are used; a missing header
/// counts as `en`. The candidate must parse as a language identifier.
#[derive(Debug, Clone)]
pub struct CookieHeaderDetector {
	cookie_name: String,
}

impl Default for CookieHeaderDetector {
	fn default() -> Self {
		Self::new(LOCALE_COOKIE_NAME)
	}
}

impl CookieHeaderDetector {
	pub fn new(cookie_name: impl Into<String>) -> Self {
		Self {
			cookie_name: cookie_name.into(),
		}
	}

	pub fn cookie_name(&self) -> &str {
		&self.cookie_name
	}

	fn candidate(&self, headers: &HeaderMap) -> String {
		if let Some(code) = extract_cookie(headers, &self.cookie_name).filter(|c| !c.is_empty()) {
			return code;
		}
		match headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()) {
			Some(header) => header.chars().take(2).collect(),
			None => FALLBACK_LANGUAGE.to_string(),
		}
	}
}

impl LocaleDetector for CookieHeaderDetector {
	fn detect(&self, request: &Request) -> Option<String> {
		let candidate = self.candidate(request.headers());
		match candidate.parse::<LanguageIdentifier>() {
			Ok(_) => Some(candidate),
			Err(_) => {
				tracing::debug!(candidate = %candidate, "ignoring unparsable locale candidate");
				None
			}
		}
	}
}

/// Extract a cookie value from the `Cookie` header.
///
/// Returns `None` if the header is missing, not valid UTF-8, or has no
/// cookie named `name`.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
	headers
		.get(COOKIE)?
		.to_str()
		.ok()?
		.split(';')
		.find_map(|cookie| {
			let (key, value) = cookie.trim().split_once('=')?;
			if key == name {
				Some(value.to_string())
			} else {
				None
			}
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::Body;

	fn request(headers: &[(&str, &str)]) -> Request {
		let mut builder = http::Request::builder().uri("/");
		for (name, value) in headers {
			builder = builder.header(*name, *value);
		}
		builder.body(Body::empty()).unwrap()
	}

	#[test]
	fn test_extract_cookie_among_several() {
		let mut headers = HeaderMap::new();
		headers.insert(COOKIE, "theme=dark; locale=fr_FR; other=1".parse().unwrap());
		assert_eq!(extract_cookie(&headers, "locale"), Some("fr_FR".to_string()));
		assert_eq!(extract_cookie(&headers, "theme"), Some("dark".to_string()));
		assert_eq!(extract_cookie(&headers, "missing"), None);
	}

	#[test]
	fn test_extract_cookie_without_header() {
		assert_eq!(extract_cookie(&HeaderMap::new(), "locale"), None);
	}

	#[test]
	fn test_cookie_wins_over_header() {
		let detector = CookieHeaderDetector::default();
		let req = request(&[("cookie", "locale=es-ES"), ("accept-language", "fr-FR,fr;q=0.9")]);
		assert_eq!(detector.detect(&req), Some("es-ES".to_string()));
	}

	#[test]
	fn test_header_prefix_is_used() {
		let detector = CookieHeaderDetector::default();
		let req = request(&[("accept-language", "fr-CA,fr;q=0.9,en;q=0.8")]);
		assert_eq!(detector.detect(&req), Some("fr".to_string()));
	}

	#[test]
	fn test_missing_header_defaults_to_en() {
		let detector = CookieHeaderDetector::default();
		assert_eq!(detector.detect(&request(&[])), Some("en".to_string()));
	}

	#[test]
	fn test_unparsable_candidate_is_dropped() {
		let detector = CookieHeaderDetector::default();
		let req = request(&[("cookie", "locale=not a locale!")]);
		assert_eq!(detector.detect(&req), None);

		let req = request(&[("accept-language", "*")]);
		assert_eq!(detector.detect(&req), None);
	}

	#[test]
	fn test_custom_cookie_name() {
		let detector = CookieHeaderDetector::new("lang");
		let req = request(&[("cookie", "locale=fr; lang=it")]);
		assert_eq!(detector.cookie_name(), "lang");
		assert_eq!(detector.detect(&req), Some("it".to_string()));
	}

	#[test]
	fn test_closure_detector() {
		let detector = |req: &Request| req.uri().query().map(|q| q.trim_start_matches("lang=").to_string());
		let req = http::Request::builder()
			.uri("/?lang=pt_BR")
			.body(Body::empty())
			.unwrap();
		assert_eq!(LocaleDetector::detect(&detector, &req), Some("pt_BR".to_string()));
	}
}
