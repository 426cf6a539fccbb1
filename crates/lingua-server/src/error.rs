// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use lingua_common_i18n::{FormatError, I18nError};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Invalid query parameters.
	#[error("Invalid request: {0}")]
	BadRequest(String),

	#[error("Format error: {0}")]
	Format(#[from] FormatError),

	/// Catalog or locale failure.
	#[error("I18n error: {0}")]
	I18n(#[from] I18nError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error) = match &self {
			ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
			ServerError::Format(FormatError::Render(e)) => {
				tracing::error!(error = %e, "failed to render formatted value");
				(StatusCode::INTERNAL_SERVER_ERROR, "format_error")
			}
			ServerError::Format(_) => (StatusCode::BAD_REQUEST, "invalid_format"),
			ServerError::I18n(e) => {
				tracing::error!(error = %e, "i18n error");
				(StatusCode::INTERNAL_SERVER_ERROR, "i18n_error")
			}
		};

		let body = ErrorResponse {
			error: error.to_string(),
			message: self.to_string(),
		};
		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bad_pattern_is_client_error() {
		let err = ServerError::from(FormatError::InvalidPattern("%Q".to_string()));
		assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn test_unknown_granularity_is_client_error() {
		let err = ServerError::from(FormatError::UnknownGranularity("fortnight".to_string()));
		assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn test_i18n_error_is_server_error() {
		let err = ServerError::from(I18nError::UnsupportedLocale("xx".to_string()));
		assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
