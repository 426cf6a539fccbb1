// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub uses_gettext: bool,
	pub default_locale: String,
	pub supported_locales: Vec<String>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "healthy",
		uses_gettext: state.i18n.uses_gettext(),
		default_locale: state.i18n.default_locale(),
		supported_locales: state.i18n.supported_locales(),
	})
}
