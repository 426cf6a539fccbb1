// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lingua demo server: a small JSON API whose responses are translated and
//! formatted in the locale resolved for each request.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use lingua_common_i18n::{I18n, I18nError, ReloadPolicy};
use lingua_server_config::{ReloadMode, ServerConfig};
use lingua_server_i18n::{i18n_middleware, CookieHeaderDetector, I18nState};

pub use error::{ErrorResponse, ServerError};

/// Shared state for every handler.
#[derive(Debug, Clone)]
pub struct AppState {
	pub i18n: Arc<I18n>,
	pub i18n_state: I18nState,
}

fn reload_policy(mode: ReloadMode) -> ReloadPolicy {
	match mode {
		ReloadMode::Keep => ReloadPolicy::KeepCached,
		ReloadMode::Invalidate => ReloadPolicy::InvalidateCache,
	}
}

/// Build the i18n context from configuration and load catalogs.
///
/// A missing catalog directory is not fatal: the server then answers every
/// request in the default locale with untranslated messages.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, ServerError> {
	let i18n = I18n::new(&config.i18n.default_locale)?
		.with_reload_policy(reload_policy(config.i18n.reload_policy));

	match i18n.load_catalogs(&config.i18n.catalog_dir, &config.i18n.domain) {
		Ok(summary) => {
			tracing::info!(
				loaded = summary.loaded.len(),
				failed = summary.failed.len(),
				"translation catalogs loaded"
			);
		}
		Err(e @ I18nError::ReadDir { .. }) => {
			tracing::warn!(error = %e, "no translation catalogs, serving default locale only");
		}
		Err(e) => return Err(e.into()),
	}

	let i18n = Arc::new(i18n);
	let detector = CookieHeaderDetector::new(config.i18n.cookie_name.clone());
	let i18n_state = I18nState::with_detector(Arc::clone(&i18n), detector);

	Ok(AppState { i18n, i18n_state })
}

/// Create the application router. Every `/api` route runs behind the i18n
/// middleware.
pub fn create_router(state: AppState) -> Router {
	let api = Router::new()
		.route("/greeting", get(routes::messages::greeting))
		.route("/items", get(routes::messages::items))
		.route("/locale", get(routes::messages::locale_info))
		.route("/now", get(routes::time::now))
		.route("/elapsed", get(routes::time::elapsed))
		.layer(from_fn_with_state(state.i18n_state.clone(), i18n_middleware));

	Router::new()
		.route("/health", get(routes::health::health_check))
		.nest("/api", api)
		.with_state(state)
}
