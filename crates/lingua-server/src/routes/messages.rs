// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translated message endpoints.

use axum::extract::{Query, State};
use axum::Json;
use lingua_common_i18n::{lazy_translate, LazyString};
use lingua_server_i18n::CurrentLocale;
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GreetingQuery {
	pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
	pub locale: String,
	/// Rendered when the response body is serialized.
	pub title: LazyString,
	pub message: String,
}

/// GET /api/greeting?name=
pub async fn greeting(
	CurrentLocale(locale): CurrentLocale,
	Query(query): Query<GreetingQuery>,
) -> Json<GreetingResponse> {
	let name = query.name.unwrap_or_else(|| "world".to_string());
	Json(GreetingResponse {
		locale: locale.code().to_string(),
		title: lazy_translate("Welcome"),
		message: locale.translate_fmt("Hello {name}!", &[("name", &name)]),
	})
}

#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
	#[serde(default)]
	pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
	pub locale: String,
	pub count: u64,
	pub message: String,
}

/// GET /api/items?count=
pub async fn items(
	CurrentLocale(locale): CurrentLocale,
	Query(query): Query<ItemsQuery>,
) -> Json<ItemsResponse> {
	let count = query.count.to_string();
	let message = locale.translate_plural_fmt(
		"{count} item",
		"{count} items",
		query.count,
		&[("count", &count)],
	);
	Json(ItemsResponse {
		locale: locale.code().to_string(),
		count: query.count,
		message,
	})
}

#[derive(Debug, Serialize)]
pub struct LocaleResponse {
	pub code: String,
	pub language: String,
	pub region: Option<String>,
	pub default_locale: String,
	pub supported_locales: Vec<String>,
}

/// GET /api/locale
pub async fn locale_info(
	State(state): State<AppState>,
	CurrentLocale(locale): CurrentLocale,
) -> Json<LocaleResponse> {
	Json(LocaleResponse {
		code: locale.code().to_string(),
		language: locale.language().to_string(),
		region: locale.region().map(str::to_string),
		default_locale: state.i18n.default_locale(),
		supported_locales: state.i18n.supported_locales(),
	})
}
