// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized date, time and duration endpoints.

use axum::extract::Query;
use axum::Json;
use chrono::{DateTime, Utc};
use lingua_common_i18n::{DateTimeFormat, Granularity, Tz, DEFAULT_THRESHOLD};
use lingua_server_i18n::CurrentLocale;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

#[derive(Debug, Deserialize)]
pub struct NowQuery {
	/// `full`, `long`, `medium`, `short` or a strftime pattern.
	pub format: Option<String>,
	/// IANA zone name, e.g. `Europe/Paris`.
	pub tz: Option<String>,
	/// RFC 3339 instant to render instead of the current time.
	pub at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NowResponse {
	pub locale: String,
	pub formatted: String,
}

/// GET /api/now?format=&tz=&at=
pub async fn now(
	CurrentLocale(locale): CurrentLocale,
	Query(query): Query<NowQuery>,
) -> Result<Json<NowResponse>, ServerError> {
	let format = query
		.format
		.as_deref()
		.map(|f| f.parse::<DateTimeFormat>().unwrap_or_default())
		.unwrap_or_default();

	let timezone = query
		.tz
		.as_deref()
		.map(|name| {
			name.parse::<Tz>()
				.map_err(|_| ServerError::BadRequest(format!("unknown time zone '{name}'")))
		})
		.transpose()?;

	let at = query
		.at
		.as_deref()
		.map(|value| {
			DateTime::parse_from_rfc3339(value)
				.map(|dt| dt.with_timezone(&Utc))
				.map_err(|e| ServerError::BadRequest(format!("invalid timestamp '{value}': {e}")))
		})
		.transpose()?;

	let formatted = locale.format_datetime(at, &format, timezone)?;
	Ok(Json(NowResponse {
		locale: locale.code().to_string(),
		formatted,
	}))
}

#[derive(Debug, Deserialize)]
pub struct ElapsedQuery {
	#[serde(default)]
	pub seconds: i64,
	pub granularity: Option<String>,
	pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ElapsedResponse {
	pub locale: String,
	pub seconds: i64,
	pub formatted: String,
}

/// GET /api/elapsed?seconds=&granularity=&threshold=
pub async fn elapsed(
	CurrentLocale(locale): CurrentLocale,
	Query(query): Query<ElapsedQuery>,
) -> Result<Json<ElapsedResponse>, ServerError> {
	let granularity = match query.granularity.as_deref() {
		Some(value) => value.parse::<Granularity>()?,
		None => Granularity::default(),
	};
	let threshold = query.threshold.unwrap_or(DEFAULT_THRESHOLD);

	let formatted = locale.format_timedelta(query.seconds, granularity, threshold)?;
	Ok(Json(ElapsedResponse {
		locale: locale.code().to_string(),
		seconds: query.seconds,
		formatted,
	}))
}
