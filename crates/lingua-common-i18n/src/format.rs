// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware rendering of dates, times and durations.
//!
//! Month and weekday names come from the locale's glibc-derived data shipped
//! with `chrono`. Named styles arrange the fields in the order used by the
//! locale's own numeric date format. Custom styles are strftime patterns.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::FormatError;
use crate::locale::{DateOrder, Locale};

/// Default rounding threshold for [`Locale::format_timedelta`].
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// A named format style or a custom strftime pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateTimeFormat {
	Full,
	Long,
	#[default]
	Medium,
	Short,
	Custom(String),
}

impl FromStr for DateTimeFormat {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"full" => Self::Full,
			"long" => Self::Long,
			"medium" => Self::Medium,
			"short" => Self::Short,
			pattern => Self::Custom(pattern.to_string()),
		})
	}
}

impl DateTimeFormat {
	fn date_pattern(&self, order: DateOrder) -> String {
		use DateOrder::*;
		let pattern = match (self, order) {
			(Self::Custom(pattern), _) => return pattern.clone(),
			(Self::Short, _) => "%x",
			(Self::Medium, DayMonthYear) => "%-d %b %Y",
			(Self::Medium, MonthDayYear) => "%b %-d, %Y",
			(Self::Medium, YearMonthDay) => "%Y %b %-d",
			(Self::Long, DayMonthYear) => "%-d %B %Y",
			(Self::Long, MonthDayYear) => "%B %-d, %Y",
			(Self::Long, YearMonthDay) => "%Y %B %-d",
			(Self::Full, DayMonthYear) => "%A %-d %B %Y",
			(Self::Full, MonthDayYear) => "%A, %B %-d, %Y",
			(Self::Full, YearMonthDay) => "%Y %B %-d %A",
		};
		pattern.to_string()
	}

	fn time_pattern(&self) -> String {
		match self {
			Self::Custom(pattern) => pattern.clone(),
			Self::Short => "%H:%M".to_string(),
			Self::Medium => "%X".to_string(),
			Self::Long | Self::Full => "%X %Z".to_string(),
		}
	}

	fn datetime_pattern(&self, order: DateOrder) -> String {
		match self {
			Self::Custom(pattern) => pattern.clone(),
			style => format!("{} {}", style.date_pattern(order), style.time_pattern()),
		}
	}
}

/// Coarsest unit [`Locale::format_timedelta`] may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Granularity {
	Year,
	Month,
	Week,
	Day,
	Hour,
	Minute,
	#[default]
	Second,
}

impl Granularity {
	/// Units from largest to smallest.
	pub const ALL: [Granularity; 7] = [
		Self::Year,
		Self::Month,
		Self::Week,
		Self::Day,
		Self::Hour,
		Self::Minute,
		Self::Second,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Year => "year",
			Self::Month => "month",
			Self::Week => "week",
			Self::Day => "day",
			Self::Hour => "hour",
			Self::Minute => "minute",
			Self::Second => "second",
		}
	}

	fn seconds(self) -> f64 {
		match self {
			Self::Year => 3600.0 * 24.0 * 365.0,
			Self::Month => 3600.0 * 24.0 * 30.0,
			Self::Week => 3600.0 * 24.0 * 7.0,
			Self::Day => 3600.0 * 24.0,
			Self::Hour => 3600.0,
			Self::Minute => 60.0,
			Self::Second => 1.0,
		}
	}

	/// Source messages for the unit label; catalogs translate these.
	fn labels(self) -> (&'static str, &'static str) {
		match self {
			Self::Year => ("{count} year", "{count} years"),
			Self::Month => ("{count} month", "{count} months"),
			Self::Week => ("{count} week", "{count} weeks"),
			Self::Day => ("{count} day", "{count} days"),
			Self::Hour => ("{count} hour", "{count} hours"),
			Self::Minute => ("{count} minute", "{count} minutes"),
			Self::Second => ("{count} second", "{count} seconds"),
		}
	}
}

impl FromStr for Granularity {
	type Err = FormatError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|unit| unit.as_str() == s)
			.ok_or_else(|| FormatError::UnknownGranularity(s.to_string()))
	}
}

impl fmt::Display for Granularity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A duration in whole seconds, built from a `TimeDelta`, a std `Duration`
/// or a plain second count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
	seconds: i64,
}

impl Delta {
	pub fn seconds(self) -> i64 {
		self.seconds
	}
}

impl From<i64> for Delta {
	fn from(seconds: i64) -> Self {
		Self { seconds }
	}
}

impl From<TimeDelta> for Delta {
	fn from(delta: TimeDelta) -> Self {
		Self {
			seconds: delta.num_seconds(),
		}
	}
}

impl From<std::time::Duration> for Delta {
	fn from(duration: std::time::Duration) -> Self {
		Self {
			seconds: i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
		}
	}
}

impl Locale {
	/// Format a date and time; `None` renders the current moment.
	pub fn format_datetime(
		&self,
		value: Option<DateTime<Utc>>,
		format: &DateTimeFormat,
		timezone: Option<Tz>,
	) -> Result<String, FormatError> {
		let value = value.unwrap_or_else(Utc::now);
		let pattern = format.datetime_pattern(self.date_order);
		self.render_in(value, &pattern, timezone)
	}

	/// Format a calendar date; `None` renders today (UTC).
	pub fn format_date(
		&self,
		value: Option<NaiveDate>,
		format: &DateTimeFormat,
	) -> Result<String, FormatError> {
		let date = value.unwrap_or_else(|| Utc::now().date_naive());
		let pattern = format.date_pattern(self.date_order);
		render(&date.and_time(NaiveTime::MIN).and_utc(), &pattern, self.time_locale)
	}

	/// Format the time of day of `value`; `None` renders the current time.
	pub fn format_time(
		&self,
		value: Option<DateTime<Utc>>,
		format: &DateTimeFormat,
		timezone: Option<Tz>,
	) -> Result<String, FormatError> {
		let value = value.unwrap_or_else(Utc::now);
		self.render_in(value, &format.time_pattern(), timezone)
	}

	/// Describe a duration in the largest unit whose magnitude reaches
	/// `threshold`, never going coarser than needed past `granularity`.
	pub fn format_timedelta(
		&self,
		delta: impl Into<Delta>,
		granularity: Granularity,
		threshold: f64,
	) -> Result<String, FormatError> {
		if !(threshold > 0.0 && threshold <= 1.0) {
			return Err(FormatError::InvalidThreshold(threshold));
		}

		let seconds = delta.into().seconds.unsigned_abs() as f64;
		for unit in Granularity::ALL {
			let mut value = seconds / unit.seconds();
			if value >= threshold || unit == granularity {
				if unit == granularity && value > 0.0 {
					value = value.max(1.0);
				}
				let count = value.round_ties_even() as u64;
				let (singular, plural) = unit.labels();
				return Ok(self.translate_plural_fmt(
					singular,
					plural,
					count,
					&[("count", &count.to_string())],
				));
			}
		}

		Ok(String::new())
	}

	fn render_in(
		&self,
		value: DateTime<Utc>,
		pattern: &str,
		timezone: Option<Tz>,
	) -> Result<String, FormatError> {
		match timezone {
			Some(tz) => render(&value.with_timezone(&tz), pattern, self.time_locale),
			None => render(&value, pattern, self.time_locale),
		}
	}
}

fn render<Z>(value: &DateTime<Z>, pattern: &str, locale: chrono::Locale) -> Result<String, FormatError>
where
	Z: TimeZone,
	Z::Offset: fmt::Display,
{
	let items: Vec<Item<'_>> = StrftimeItems::new_with_locale(pattern, locale).collect();
	if items.iter().any(|item| matches!(item, Item::Error)) {
		return Err(FormatError::InvalidPattern(pattern.to_string()));
	}

	let mut out = String::new();
	write!(out, "{}", value.format_localized_with_items(items.iter(), locale))?;
	Ok(out)
}
