// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Lingua.
//!
//! This crate loads GNU gettext catalogs from a locale directory tree,
//! resolves request locale codes against the loaded set, and renders
//! translated messages, dates, times and durations.
//!
//! # Message Keys
//!
//! Messages are keyed by their text in the default locale, not by IDs: the
//! key doubles as the fallback text when no translation exists.
//!
//! # Catalog Layout
//!
//! ```text
//! <root>/
//!   fr/LC_MESSAGES/<domain>.mo
//!   es_ES/LC_MESSAGES/<domain>.mo
//! ```
//!
//! # Example
//!
//! ```no_run
//! use lingua_common_i18n::I18n;
//!
//! let i18n = I18n::new("en_US")?;
//! i18n.load_catalogs("locale", "messages")?;
//!
//! // Exact match, then language-only match, then the default locale.
//! let locale = i18n.resolve(["fr_CA", "en"]);
//! let greeting = locale.translate_fmt("Hello {name}", &[("name", "Ada")]);
//! # Ok::<(), lingua_common_i18n::I18nError>(())
//! ```

mod catalog;
pub mod context;
mod error;
mod format;
mod lazy;
mod locale;
pub mod mo;
mod registry;
mod resolve;
mod store;

pub use catalog::{Catalog, MESSAGES_DIR};
pub use context::{current_locale, translate};
pub use error::{FormatError, I18nError, Result};
pub use format::{DateTimeFormat, Delta, Granularity, DEFAULT_THRESHOLD};
pub use lazy::{lazy_translate, make_lazy_gettext, IntoLazy, LazyGettext, LazyString, LocaleResolver};
pub use locale::{interpolate, DateOrder, Locale};
pub use registry::{I18n, ReloadPolicy};
pub use resolve::{normalize_candidate, NormalizedCode};
pub use store::{validate_code, CatalogStore, LoadSummary, DEFAULT_LOCALE};

pub use chrono_tz::Tz;
