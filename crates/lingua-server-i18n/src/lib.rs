// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request-side locale handling for axum services.
//!
//! - [`LocaleDetector`] picks a candidate code from each request
//! - [`i18n_middleware`] resolves it against an [`I18n`] context and scopes
//!   the handler so [`lingua_common_i18n::current_locale`] works inside it
//! - [`CurrentLocale`] hands the resolved locale to handlers
//!
//! ```ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let state = I18nState::new(i18n);
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(from_fn_with_state(state, i18n_middleware));
//! ```
//!
//! [`I18n`]: lingua_common_i18n::I18n

mod detect;
mod extract;
mod middleware;

pub use detect::{extract_cookie, CookieHeaderDetector, LocaleDetector, LOCALE_COOKIE_NAME};
pub use extract::CurrentLocale;
pub use middleware::{i18n_middleware, I18nState};
