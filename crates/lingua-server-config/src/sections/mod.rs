// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for lingua-server.

pub mod http;
pub mod i18n;
pub mod logging;

pub use http::{HttpConfig, HttpConfigLayer};
pub use i18n::{I18nConfig, I18nConfigLayer, ReloadMode};
pub use logging::{LoggingConfig, LoggingConfigLayer};
