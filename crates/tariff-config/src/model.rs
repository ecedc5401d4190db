// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Tariff billing calculator.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use tariff_core::{AmountFormat, BillingRequest};

/// Top-level Tariff configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TariffConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Bill rendering settings.
    #[serde(default)]
    pub billing: BillingConfig,

    /// Requests processed by `tariff run`. Empty means the built-in samples.
    #[serde(default)]
    pub requests: Vec<BillingRequest>,
}

impl TariffConfig {
    /// The configured requests, or the built-in samples when none are set.
    pub fn effective_requests(&self) -> Vec<BillingRequest> {
        if self.requests.is_empty() {
            BillingRequest::samples()
        } else {
            self.requests.clone()
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Bill rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BillingConfig {
    /// Currency symbol printed before each amount.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// How amounts are rendered.
    #[serde(default)]
    pub amount_format: AmountFormat,

    /// Fractional digits used by the `fixed` format.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            amount_format: AmountFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_precision() -> usize {
    2
}
