// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as the set of accepted log levels and the formatting precision bound.

use crate::diagnostic::ConfigError;
use crate::model::TariffConfig;

/// Accepted values for `log.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Largest accepted `billing.precision`.
pub const MAX_PRECISION: usize = 6;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TariffConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.log.level.trim().to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.billing.currency.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "billing.currency must not be empty".to_string(),
        });
    }

    if config.billing.precision > MAX_PRECISION {
        errors.push(ConfigError::Validation {
            message: format!(
                "billing.precision must be at most {MAX_PRECISION}, got {}",
                config.billing.precision
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
