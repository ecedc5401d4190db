// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./tariff.toml` > `~/.config/tariff/tariff.toml` > `/etc/tariff/tariff.toml`
//! with environment variable overrides via `TARIFF_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TariffConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/tariff/tariff.toml";

/// Configuration file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "tariff.toml";

/// User configuration file under the XDG config directory, if one exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tariff/tariff.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tariff/tariff.toml` (system-wide)
/// 3. `~/.config/tariff/tariff.toml` (user XDG config)
/// 4. `./tariff.toml` (local directory)
/// 5. `TARIFF_*` environment variables
pub fn load_config() -> Result<TariffConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TariffConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TariffConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TariffConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TariffConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TariffConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing keys
/// survive: `TARIFF_BILLING_AMOUNT_FORMAT` maps to `billing.amount_format`.
fn env_provider() -> Env {
    Env::prefixed("TARIFF_").map(|key| env_key_to_path(key.as_str()).into())
}

/// Map a prefix-stripped env var name to a dotted config path.
///
/// Figment passes the key in its original case, so it is lowercased before
/// the section prefix is rewritten.
fn env_key_to_path(key: &str) -> String {
    key.to_ascii_lowercase()
        .replacen("log_", "log.", 1)
        .replacen("billing_", "billing.", 1)
}
