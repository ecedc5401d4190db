// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of bill amounts as text.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How a bill amount is rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AmountFormat {
    /// Shortest round-trip decimal, always with a fractional digit (`343.0`).
    #[default]
    Raw,
    /// Fixed-point with a configured number of digits (`343.00`).
    Fixed,
}

/// Render `amount` in the given format. `precision` applies to `Fixed` only.
pub fn format_amount(amount: f64, format: AmountFormat, precision: usize) -> String {
    match format {
        AmountFormat::Raw => format!("{amount:?}"),
        AmountFormat::Fixed => format!("{amount:.precision$}"),
    }
}
