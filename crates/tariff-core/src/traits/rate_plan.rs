// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The rate plan trait shared by every plan variant.

use std::fmt::Debug;

use crate::format::{format_amount, AmountFormat};
use crate::types::{Bill, PlanCategory};

/// A pricing plan with a fixed per-unit rate.
///
/// Implementors supply only their category and rate. The rate is fixed when
/// the plan is constructed, so a `RatePlan` value never exposes an unset
/// rate. Billing math lives in the provided methods and is shared by all
/// variants.
pub trait RatePlan: Send + Sync + Debug {
    /// The category this plan prices.
    fn category(&self) -> PlanCategory;

    /// Per-unit rate in rupees.
    fn rate(&self) -> f64;

    /// Price `units` of consumption: `rate * units`.
    fn bill(&self, units: u64) -> Bill {
        Bill {
            category: self.category(),
            units,
            rate: self.rate(),
            amount: self.rate() * units as f64,
        }
    }

    /// Price `units` and render the amount as text.
    ///
    /// Uses the shortest round-trip decimal form that always keeps a
    /// fractional digit, e.g. `343.0` or `2557.5`.
    fn calculate_bill(&self, units: u64) -> String {
        format_amount(self.bill(units).amount, AmountFormat::Raw, 0)
    }
}
