// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by plans, configuration, and the billing driver.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::TariffError;

/// Minimum Jaro-Winkler similarity for a category suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Identifies which pricing rule applies to a request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum PlanCategory {
    Domestic,
    Commercial,
    Institutional,
}

impl PlanCategory {
    /// Every category, in declaration order.
    pub const ALL: [PlanCategory; 3] = [
        PlanCategory::Domestic,
        PlanCategory::Commercial,
        PlanCategory::Institutional,
    ];

    /// Parse a user-supplied label, suggesting the closest category on failure.
    pub fn parse_label(label: &str) -> Result<Self, TariffError> {
        let trimmed = label.trim();
        trimmed
            .parse::<PlanCategory>()
            .map_err(|_| TariffError::UnknownCategory {
                input: trimmed.to_string(),
                suggestion: Self::suggest(trimmed),
            })
    }

    fn suggest(label: &str) -> Option<String> {
        let lower = label.to_lowercase();
        let mut best_score = SUGGESTION_THRESHOLD;
        let mut best_match = None;

        for category in Self::ALL {
            let name = category.to_string();
            let score = strsim::jaro_winkler(&lower, &name.to_lowercase());
            if score > best_score {
                best_score = score;
                best_match = Some(name);
            }
        }

        best_match
    }
}

/// A quantity of consumed units to be priced under a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BillingRequest {
    /// Units consumed.
    pub units: u64,
    /// Which plan prices the units.
    pub category: PlanCategory,
}

impl BillingRequest {
    pub fn new(units: u64, category: PlanCategory) -> Self {
        Self { units, category }
    }

    /// The built-in sample requests processed when none are configured.
    pub fn samples() -> Vec<BillingRequest> {
        vec![
            BillingRequest::new(98, PlanCategory::Domestic),
            BillingRequest::new(204, PlanCategory::Commercial),
            BillingRequest::new(465, PlanCategory::Institutional),
        ]
    }
}

/// The priced result of a billing request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub category: PlanCategory,
    pub units: u64,
    /// Per-unit rate the bill was computed with.
    pub rate: f64,
    /// `rate * units`.
    pub amount: f64,
}
