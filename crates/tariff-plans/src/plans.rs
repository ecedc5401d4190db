// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-rate plan variants.
//!
//! Domestic:      Rs. 3.50/unit
//! Commercial:    Rs. 7.50/unit
//! Institutional: Rs. 5.50/unit
//!
//! Each variant assigns its rate on construction; billing math comes from
//! the provided methods on `RatePlan`.

use tariff_core::{PlanCategory, RatePlan};

/// Residential consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct DomesticPlan {
    rate: f64,
}

impl DomesticPlan {
    pub const RATE: f64 = 3.50;

    pub fn new() -> Self {
        Self { rate: Self::RATE }
    }
}

impl Default for DomesticPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl RatePlan for DomesticPlan {
    fn category(&self) -> PlanCategory {
        PlanCategory::Domestic
    }

    fn rate(&self) -> f64 {
        self.rate
    }
}

/// Shops, offices and other businesses.
#[derive(Debug, Clone, PartialEq)]
pub struct CommercialPlan {
    rate: f64,
}

impl CommercialPlan {
    pub const RATE: f64 = 7.50;

    pub fn new() -> Self {
        Self { rate: Self::RATE }
    }
}

impl Default for CommercialPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl RatePlan for CommercialPlan {
    fn category(&self) -> PlanCategory {
        PlanCategory::Commercial
    }

    fn rate(&self) -> f64 {
        self.rate
    }
}

/// Schools, hospitals and public bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct InstitutionalPlan {
    rate: f64,
}

impl InstitutionalPlan {
    pub const RATE: f64 = 5.50;

    pub fn new() -> Self {
        Self { rate: Self::RATE }
    }
}

impl Default for InstitutionalPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl RatePlan for InstitutionalPlan {
    fn category(&self) -> PlanCategory {
        PlanCategory::Institutional
    }

    fn rate(&self) -> f64 {
        self.rate
    }
}
