// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pricing plans for the Tariff billing calculator.
//!
//! This crate provides:
//! - **Plan variants**: Domestic, Commercial, and Institutional plans with fixed rates
//! - **Plan factory**: Maps a `PlanCategory` to a freshly built `RatePlan`

pub mod factory;
pub mod plans;

pub use factory::PlanFactory;
pub use plans::{CommercialPlan, DomesticPlan, InstitutionalPlan};
