// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for rate-bearing plans.

pub mod rate_plan;

pub use rate_plan::RatePlan;
