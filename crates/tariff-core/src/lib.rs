// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Tariff billing calculator.
//!
//! This crate provides the plan category tags, billing request and bill
//! types, the `RatePlan` trait every plan variant implements, amount
//! formatting, and the error type shared across the workspace.

pub mod error;
pub mod format;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TariffError;
pub use format::{format_amount, AmountFormat};
pub use traits::RatePlan;
pub use types::{Bill, BillingRequest, PlanCategory};
