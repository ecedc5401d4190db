// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Billing driver: resolves each request through the plan factory, prices
//! it, and reports the result.
//!
//! Requests are processed strictly in order and every request produces a
//! report line; nothing short-circuits except a failing writer.

use std::io::Write;

use tariff_config::model::BillingConfig;
use tariff_core::{
    format_amount, AmountFormat, Bill, BillingRequest, PlanCategory, RatePlan, TariffError,
};
use tariff_plans::PlanFactory;
use tracing::info;

/// How bills are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One human-readable line per bill.
    #[default]
    Text,
    /// A single JSON array of bills.
    Json,
}

/// Rendering options for bill reports.
#[derive(Debug, Clone)]
pub struct BillingOptions {
    pub currency: String,
    pub format: AmountFormat,
    pub precision: usize,
    pub mode: OutputMode,
}

impl Default for BillingOptions {
    fn default() -> Self {
        Self::from_config(&BillingConfig::default(), OutputMode::Text)
    }
}

impl BillingOptions {
    pub fn from_config(config: &BillingConfig, mode: OutputMode) -> Self {
        Self {
            currency: config.currency.clone(),
            format: config.amount_format,
            precision: config.precision,
            mode,
        }
    }

    fn amount(&self, value: f64) -> String {
        format_amount(value, self.format, self.precision)
    }

    /// The report line for a single bill.
    pub fn render_line(&self, bill: &Bill) -> String {
        format!(
            "Bill for your {} plan with {} unit(s) consumed is {} {}",
            bill.category,
            bill.units,
            self.currency,
            self.amount(bill.amount)
        )
    }

    /// The rate card line for a single category.
    pub fn render_rate(&self, category: PlanCategory, rate: f64) -> String {
        format!("{category} plan: {} {} per unit", self.currency, self.amount(rate))
    }
}

/// Price every request in order.
pub fn price_requests(factory: &PlanFactory, requests: &[BillingRequest]) -> Vec<Bill> {
    requests
        .iter()
        .map(|request| price(factory.resolve(request.category).as_ref(), request.units))
        .collect()
}

fn price(plan: &dyn RatePlan, units: u64) -> Bill {
    let bill = plan.bill(units);
    info!(
        category = %bill.category,
        units = bill.units,
        amount = bill.amount,
        "bill computed"
    );
    bill
}

/// Price every request and write the report to `out`.
pub fn run_requests<W: Write>(
    factory: &PlanFactory,
    requests: &[BillingRequest],
    options: &BillingOptions,
    out: &mut W,
) -> Result<Vec<Bill>, TariffError> {
    let bills = price_requests(factory, requests);
    write_bills(&bills, options, out)?;
    Ok(bills)
}

/// Resolve a textual category label, price `units` under it, and write the bill.
pub fn run_label<W: Write>(
    factory: &PlanFactory,
    label: &str,
    units: u64,
    options: &BillingOptions,
    out: &mut W,
) -> Result<Bill, TariffError> {
    let plan = factory.resolve_label(label)?;
    let bill = price(plan.as_ref(), units);
    write_bills(std::slice::from_ref(&bill), options, out)?;
    Ok(bill)
}

/// Write already-priced bills in the configured output mode.
pub fn write_bills<W: Write>(
    bills: &[Bill],
    options: &BillingOptions,
    out: &mut W,
) -> Result<(), TariffError> {
    match options.mode {
        OutputMode::Text => {
            for bill in bills {
                writeln!(out, "{}", options.render_line(bill))?;
            }
        }
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, bills)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write the rate of every category.
pub fn write_rate_card<W: Write>(
    factory: &PlanFactory,
    options: &BillingOptions,
    out: &mut W,
) -> Result<(), TariffError> {
    for (category, rate) in factory.rate_card() {
        writeln!(out, "{}", options.render_rate(category, rate))?;
    }
    out.flush()?;
    Ok(())
}
