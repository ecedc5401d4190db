// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plan factory mapping a category tag to a concrete rate plan.
//!
//! Callers never construct plan variants directly. They ask the factory for
//! a category and get back a `Box<dyn RatePlan>` with its rate already set.
//! A process-wide instance is available through [`PlanFactory::shared`], but
//! the driver takes the factory as a parameter so tests can supply their own.

use std::sync::LazyLock;

use tariff_core::{PlanCategory, RatePlan, TariffError};
use tracing::debug;

use crate::plans::{CommercialPlan, DomesticPlan, InstitutionalPlan};

static SHARED: LazyLock<PlanFactory> = LazyLock::new(PlanFactory::new);

/// Resolves plan categories to freshly constructed plan variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanFactory {
    _private: (),
}

impl PlanFactory {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// The process-wide factory, created on first access.
    pub fn shared() -> &'static PlanFactory {
        &SHARED
    }

    /// Build a new plan for `category`.
    ///
    /// Every call returns an independent instance.
    pub fn resolve(&self, category: PlanCategory) -> Box<dyn RatePlan> {
        // No wildcard arm: a new category must get a variant here.
        let plan: Box<dyn RatePlan> = match category {
            PlanCategory::Domestic => Box::new(DomesticPlan::new()),
            PlanCategory::Commercial => Box::new(CommercialPlan::new()),
            PlanCategory::Institutional => Box::new(InstitutionalPlan::new()),
        };
        debug!(category = %category, rate = plan.rate(), "resolved rate plan");
        plan
    }

    /// Parse a textual label and resolve it.
    pub fn resolve_label(&self, label: &str) -> Result<Box<dyn RatePlan>, TariffError> {
        let category = PlanCategory::parse_label(label)?;
        Ok(self.resolve(category))
    }

    /// Rate for every category, in declaration order.
    pub fn rate_card(&self) -> Vec<(PlanCategory, f64)> {
        PlanCategory::ALL
            .iter()
            .map(|&category| (category, self.resolve(category).rate()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn addr(plan: &dyn RatePlan) -> *const u8 {
        plan as *const dyn RatePlan as *const u8
    }

    #[test]
    fn resolve_sets_fixed_rate_for_each_category() {
        let factory = PlanFactory::new();
        let expected = [
            (PlanCategory::Domestic, 3.50),
            (PlanCategory::Commercial, 7.50),
            (PlanCategory::Institutional, 5.50),
        ];
        for (category, rate) in expected {
            let plan = factory.resolve(category);
            assert_eq!(plan.category(), category);
            assert!(
                (plan.rate() - rate).abs() < f64::EPSILON,
                "{category}: expected {rate}, got {}",
                plan.rate()
            );
        }
    }

    #[test]
    fn resolve_returns_independent_instances() {
        let factory = PlanFactory::new();
        let first = factory.resolve(PlanCategory::Domestic);
        let second = factory.resolve(PlanCategory::Domestic);
        assert!(!std::ptr::eq(addr(first.as_ref()), addr(second.as_ref())));
    }

    #[test]
    fn shared_returns_same_factory() {
        let a = PlanFactory::shared();
        let b = PlanFactory::shared();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn shared_initializes_once_across_threads() {
        let addrs: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| PlanFactory::shared() as *const PlanFactory as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn resolve_label_parses_case_insensitively() {
        let plan = PlanFactory::new().resolve_label("institutional").unwrap();
        assert_eq!(plan.category(), PlanCategory::Institutional);
    }

    #[test]
    fn resolve_label_rejects_unknown() {
        let err = PlanFactory::new().resolve_label("Industrial").unwrap_err();
        assert!(matches!(err, TariffError::UnknownCategory { .. }));
    }

    #[test]
    fn rate_card_lists_all_categories() {
        let card = PlanFactory::new().rate_card();
        assert_eq!(
            card,
            vec![
                (PlanCategory::Domestic, 3.50),
                (PlanCategory::Commercial, 7.50),
                (PlanCategory::Institutional, 5.50),
            ]
        );
    }

    #[test]
    #[traced_test]
    fn resolve_logs_category_and_rate() {
        PlanFactory::new().resolve(PlanCategory::Commercial);
        assert!(logs_contain("resolved rate plan"));
        assert!(logs_contain("category=Commercial"));
    }
}
