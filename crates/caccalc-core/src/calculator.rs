//! The CAC calculator and its error type.
//!
//! `CacCalculator` maps one [`CacInputs`] snapshot to a [`CacReport`] under a
//! [`VariantConfig`]. It holds no state between calls.

use tracing::debug;

use crate::health::classify_ltv_cac;
use crate::inputs::CacInputs;
use crate::metrics;
use crate::report::CacReport;
use crate::variant::{Variant, VariantConfig};

/// Configuration errors raised at the input boundary.
///
/// Metric computation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacError {
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("unknown time unit: {0}")]
    UnknownTimeUnit(String),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}

/// Calculator bound to one variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacCalculator {
    config: VariantConfig,
}

impl CacCalculator {
    #[must_use]
    pub fn new(config: VariantConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.config())
    }

    /// Compute every metric for one snapshot.
    #[must_use]
    pub fn calculate(&self, raw: &CacInputs) -> CacReport {
        let inputs = raw.sanitized();
        let config = &self.config;

        let (salary, overhead) = if config.include_loaded_costs {
            (inputs.salary_spend, inputs.overhead_spend)
        } else {
            (0.0, 0.0)
        };
        let total_spend =
            metrics::total_spend(inputs.paid_spend, inputs.other_spend, salary, overhead);

        let blended_cac = metrics::blended_cac(total_spend, inputs.new_customers);
        // Paid CAC is a per-customer metric: no new customers, no paid CAC.
        let paid_cac = blended_cac.and_then(|_| {
            metrics::paid_cac(
                inputs.paid_spend,
                config.paid_customers(inputs.new_customers, inputs.paid_customers),
            )
        });
        let ltv_cac_ratio = blended_cac
            .and_then(|cac| metrics::ltv_to_cac_ratio(inputs.ltv_per_customer, cac));

        let (gross_profit_per_order, orders_to_break_even) = if config.break_even {
            let profit = metrics::gross_profit_per_order(
                inputs.average_order_value,
                inputs.gross_margin_percent,
            );
            let orders = blended_cac.and_then(|cac| {
                metrics::orders_to_break_even(
                    cac,
                    inputs.average_order_value,
                    inputs.gross_margin_percent,
                )
            });
            (Some(profit).filter(|p| *p > 0.0), orders)
        } else {
            (None, None)
        };

        if blended_cac.is_none() {
            debug!(
                total_spend,
                "no new customers; per-customer metrics unavailable"
            );
        }
        debug!(
            variant = %config.variant,
            new_customers = inputs.new_customers,
            total_spend,
            ?blended_cac,
            ?paid_cac,
            ?ltv_cac_ratio,
            "calculated CAC"
        );

        CacReport {
            variant: config.variant,
            health: classify_ltv_cac(ltv_cac_ratio),
            inputs,
            total_spend,
            blended_cac,
            paid_cac,
            ltv_cac_ratio,
            gross_profit_per_order,
            orders_to_break_even,
        }
    }
}
