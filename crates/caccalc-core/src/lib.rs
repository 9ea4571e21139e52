//! # caccalc-core
//!
//! Core library for the CacCalc customer acquisition cost calculator.
//! Computes total spend, blended and paid CAC, LTV:CAC health and
//! break-even orders from one snapshot of numeric inputs.

pub mod calculator;
pub mod constants;
pub mod health;
pub mod inputs;
pub mod metrics;
pub mod report;
pub mod variant;

// Re-exports
pub use calculator::{CacCalculator, CacError};
pub use constants::{exit_codes, HEALTHY_LTV_CAC, TIGHT_LTV_CAC};
pub use health::{classify_ltv_cac, HealthVocabulary, LtvCacHealth};
pub use inputs::{parse_number, sanitize, CacInputs, TimeUnit};
pub use report::CacReport;
pub use variant::{PaidDenominator, Variant, VariantConfig};

/// Compute the default (basic) report for a snapshot.
///
/// For other variants, build a [`CacCalculator`] with
/// [`CacCalculator::for_variant`].
///
/// # Example
/// ```
/// let inputs = caccalc_core::CacInputs {
///     new_customers: 250.0,
///     paid_spend: 12_000.0,
///     other_spend: 8_000.0,
///     ..Default::default()
/// };
/// let report = caccalc_core::calculate(&inputs);
/// assert_eq!(report.blended_cac, Some(80.0));
/// ```
#[must_use]
pub fn calculate(inputs: &CacInputs) -> CacReport {
    CacCalculator::default().calculate(inputs)
}
