//! Result of one calculation.

use serde::Serialize;

use crate::health::LtvCacHealth;
use crate::inputs::CacInputs;
use crate::variant::Variant;

/// Derived metrics for one input snapshot.
///
/// Absent metrics serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacReport {
    pub variant: Variant,
    /// Sanitized inputs the metrics were computed from.
    pub inputs: CacInputs,
    pub total_spend: f64,
    pub blended_cac: Option<f64>,
    pub paid_cac: Option<f64>,
    pub ltv_cac_ratio: Option<f64>,
    pub health: LtvCacHealth,
    /// Only computed by variants with break-even orders.
    pub gross_profit_per_order: Option<f64>,
    pub orders_to_break_even: Option<f64>,
}

impl CacReport {
    /// Whether per-customer metrics could be computed at all.
    #[must_use]
    pub fn has_customers(&self) -> bool {
        self.blended_cac.is_some()
    }
}
