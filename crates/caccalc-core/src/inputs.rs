//! Input snapshot and raw field parsing.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calculator::CacError;

/// Clamp a raw number into the domain of the metric functions.
///
/// Non-finite and negative values become 0.
#[must_use]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse the text of a numeric field.
///
/// Blank, unparsable, non-finite and negative input all read as 0.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>().map_or(0.0, sanitize)
}

/// Reporting period unit. Display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Month,
    Week,
    Year,
}

impl TimeUnit {
    /// Unit name, singular or plural.
    #[must_use]
    pub fn label(self, plural: bool) -> &'static str {
        match (self, plural) {
            (Self::Month, false) => "month",
            (Self::Month, true) => "months",
            (Self::Week, false) => "week",
            (Self::Week, true) => "weeks",
            (Self::Year, false) => "year",
            (Self::Year, true) => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(false))
    }
}

impl FromStr for TimeUnit {
    type Err = CacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "month" | "months" | "monthly" => Ok(Self::Month),
            "week" | "weeks" | "weekly" => Ok(Self::Week),
            "year" | "years" | "yearly" | "annual" => Ok(Self::Year),
            other => Err(CacError::UnknownTimeUnit(other.to_string())),
        }
    }
}

/// One snapshot of the calculator's fields.
///
/// Optional fields use 0 for "absent".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacInputs {
    pub new_customers: f64,
    /// Customers attributable to paid channels.
    pub paid_customers: f64,
    pub paid_spend: f64,
    pub other_spend: f64,
    pub salary_spend: f64,
    pub overhead_spend: f64,
    pub ltv_per_customer: f64,
    pub gross_margin_percent: f64,
    pub average_order_value: f64,
    pub time_unit: TimeUnit,
    pub period_label: String,
}

impl CacInputs {
    /// Copy with every numeric field passed through [`sanitize`] and the
    /// period label trimmed.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            new_customers: sanitize(self.new_customers),
            paid_customers: sanitize(self.paid_customers),
            paid_spend: sanitize(self.paid_spend),
            other_spend: sanitize(self.other_spend),
            salary_spend: sanitize(self.salary_spend),
            overhead_spend: sanitize(self.overhead_spend),
            ltv_per_customer: sanitize(self.ltv_per_customer),
            gross_margin_percent: sanitize(self.gross_margin_percent),
            average_order_value: sanitize(self.average_order_value),
            time_unit: self.time_unit,
            period_label: self.period_label.trim().to_string(),
        }
    }
}
