//! Calculator variants.
//!
//! The three variants are configurations of the same calculator. They differ
//! in which spend components count, which customers divide paid spend, whether
//! break-even orders are computed, and how health bands are worded.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calculator::CacError;
use crate::health::HealthVocabulary;

/// Named calculator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Paid + other spend, paid CAC per new customer.
    #[default]
    Basic,
    /// Adds salary and overhead; paid CAC per paid customer.
    Loaded,
    /// Adds break-even orders from AOV and gross margin.
    Ecommerce,
}

impl Variant {
    /// All variants in display order.
    pub const ALL: [Variant; 3] = [Variant::Basic, Variant::Loaded, Variant::Ecommerce];

    /// Variant name as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Loaded => "loaded",
            Self::Ecommerce => "ecommerce",
        }
    }

    /// The configuration this variant stands for.
    #[must_use]
    pub fn config(self) -> VariantConfig {
        match self {
            Self::Basic => VariantConfig {
                variant: self,
                include_loaded_costs: false,
                paid_denominator: PaidDenominator::NewCustomers,
                break_even: false,
                vocabulary: HealthVocabulary::Borderline,
            },
            Self::Loaded => VariantConfig {
                variant: self,
                include_loaded_costs: true,
                paid_denominator: PaidDenominator::PaidCustomers,
                break_even: false,
                vocabulary: HealthVocabulary::Tight,
            },
            Self::Ecommerce => VariantConfig {
                variant: self,
                include_loaded_costs: false,
                paid_denominator: PaidDenominator::NewCustomers,
                break_even: true,
                vocabulary: HealthVocabulary::Tight,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "blended" => Ok(Self::Basic),
            "loaded" | "fully-loaded" => Ok(Self::Loaded),
            "ecommerce" | "ecom" => Ok(Self::Ecommerce),
            other => Err(CacError::UnknownVariant(other.to_string())),
        }
    }
}

/// Customers that divide paid spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaidDenominator {
    NewCustomers,
    /// Paid customers, or new customers when no paid customers were entered.
    PaidCustomers,
}

/// Resolved settings for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantConfig {
    pub variant: Variant,
    /// Count salary and overhead towards total spend.
    pub include_loaded_costs: bool,
    pub paid_denominator: PaidDenominator,
    /// Compute orders to break even.
    pub break_even: bool,
    pub vocabulary: HealthVocabulary,
}

impl VariantConfig {
    /// Pick the paid-CAC denominator from the snapshot's customer counts.
    #[must_use]
    pub fn paid_customers(&self, new_customers: f64, paid_customers: f64) -> f64 {
        match self.paid_denominator {
            PaidDenominator::NewCustomers => new_customers,
            PaidDenominator::PaidCustomers if paid_customers > 0.0 => paid_customers,
            PaidDenominator::PaidCustomers => new_customers,
        }
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Variant::default().config()
    }
}
