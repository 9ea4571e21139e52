//! LTV:CAC health classification.

use serde::Serialize;

use crate::constants::{HEALTHY_LTV_CAC, TIGHT_LTV_CAC};

/// Health band of an LTV:CAC ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LtvCacHealth {
    /// Ratio >= 3.
    Healthy,
    /// 2 <= ratio < 3.
    Tight,
    /// Ratio < 2.
    Danger,
    /// No ratio could be computed.
    Unknown,
}

/// Words used to name the health bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthVocabulary {
    /// Healthy / Borderline / Weak.
    #[default]
    Borderline,
    /// Healthy / Tight / Danger.
    Tight,
}

/// Classify an LTV:CAC ratio.
#[must_use]
pub fn classify_ltv_cac(ratio: Option<f64>) -> LtvCacHealth {
    match ratio {
        Some(r) if r.is_finite() && r >= HEALTHY_LTV_CAC => LtvCacHealth::Healthy,
        Some(r) if r.is_finite() && r >= TIGHT_LTV_CAC => LtvCacHealth::Tight,
        Some(r) if r.is_finite() => LtvCacHealth::Danger,
        _ => LtvCacHealth::Unknown,
    }
}

impl LtvCacHealth {
    /// Short band name.
    #[must_use]
    pub fn label(self, vocabulary: HealthVocabulary) -> &'static str {
        match (self, vocabulary) {
            (Self::Healthy, _) => "Healthy",
            (Self::Tight, HealthVocabulary::Borderline) => "Borderline",
            (Self::Tight, HealthVocabulary::Tight) => "Tight",
            (Self::Danger, HealthVocabulary::Borderline) => "Weak",
            (Self::Danger, HealthVocabulary::Tight) => "Danger",
            (Self::Unknown, _) => "Unknown",
        }
    }

    /// One-line advice shown next to the ratio.
    #[must_use]
    pub fn guidance(self, vocabulary: HealthVocabulary) -> String {
        let advice = match self {
            Self::Healthy => "target is typically 3x+ LTV:CAC.",
            Self::Tight => "consider improving CAC or LTV to reach 3x+.",
            Self::Danger => "acquisition likely unprofitable unless strategic.",
            Self::Unknown => return "Add LTV per customer to see LTV:CAC.".to_string(),
        };
        format!("{}: {advice}", self.label(vocabulary))
    }

    /// Whether a ratio was available.
    #[must_use]
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}
