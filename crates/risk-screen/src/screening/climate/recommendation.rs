use serde::{Deserialize, Serialize};

const HIGH_RISK_THRESHOLD: f64 = 8.0;
const MODERATE_RISK_THRESHOLD: f64 = 5.0;

/// Investment recommendation derived from exclusion status and composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    DoNotProceed,
    HighRisk,
    ModerateRisk,
    LowRisk,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::DoNotProceed => {
                "Do not proceed - ESG exclusion list violations detected"
            }
            Recommendation::HighRisk => "High risk - requires detailed due diligence",
            Recommendation::ModerateRisk => "Moderate risk - proceed with caution",
            Recommendation::LowRisk => "Low risk - suitable for investment consideration",
        }
    }
}

/// Ordered rules, first match wins. Thresholds are strictly greater-than.
pub fn classify(compliant: bool, score: f64) -> Recommendation {
    if !compliant {
        Recommendation::DoNotProceed
    } else if score > HIGH_RISK_THRESHOLD {
        Recommendation::HighRisk
    } else if score > MODERATE_RISK_THRESHOLD {
        Recommendation::ModerateRisk
    } else {
        Recommendation::LowRisk
    }
}
