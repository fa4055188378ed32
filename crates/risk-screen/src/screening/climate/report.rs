use serde::{Deserialize, Serialize};

use super::domain::CompanyProfile;
use super::exclusion::ExclusionOutcome;
use super::recommendation::Recommendation;
use super::weights::ScoreResult;
use crate::screening::round_score;

/// Climate risk screening report. Field names are the external JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRiskReport {
    pub company_name: String,
    pub esg_compliant: bool,
    pub esg_violations: Vec<String>,
    pub climate_risk_score: f64,
    pub esg_risks: Vec<String>,
    pub climate_opportunities: Vec<String>,
    pub recommendation: String,
}

impl ClimateRiskReport {
    /// File name offered when the report is downloaded as JSON.
    pub fn download_file_name(&self) -> String {
        format!("{}_climate_risk_report.json", self.company_name)
    }

    /// Four-space indented JSON document.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(<serde_json::Error as serde::ser::Error>::custom)
    }
}

/// Merge component outputs into the final report, rounding the score only here.
pub fn assemble(
    profile: &CompanyProfile,
    exclusion: ExclusionOutcome,
    score: &ScoreResult,
    risks: Vec<String>,
    opportunities: Vec<String>,
    recommendation: Recommendation,
) -> ClimateRiskReport {
    ClimateRiskReport {
        company_name: profile.company_name.clone(),
        esg_compliant: exclusion.compliant,
        esg_violations: exclusion.violations,
        climate_risk_score: round_score(score.composite),
        esg_risks: risks,
        climate_opportunities: opportunities,
        recommendation: recommendation.label().to_string(),
    }
}
