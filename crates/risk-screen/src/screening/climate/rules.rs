use super::domain::CompanyProfile;
use crate::screening::ScreeningError;

const HIGH_CARBON_INTENSITY: f64 = 100.0;
const LOW_CARBON_INTENSITY: f64 = 50.0;
const HIGH_PHYSICAL_RISK: f64 = 7.0;
const HIGH_TRANSITION_RISK: f64 = 6.0;

pub const HIGH_CARBON_INTENSITY_RISK: &str = "High carbon intensity";
pub const HIGH_PHYSICAL_RISK_LABEL: &str = "High physical climate risk";
pub const HIGH_TRANSITION_RISK_LABEL: &str = "High transition risk";

pub const RENEWABLE_GROWTH: &str = "Renewable energy market growth";
pub const LOW_CARBON_ADVANTAGE: &str = "Low-carbon competitive advantage";
pub const GREEN_INNOVATION: &str = "Green technology innovation";

/// Carbon footprint per unit of revenue. Zero revenue is an error, never infinity.
pub fn carbon_intensity(profile: &CompanyProfile) -> Result<f64, ScreeningError> {
    if profile.revenue == 0.0 {
        return Err(ScreeningError::DivisionByZero {
            numerator: "carbon_footprint",
            denominator: "revenue",
        });
    }
    Ok(profile.carbon_footprint / profile.revenue)
}

/// Qualitative risks; every matching rule is reported, in fixed order.
pub fn identify_risks(profile: &CompanyProfile) -> Result<Vec<String>, ScreeningError> {
    let intensity = carbon_intensity(profile)?;
    let mut risks = Vec::new();

    if intensity > HIGH_CARBON_INTENSITY {
        risks.push(HIGH_CARBON_INTENSITY_RISK.to_string());
    }
    if profile.physical_risk_score > HIGH_PHYSICAL_RISK {
        risks.push(HIGH_PHYSICAL_RISK_LABEL.to_string());
    }
    if profile.transition_risk_score > HIGH_TRANSITION_RISK {
        risks.push(HIGH_TRANSITION_RISK_LABEL.to_string());
    }

    Ok(risks)
}

/// Climate-related opportunities, in fixed order.
pub fn identify_opportunities(profile: &CompanyProfile) -> Result<Vec<String>, ScreeningError> {
    let intensity = carbon_intensity(profile)?;
    let mut opportunities = Vec::new();

    if profile.industry_mentions("renewable") {
        opportunities.push(RENEWABLE_GROWTH.to_string());
    }
    if intensity < LOW_CARBON_INTENSITY {
        opportunities.push(LOW_CARBON_ADVANTAGE.to_string());
    }
    if profile.industry_mentions("green") {
        opportunities.push(GREEN_INNOVATION.to_string());
    }

    Ok(opportunities)
}
