use super::domain::{CompanyProfile, CompanySubmission, SubFactorScores, SCORE_SUFFIX};
use crate::screening::ScreeningError;

/// Convert a raw submission into a validated company profile.
///
/// Required text fields must be present (the industry may be empty, which simply matches no
/// exclusion keyword). Numbers must be finite, and revenue and carbon footprint non-negative.
/// Risk scores outside 0-10 are accepted as given.
pub fn profile_from_submission(
    submission: CompanySubmission,
) -> Result<CompanyProfile, ScreeningError> {
    let CompanySubmission {
        company_name,
        industry,
        location,
        revenue,
        carbon_footprint,
        physical_risk_score,
        transition_risk_score,
        factor_scores,
    } = submission;

    let company_name = required_text("company_name", company_name)?;
    if company_name.trim().is_empty() {
        return Err(ScreeningError::invalid_input(
            "company_name",
            "company name must not be blank",
        ));
    }
    let industry = required_text("industry", industry)?;
    let location = required_text("location", location)?;

    let revenue = non_negative("revenue", required_number("revenue", revenue)?)?;
    let carbon_footprint = non_negative(
        "carbon_footprint",
        required_number("carbon_footprint", carbon_footprint)?,
    )?;
    let physical_risk_score = required_number("physical_risk_score", physical_risk_score)?;
    let transition_risk_score = required_number("transition_risk_score", transition_risk_score)?;

    let mut sub_factors = SubFactorScores::new();
    for (field, score) in factor_scores {
        let score = finite(&field, score)?;
        let factor = field.strip_suffix(SCORE_SUFFIX).unwrap_or(&field);
        if factor.is_empty() {
            return Err(ScreeningError::invalid_input(field, "sub-factor name is empty"));
        }
        sub_factors.insert(factor, score);
    }

    Ok(CompanyProfile {
        company_name,
        industry,
        location,
        revenue,
        carbon_footprint,
        physical_risk_score,
        transition_risk_score,
        sub_factors,
    })
}

fn required_text(field: &str, value: Option<String>) -> Result<String, ScreeningError> {
    value.ok_or_else(|| ScreeningError::missing_field(field))
}

fn required_number(field: &str, value: Option<f64>) -> Result<f64, ScreeningError> {
    let value = value.ok_or_else(|| ScreeningError::missing_field(field))?;
    finite(field, value)
}

fn finite(field: &str, value: f64) -> Result<f64, ScreeningError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScreeningError::invalid_input(
            field,
            format!("expected a finite number, found {value}"),
        ))
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64, ScreeningError> {
    if value < 0.0 {
        return Err(ScreeningError::invalid_input(
            field,
            format!("must not be negative, found {value}"),
        ));
    }
    Ok(value)
}
