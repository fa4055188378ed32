//! End-to-end scenarios exercised through the public engine facade.

use risk_screen::screening::climate::{
    ClimateRiskReport, ClimateScreeningEngine, CompanySubmission, Recommendation,
};
use risk_screen::screening::loan::{LoanApplication, LoanDecision, LoanEligibilityEngine};
use risk_screen::screening::{ScreeningEngine, ScreeningError};
use serde_json::json;

fn company_payload(industry: &str) -> CompanySubmission {
    serde_json::from_value(json!({
        "company_name": "GreenTech Solutions",
        "industry": industry,
        "location": "California",
        "revenue": 100000000.0,
        "carbon_footprint": 2000000.0,
        "physical_risk_score": 4.5,
        "transition_risk_score": 3.2,
        "flood_risk_score": 5.0,
        "heat_stress_score": 4.0,
        "sea_level_rise_score": 3.5,
        "wildfire_risk_score": 5.0,
        "carbon_price_exposure_score": 3.0,
        "regulatory_compliance_score": 3.5,
        "technology_disruption_score": 3.0
    }))
    .expect("payload parses")
}

#[test]
fn renewable_energy_company_is_low_risk() {
    let engine = ClimateScreeningEngine::standard().expect("standard tables validate");

    let report = engine
        .assess_submission(company_payload("Renewable Energy"))
        .expect("report generated");

    assert_eq!(
        report,
        ClimateRiskReport {
            company_name: "GreenTech Solutions".to_string(),
            esg_compliant: true,
            esg_violations: Vec::new(),
            climate_risk_score: 2.75,
            esg_risks: Vec::new(),
            climate_opportunities: vec![
                "Renewable energy market growth".to_string(),
                "Low-carbon competitive advantage".to_string(),
            ],
            recommendation: Recommendation::LowRisk.label().to_string(),
        }
    );
}

#[test]
fn coal_mining_company_is_excluded() {
    let engine = ClimateScreeningEngine::standard().expect("standard tables validate");

    let report = engine
        .assess_submission(company_payload("coal_mining"))
        .expect("report generated");

    assert!(!report.esg_compliant);
    assert_eq!(report.esg_violations, vec!["fossil_fuels".to_string()]);
    assert_eq!(report.recommendation, Recommendation::DoNotProceed.label());
}

#[test]
fn form_payload_ignores_unrelated_fields() {
    let submission: CompanySubmission = serde_json::from_value(json!({
        "company_name": "GreenTech Solutions",
        "industry": "Renewable Energy",
        "location": "California",
        "revenue": 100000000.0,
        "carbon_footprint": 2000000.0,
        "physical_risk_score": 4.5,
        "transition_risk_score": 3.2,
        "flood_risk_score": 5.0,
        "heat_stress_score": 4.0,
        "sea_level_rise_score": 3.5,
        "wildfire_risk_score": 5.0,
        "carbon_price_exposure_score": 3.0,
        "regulatory_compliance_score": 3.5,
        "technology_disruption_score": 3.0,
        "notes": "pilot customer",
        "employees": 50
    }))
    .expect("extra fields are ignored");

    let report = ClimateScreeningEngine::standard()
        .expect("standard tables validate")
        .assess_submission(submission)
        .expect("report generated");

    assert_eq!(report.climate_risk_score, 2.75);
}

#[test]
fn report_json_round_trip_is_lossless() {
    let engine = ClimateScreeningEngine::standard().expect("standard tables validate");
    let report = engine
        .assess_submission(company_payload("Green hydrogen"))
        .expect("report generated");

    let encoded = report.to_pretty_json().expect("encode");
    let decoded: ClimateRiskReport = serde_json::from_str(&encoded).expect("decode");

    assert_eq!(decoded, report);
}

#[test]
fn zero_revenue_surfaces_instead_of_scoring_zero() {
    let engine = ClimateScreeningEngine::standard().expect("standard tables validate");
    let mut submission = company_payload("Renewable Energy");
    submission.revenue = Some(0.0);

    let err = engine
        .assess_submission(submission)
        .expect_err("division by zero surfaces");

    assert!(matches!(err, ScreeningError::DivisionByZero { .. }));
}

#[test]
fn loan_scenarios() {
    let engine = LoanEligibilityEngine::default();

    let strong = engine
        .assess(&LoanApplication::new("CUST-1", 1_000_000.0, 750.0))
        .expect("valid");
    assert_eq!(strong.decision, LoanDecision::Approved);
    assert_eq!(strong.reason, "Low risk");

    let capped = engine
        .assess(&LoanApplication::new("CUST-2", 60_000.0, 550.0))
        .expect("valid");
    assert_eq!(capped.decision, LoanDecision::Rejected);
    assert_eq!(capped.reason, "High risk");
}
