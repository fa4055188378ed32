use std::sync::{Arc, Mutex};

use crate::screening::climate::{
    profile_from_submission, ClimateScreeningEngine, CompanyProfile, CompanySubmission,
    SubFactorScores,
};
use crate::screening::loan::{
    AlertError, AlertPublisher, LoanEligibilityEngine, LoanEligibilityService, RejectionAlert,
};

pub(super) const PHYSICAL_FACTORS: [&str; 4] =
    ["flood_risk", "heat_stress", "sea_level_rise", "wildfire_risk"];
pub(super) const TRANSITION_FACTORS: [&str; 3] = [
    "carbon_price_exposure",
    "regulatory_compliance",
    "technology_disruption",
];

/// Form defaults for a renewable energy company.
pub(super) fn submission() -> CompanySubmission {
    CompanySubmission {
        company_name: Some("GreenTech Solutions".to_string()),
        industry: Some("Renewable Energy".to_string()),
        location: Some("California".to_string()),
        revenue: Some(100_000_000.0),
        carbon_footprint: Some(2_000_000.0),
        physical_risk_score: Some(4.5),
        transition_risk_score: Some(3.2),
        factor_scores: [
            ("flood_risk_score", 5.0),
            ("heat_stress_score", 4.0),
            ("sea_level_rise_score", 3.5),
            ("wildfire_risk_score", 5.0),
            ("carbon_price_exposure_score", 3.0),
            ("regulatory_compliance_score", 3.5),
            ("technology_disruption_score", 3.0),
        ]
        .into_iter()
        .map(|(name, score)| (name.to_string(), score))
        .collect(),
    }
}

pub(super) fn profile() -> CompanyProfile {
    profile_from_submission(submission()).expect("fixture submission is valid")
}

pub(super) fn profile_with_industry(industry: &str) -> CompanyProfile {
    let mut profile = profile();
    profile.industry = industry.to_string();
    profile
}

pub(super) fn sub_factors() -> SubFactorScores {
    profile().sub_factors
}

/// Multiply every listed factor by `k`, leaving the others untouched.
pub(super) fn scaled(scores: &SubFactorScores, factors: &[&str], k: f64) -> SubFactorScores {
    scores
        .iter()
        .map(|(name, score)| {
            if factors.iter().any(|factor| *factor == name) {
                (name, score * k)
            } else {
                (name, score)
            }
        })
        .collect()
}

/// Physical 3.325, transition 1.9.
pub(super) const EXPECTED_PHYSICAL: f64 = 3.325;
pub(super) const EXPECTED_TRANSITION: f64 = 1.9;
pub(super) const EXPECTED_COMPOSITE: f64 = 0.6 * EXPECTED_PHYSICAL + 0.4 * EXPECTED_TRANSITION;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn climate_engine() -> ClimateScreeningEngine {
    ClimateScreeningEngine::standard().expect("standard tables validate")
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<RejectionAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<RejectionAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: RejectionAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct OfflineAlerts;

impl AlertPublisher for OfflineAlerts {
    fn publish(&self, _alert: RejectionAlert) -> Result<(), AlertError> {
        Err(AlertError::Transport("webhook unreachable".to_string()))
    }
}

pub(super) fn loan_service() -> (LoanEligibilityService<MemoryAlerts>, Arc<MemoryAlerts>) {
    let alerts = Arc::new(MemoryAlerts::default());
    let service =
        LoanEligibilityService::new(LoanEligibilityEngine::default(), Some(alerts.clone()));
    (service, alerts)
}
