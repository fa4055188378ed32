use serde::{Deserialize, Serialize};

use super::domain::LoanDecision;

pub const LOW_RISK_REASON: &str = "Low risk";
pub const MEDIUM_RISK_REASON: &str = "Medium risk (limited amount)";
pub const HIGH_RISK_REASON: &str = "High risk";

/// Score and amount thresholds for the loan decision rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub approval_score: f64,
    pub medium_risk_floor: f64,
    pub medium_risk_amount_cap: f64,
}

impl LoanPolicy {
    pub const STANDARD: LoanPolicy = LoanPolicy {
        approval_score: 700.0,
        medium_risk_floor: 500.0,
        medium_risk_amount_cap: 50_000.0,
    };

    /// Ordered rules, first match wins.
    pub fn decide(&self, risk_score: f64, loan_amount: f64) -> (LoanDecision, &'static str) {
        if risk_score >= self.approval_score {
            (LoanDecision::Approved, LOW_RISK_REASON)
        } else if risk_score >= self.medium_risk_floor
            && risk_score < self.approval_score
            && loan_amount <= self.medium_risk_amount_cap
        {
            (LoanDecision::Approved, MEDIUM_RISK_REASON)
        } else {
            (LoanDecision::Rejected, HIGH_RISK_REASON)
        }
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Decision under the standard thresholds.
pub fn decide(risk_score: f64, loan_amount: f64) -> (LoanDecision, &'static str) {
    LoanPolicy::STANDARD.decide(risk_score, loan_amount)
}
