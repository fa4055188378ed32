//! Threshold-based loan eligibility decisions.

mod alerts;
mod domain;
mod policy;
mod report;
mod service;

pub use alerts::{AlertError, AlertPublisher, RejectionAlert};
pub use domain::{LoanApplication, LoanDecision};
pub use policy::{decide, LoanPolicy, HIGH_RISK_REASON, LOW_RISK_REASON, MEDIUM_RISK_REASON};
pub use report::{AuditLogEntry, LoanDecisionReport};
pub use service::{LoanEligibilityService, LoanEvaluation, LoanServiceError};

use super::{ScreeningEngine, ScreeningError};

/// Stateless engine applying a `LoanPolicy` to validated applications.
#[derive(Debug, Clone, Default)]
pub struct LoanEligibilityEngine {
    policy: LoanPolicy,
}

impl LoanEligibilityEngine {
    pub fn new(policy: LoanPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }
}

impl ScreeningEngine for LoanEligibilityEngine {
    type Input = LoanApplication;
    type Report = LoanDecisionReport;

    fn assess(&self, input: &LoanApplication) -> Result<LoanDecisionReport, ScreeningError> {
        input.validate()?;
        let (decision, reason) = self.policy.decide(input.risk_score, input.loan_amount);
        Ok(LoanDecisionReport {
            user_id: input.user_id.clone(),
            risk_score: input.risk_score,
            decision,
            reason: reason.to_string(),
        })
    }
}
