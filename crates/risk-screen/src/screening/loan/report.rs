use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{LoanApplication, LoanDecision};

/// Loan decision record. Field names are the external JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDecisionReport {
    pub user_id: String,
    pub risk_score: f64,
    pub decision: LoanDecision,
    pub reason: String,
}

/// Audit trail row for a decided application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub user_id: String,
    pub risk_score: f64,
    pub loan_amount: f64,
    pub decision: LoanDecision,
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    pub fn record(
        application: &LoanApplication,
        report: &LoanDecisionReport,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: report.user_id.clone(),
            risk_score: report.risk_score,
            loan_amount: application.loan_amount,
            decision: report.decision,
            timestamp,
        }
    }
}
