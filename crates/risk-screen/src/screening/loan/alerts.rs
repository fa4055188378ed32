use serde::{Deserialize, Serialize};

use super::domain::LoanApplication;

/// Notification raised when an application is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionAlert {
    pub user_id: String,
    pub risk_score: f64,
    pub loan_amount: f64,
}

impl RejectionAlert {
    pub fn for_application(application: &LoanApplication) -> Self {
        Self {
            user_id: application.user_id.clone(),
            risk_score: application.risk_score,
            loan_amount: application.loan_amount,
        }
    }

    /// Chat-webhook message body.
    pub fn text(&self) -> String {
        format!(
            "Loan Rejected\nUser: {}\nScore: {}\nAmount: KES {}",
            self.user_id, self.risk_score, self.loan_amount
        )
    }
}

/// Outbound notification hook (e.g. a Slack webhook adapter).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: RejectionAlert) -> Result<(), AlertError>;
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}
