use serde::{Deserialize, Serialize};

use crate::screening::ScreeningError;

/// Loan request paired with the risk score supplied by an external scoring provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub user_id: String,
    pub loan_amount: f64,
    pub risk_score: f64,
}

impl LoanApplication {
    pub fn new(user_id: impl Into<String>, loan_amount: f64, risk_score: f64) -> Self {
        Self {
            user_id: user_id.into(),
            loan_amount,
            risk_score,
        }
    }

    /// A user id is required and both numbers must be finite. Amounts are not clamped.
    pub fn validate(&self) -> Result<(), ScreeningError> {
        if self.user_id.trim().is_empty() {
            return Err(ScreeningError::invalid_input(
                "user_id",
                "a user id is required",
            ));
        }
        if !self.loan_amount.is_finite() {
            return Err(ScreeningError::invalid_input(
                "loan_amount",
                format!("expected a finite number, found {}", self.loan_amount),
            ));
        }
        if !self.risk_score.is_finite() {
            return Err(ScreeningError::invalid_input(
                "risk_score",
                format!("expected a finite number, found {}", self.risk_score),
            ));
        }
        Ok(())
    }
}

/// Binary loan outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanDecision {
    Approved,
    Rejected,
}

impl LoanDecision {
    pub const fn label(self) -> &'static str {
        match self {
            LoanDecision::Approved => "Approved",
            LoanDecision::Rejected => "Rejected",
        }
    }

    pub const fn is_approved(self) -> bool {
        matches!(self, LoanDecision::Approved)
    }
}
