use std::sync::Arc;

use chrono::Utc;

use super::alerts::{AlertError, AlertPublisher, RejectionAlert};
use super::domain::{LoanApplication, LoanDecision};
use super::report::{AuditLogEntry, LoanDecisionReport};
use super::LoanEligibilityEngine;
use crate::screening::{ScreeningEngine, ScreeningError};

/// Decision plus the audit row recorded for it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanEvaluation {
    pub report: LoanDecisionReport,
    pub audit: AuditLogEntry,
    pub alerted: bool,
}

/// Service composing the loan engine with the rejection alert hook.
pub struct LoanEligibilityService<A> {
    engine: Arc<LoanEligibilityEngine>,
    alerts: Option<Arc<A>>,
}

impl<A> LoanEligibilityService<A>
where
    A: AlertPublisher + 'static,
{
    pub fn new(engine: LoanEligibilityEngine, alerts: Option<Arc<A>>) -> Self {
        Self {
            engine: Arc::new(engine),
            alerts,
        }
    }

    pub fn engine(&self) -> &LoanEligibilityEngine {
        &self.engine
    }

    /// Decide an application and, when it is rejected and alerts are configured, publish an alert.
    pub fn evaluate(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanEvaluation, LoanServiceError> {
        let report = self.engine.assess(application)?;
        let audit = AuditLogEntry::record(application, &report, Utc::now());

        let mut alerted = false;
        if report.decision == LoanDecision::Rejected {
            if let Some(alerts) = &self.alerts {
                alerts.publish(RejectionAlert::for_application(application))?;
                alerted = true;
            }
        }

        Ok(LoanEvaluation {
            report,
            audit,
            alerted,
        })
    }
}

/// Error raised by the loan eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum LoanServiceError {
    #[error(transparent)]
    Screening(#[from] ScreeningError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
