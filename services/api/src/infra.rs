use metrics_exporter_prometheus::PrometheusHandle;
use risk_screen::config::AppConfig;
use risk_screen::error::AppError;
use risk_screen::screening::climate::{ClimateScreeningConfig, ClimateScreeningEngine};
use risk_screen::screening::loan::{
    AlertError, AlertPublisher, LoanEligibilityEngine, LoanEligibilityService, RejectionAlert,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) type LoanService = LoanEligibilityService<LoggingAlertPublisher>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) climate: Arc<ClimateScreeningEngine>,
    pub(crate) loans: Arc<LoanService>,
}

/// Records rejection alerts as structured events for the configured webhook.
#[derive(Debug, Clone)]
pub(crate) struct LoggingAlertPublisher {
    webhook: String,
}

impl LoggingAlertPublisher {
    pub(crate) fn new(webhook: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into(),
        }
    }
}

impl AlertPublisher for LoggingAlertPublisher {
    fn publish(&self, alert: RejectionAlert) -> Result<(), AlertError> {
        warn!(
            webhook = %self.webhook,
            user_id = %alert.user_id,
            risk_score = alert.risk_score,
            loan_amount = alert.loan_amount,
            text = %alert.text(),
            "loan rejection alert"
        );
        Ok(())
    }
}

/// Build and validate the climate engine once, warning about unnormalized weight dimensions.
pub(crate) fn climate_engine(config: &AppConfig) -> Result<ClimateScreeningEngine, AppError> {
    let engine = ClimateScreeningEngine::new(
        ClimateScreeningConfig::standard()
            .with_missing_factor_policy(config.screening.missing_factors),
    )?;

    for (dimension, total) in engine.config().weights.unnormalized_dimensions() {
        warn!(dimension, total, "risk dimension weights do not sum to 1.0");
    }
    info!(
        missing_factors = ?config.screening.missing_factors,
        "climate screening tables validated"
    );

    Ok(engine)
}

pub(crate) fn loan_service(config: &AppConfig) -> LoanService {
    let alerts = config
        .alerts
        .slack_webhook_url
        .as_ref()
        .map(|url| Arc::new(LoggingAlertPublisher::new(url.clone())));
    LoanEligibilityService::new(LoanEligibilityEngine::default(), alerts)
}
