use crate::cli::ServeArgs;
use crate::infra::{climate_engine, loan_service, AppState};
use crate::routes::app_router;
use axum_prometheus::PrometheusMetricLayer;
use risk_screen::config::AppConfig;
use risk_screen::error::AppError;
use risk_screen::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        climate: Arc::new(climate_engine(&config)?),
        loans: Arc::new(loan_service(&config)),
    };

    let app = app_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        alerts = config.alerts.enabled(),
        "risk screening service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
