use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use risk_screen::error::AppError;
use risk_screen::screening::climate::batch::{screen_batch, BatchEntry, CompanyCsvImporter};
use risk_screen::screening::climate::{ClimateRiskReport, CompanySubmission};
use risk_screen::screening::loan::{LoanApplication, LoanDecisionReport};
use serde::Serialize;
use serde_json::json;
use std::io::Cursor;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    pub(crate) screened: usize,
    pub(crate) failed: usize,
    pub(crate) entries: Vec<BatchEntry>,
}

pub(crate) fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/climate/report", post(climate_report_endpoint))
        .route("/api/v1/climate/batch", post(climate_batch_endpoint))
        .route("/api/v1/loan/decision", post(loan_decision_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn climate_report_endpoint(
    State(state): State<AppState>,
    Json(submission): Json<CompanySubmission>,
) -> Result<Json<ClimateRiskReport>, AppError> {
    let report = state.climate.assess_submission(submission)?;
    info!(
        company = %report.company_name,
        compliant = report.esg_compliant,
        score = report.climate_risk_score,
        "climate report generated"
    );
    Ok(Json(report))
}

pub(crate) async fn climate_batch_endpoint(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<BatchResponse>, AppError> {
    let rows = CompanyCsvImporter::from_reader(Cursor::new(body.into_bytes()))?;
    let entries = screen_batch(&state.climate, rows);
    let screened = entries
        .iter()
        .filter(|entry| entry.report().is_some())
        .count();
    let failed = entries.len() - screened;
    info!(screened, failed, "climate batch screened");

    Ok(Json(BatchResponse {
        screened,
        failed,
        entries,
    }))
}

pub(crate) async fn loan_decision_endpoint(
    State(state): State<AppState>,
    Json(application): Json<LoanApplication>,
) -> Result<Json<LoanDecisionReport>, AppError> {
    let evaluation = state.loans.evaluate(&application)?;
    let audit = serde_json::to_string(&evaluation.audit)?;
    info!(
        user_id = %evaluation.report.user_id,
        decision = evaluation.report.decision.label(),
        alerted = evaluation.alerted,
        audit = %audit,
        "loan decision recorded"
    );
    Ok(Json(evaluation.report))
}
