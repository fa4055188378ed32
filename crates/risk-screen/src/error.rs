use crate::config::ConfigError;
use crate::screening::climate::batch::BatchImportError;
use crate::screening::loan::LoanServiceError;
use crate::screening::ScreeningError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Json(serde_json::Error),
    Screening(ScreeningError),
    Batch(BatchImportError),
    Loan(LoanServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Json(err) => write!(f, "json error: {}", err),
            AppError::Screening(err) => write!(f, "screening error: {}", err),
            AppError::Batch(err) => write!(f, "batch import error: {}", err),
            AppError::Loan(err) => write!(f, "loan evaluation error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Screening(err) => Some(err),
            AppError::Batch(err) => Some(err),
            AppError::Loan(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Screening(ScreeningError::InvalidConfiguration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Screening(_) | AppError::Loan(LoanServiceError::Screening(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Batch(_) | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Loan(LoanServiceError::Alert(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ScreeningError> for AppError {
    fn from(value: ScreeningError) -> Self {
        Self::Screening(value)
    }
}

impl From<BatchImportError> for AppError {
    fn from(value: BatchImportError) -> Self {
        Self::Batch(value)
    }
}

impl From<LoanServiceError> for AppError {
    fn from(value: LoanServiceError) -> Self {
        Self::Loan(value)
    }
}
