use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::screening::climate::MissingFactorPolicy;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the host application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub screening: ScreeningConfig,
    pub alerts: AlertConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let missing_factors = match env::var("SCREENING_MISSING_FACTORS") {
            Ok(raw) => parse_missing_factor_policy(&raw)?,
            Err(_) => MissingFactorPolicy::Reject,
        };

        let slack_webhook_url = env::var("SLACK_WEBHOOK_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            screening: ScreeningConfig { missing_factors },
            alerts: AlertConfig { slack_webhook_url },
        })
    }
}

fn parse_missing_factor_policy(raw: &str) -> Result<MissingFactorPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "reject" | "error" => Ok(MissingFactorPolicy::Reject),
        "zero" | "treat_as_zero" => Ok(MissingFactorPolicy::TreatAsZero),
        _ => Err(ConfigError::InvalidMissingFactorPolicy(raw.to_string())),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Scoring policy knobs exposed to operators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreeningConfig {
    pub missing_factors: MissingFactorPolicy,
}

/// Rejection alerts are enabled only when a webhook is configured.
#[derive(Debug, Clone, Default)]
pub struct AlertConfig {
    pub slack_webhook_url: Option<String>,
}

impl AlertConfig {
    pub fn enabled(&self) -> bool {
        self.slack_webhook_url.is_some()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMissingFactorPolicy(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMissingFactorPolicy(value) => write!(
                f,
                "SCREENING_MISSING_FACTORS must be 'reject' or 'zero', found '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidMissingFactorPolicy(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
