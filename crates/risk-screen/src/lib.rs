//! Deterministic screening engines for climate/ESG pre-screening and loan eligibility.
//!
//! The `screening` module holds the pure scoring-and-classification core. Configuration,
//! telemetry, and the application error type support the host binaries.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
