//! Scoring-and-classification core shared by the climate and loan engines.
//!
//! Every engine consumes an immutable, validated input record and produces an immutable report.
//! Nothing in this module performs I/O or emits log events; callers own both.

pub mod climate;
mod error;
pub mod loan;

#[cfg(test)]
mod tests;

pub use error::ScreeningError;

/// Common shape of the screening engines: one validated input in, one report out.
pub trait ScreeningEngine: Send + Sync {
    type Input;
    type Report;

    fn assess(&self, input: &Self::Input) -> Result<Self::Report, ScreeningError>;
}

/// Round a score to two decimals from its exact binary value.
///
/// `2.675` is stored just below the midpoint and rounds to `2.67`.
pub fn round_score(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
