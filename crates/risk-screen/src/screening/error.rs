/// Typed failures surfaced by the screening core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScreeningError {
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("sub-factor `{factor}` required by dimension `{dimension}` is missing")]
    MissingFactor { dimension: String, factor: String },
    #[error("cannot divide `{numerator}` by `{denominator}` because it is zero")]
    DivisionByZero {
        numerator: &'static str,
        denominator: &'static str,
    },
    #[error("invalid screening configuration: {0}")]
    InvalidConfiguration(String),
}

impl ScreeningError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::invalid_input(field, "required field is missing")
    }
}
