//! Error types for the calculators and the plugin registry.

use thiserror::Error;

/// The only way a calculation can fail: the caller supplied input the formula cannot accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("{0}")]
    InvalidInput(String),
}

impl CalcError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// The human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(message) => message,
        }
    }
}

/// Failures raised by [`crate::CalculatorRegistry`] dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("calculator '{0}' not found")]
    UnknownCalculator(String),

    #[error(transparent)]
    Calculation(#[from] CalcError),
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Reject NaN and infinities with `message`.
pub(crate) fn ensure_finite(value: f64, message: &str) -> CalcResult<f64> {
    if value.is_finite() { Ok(value) } else { Err(CalcError::invalid(message)) }
}
