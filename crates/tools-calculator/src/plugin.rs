use crate::CalculatorInputs;
use crate::error::CalcError;

/// Result of a plugin invocation: a JSON object on success.
pub type CalculationResult = Result<serde_json::Value, CalcError>;

/// A calculator reachable by name with untyped, named inputs.
pub trait CalculatorPlugin: Send + Sync {
    /// The name of the calculator; also its route segment.
    fn name(&self) -> &str;

    /// Validates the inputs and performs the calculation.
    fn calculate(&self, inputs: &CalculatorInputs) -> CalculationResult;
}

/// Serialize a typed result for the plugin boundary.
pub(crate) fn to_json<T: serde::Serialize>(result: &T) -> CalculationResult {
    serde_json::to_value(result).map_err(|e| CalcError::invalid(format!("Unserialisable result: {e}")))
}
