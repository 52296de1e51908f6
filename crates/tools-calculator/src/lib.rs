#![deny(warnings)]
//! The calculators behind the India Tools service.
//!
//! Each calculator exists twice: as a typed, pure function ([`age::compute_age`],
//! [`cgpa::convert_cgpa`], [`gst::compute_gst`], [`emi::compute_emi`]) and as a
//! [`CalculatorPlugin`] that validates untyped named inputs before calling it. The
//! [`CalculatorRegistry`] dispatches to plugins by name.

use std::collections::HashMap;

pub use tools_types::{InputMap, InputValue};

pub mod age;
pub mod built_in;
pub mod calculator;
pub mod catalog;
pub mod cgpa;
pub mod emi;
pub mod error;
pub mod gst;
pub mod plugin;
pub mod plugin_manager;
pub mod rounding;

pub use calculator::CalculatorRegistry;
pub use error::{CalcError, CalcResult, RegistryError};
pub use plugin::{CalculationResult, CalculatorPlugin};

/// Named inputs for one calculation, with accessors that fail with the
/// field-specific `InvalidInput` messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorInputs {
    fields: InputMap,
}

impl From<InputMap> for CalculatorInputs {
    fn from(fields: InputMap) -> Self {
        Self { fields }
    }
}

impl CalculatorInputs {
    pub fn new(fields: HashMap<String, InputValue>) -> Self {
        Self { fields }
    }

    /// Builder used mostly by tests and benches.
    pub fn with(mut self, name: &str, value: impl Into<InputValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// The value of `name`, treating an explicit JSON `null` as absent.
    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.fields.get(name).filter(|value| !value.is_null())
    }

    pub fn require(&self, name: &str) -> CalcResult<&InputValue> {
        self.get(name).ok_or_else(|| CalcError::invalid(format!("`{name}` field is required")))
    }

    /// Gets a finite number. Integers are widened; booleans and strings are rejected.
    pub fn get_f64(&self, name: &str) -> CalcResult<f64> {
        self.require(name)?
            .as_f64()
            .filter(|value| value.is_finite())
            .ok_or_else(|| CalcError::invalid(format!("`{name}` must be a number")))
    }

    /// Gets an integer. Floats are rejected even when they have no fractional part.
    pub fn get_integer(&self, name: &str) -> CalcResult<i64> {
        self.require(name)?
            .as_integer()
            .ok_or_else(|| CalcError::invalid(format!("`{name}` must be an integer")))
    }

    pub fn get_string(&self, name: &str) -> CalcResult<&str> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| CalcError::invalid(format!("`{name}` must be a string")))
    }

    pub fn get_optional_string(&self, name: &str) -> CalcResult<Option<&str>> {
        match self.get(name) {
            None => Ok(None),
            Some(_) => self.get_string(name).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_counts_as_missing() {
        let inputs = CalculatorInputs::default().with("cgpa", InputValue::Null);
        assert_eq!(
            inputs.get_f64("cgpa").unwrap_err(),
            CalcError::invalid("`cgpa` field is required")
        );
    }

    #[test]
    fn numbers_are_strict() {
        let inputs = CalculatorInputs::default()
            .with("flag", true)
            .with("text", "12")
            .with("whole", 12.0)
            .with("count", 12_i64);
        assert_eq!(inputs.get_f64("flag").unwrap_err().message(), "`flag` must be a number");
        assert_eq!(inputs.get_f64("text").unwrap_err().message(), "`text` must be a number");
        assert_eq!(inputs.get_integer("whole").unwrap_err().message(), "`whole` must be an integer");
        assert_eq!(inputs.get_integer("count").unwrap(), 12);
        assert_eq!(inputs.get_f64("count").unwrap(), 12.0);
    }

    #[test]
    fn optional_strings() {
        let inputs = CalculatorInputs::default().with("university", 7_i64);
        assert_eq!(CalculatorInputs::default().get_optional_string("university").unwrap(), None);
        assert!(inputs.get_optional_string("university").is_err());
    }
}
