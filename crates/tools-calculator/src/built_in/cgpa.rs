//! `cgpa` plugin
//!
//! Inputs: `cgpa` (number, required) and `university` (string, optional,
//! defaults to `"default"`, surrounding whitespace ignored).

use crate::CalculatorInputs;
use crate::cgpa::{DEFAULT_UNIVERSITY, convert_cgpa};
use crate::plugin::{CalculationResult, CalculatorPlugin, to_json};

#[derive(Debug, Default)]
pub struct CgpaCalculator;

impl CalculatorPlugin for CgpaCalculator {
    fn name(&self) -> &str {
        "cgpa"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> CalculationResult {
        let cgpa = inputs.get_f64("cgpa")?;
        let university =
            inputs.get_optional_string("university")?.map_or(DEFAULT_UNIVERSITY, str::trim);
        to_json(&convert_cgpa(cgpa, university)?)
    }
}
