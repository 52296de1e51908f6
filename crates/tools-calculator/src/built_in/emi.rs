//! `emi` plugin
//!
//! Inputs: `principal` and `annual_rate` (percent) as numbers, `tenure_months`
//! as an integer. All three are required.

use crate::CalculatorInputs;
use crate::emi::compute_emi;
use crate::plugin::{CalculationResult, CalculatorPlugin, to_json};

#[derive(Debug, Default)]
pub struct EmiCalculator;

impl CalculatorPlugin for EmiCalculator {
    fn name(&self) -> &str {
        "emi"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> CalculationResult {
        // presence of every field is checked before any type check
        for field in ["principal", "annual_rate", "tenure_months"] {
            inputs.require(field)?;
        }
        let principal = inputs.get_f64("principal")?;
        let annual_rate = inputs.get_f64("annual_rate")?;
        let tenure_months = inputs.get_integer("tenure_months")?;
        to_json(&compute_emi(principal, annual_rate, tenure_months)?)
    }
}
