//! `gst` plugin
//!
//! Inputs: `amount` and `rate` (percent), both required numbers.

use crate::CalculatorInputs;
use crate::gst::compute_gst;
use crate::plugin::{CalculationResult, CalculatorPlugin, to_json};

#[derive(Debug, Default)]
pub struct GstCalculator;

impl CalculatorPlugin for GstCalculator {
    fn name(&self) -> &str {
        "gst"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> CalculationResult {
        let amount = inputs.get_f64("amount")?;
        let rate = inputs.get_f64("rate")?;
        to_json(&compute_gst(amount, rate)?)
    }
}
