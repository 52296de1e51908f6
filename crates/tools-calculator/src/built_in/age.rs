//! `age` plugin
//!
//! Inputs: `dob` (ISO date string, required) and `today` (ISO date string,
//! optional). Without `today` the plugin's clock decides the evaluation date.

use chrono::{Local, NaiveDate};

use crate::CalculatorInputs;
use crate::age::{age_between, parse_date};
use crate::error::CalcError;
use crate::plugin::{CalculationResult, CalculatorPlugin, to_json};

/// Source of the evaluation date when the request does not carry one.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Copy)]
pub struct AgeCalculator {
    clock: Clock,
}

impl Default for AgeCalculator {
    fn default() -> Self {
        Self { clock: local_today }
    }
}

impl AgeCalculator {
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl CalculatorPlugin for AgeCalculator {
    fn name(&self) -> &str {
        "age"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> CalculationResult {
        let dob = inputs.get_string("dob")?;
        if dob.is_empty() {
            return Err(CalcError::invalid("`dob` field is required"));
        }
        let today = match inputs.get_optional_string("today")? {
            Some(raw) => parse_date(raw)?,
            None => (self.clock)(),
        };
        to_json(&age_between(parse_date(dob)?, today)?)
    }
}
