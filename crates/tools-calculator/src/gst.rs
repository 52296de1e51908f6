//! GST (goods and services tax) calculator.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult, ensure_finite};
use crate::rounding::round2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub original: f64,
    pub gst_amount: f64,
    /// Echoed exactly as supplied.
    pub gst_rate: f64,
    pub total: f64,
}

pub fn compute_gst(amount: f64, rate: f64) -> CalcResult<GstBreakdown> {
    let amount = ensure_finite(amount, "`amount` must be a number")?;
    let rate = ensure_finite(rate, "`rate` must be a number")?;
    if amount < 0.0 {
        return Err(CalcError::invalid("Amount cannot be negative"));
    }
    if !(0.0..=100.0).contains(&rate) {
        return Err(CalcError::invalid("GST rate must be between 0 and 100"));
    }

    let gst_amount = amount * (rate / 100.0);
    let total = ensure_finite(amount + gst_amount, "Amount is too large")?;

    Ok(GstBreakdown {
        original: round2(amount),
        gst_amount: round2(gst_amount),
        gst_rate: rate,
        total: round2(total),
    })
}
