//! EMI (equated monthly installment) calculator
//!
//! For a principal `P`, monthly rate `r` (annual percent / 12 / 100) and tenure of
//! `n` months the installment is
//!
//! ```text
//! emi = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! A zero rate degenerates to `P / n` with no interest. All arithmetic is carried
//! out in `f64` and only the returned figures are rounded.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult, ensure_finite};
use crate::rounding::round2;

const OVERFLOW_MESSAGE: &str = "EMI calculation overflowed; reduce the principal or tenure";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub principal: f64,
    pub annual_rate: f64,
    pub tenure_months: i64,
    pub emi: f64,
    pub total_interest: f64,
    pub total_amount: f64,
}

pub fn compute_emi(principal: f64, annual_rate: f64, tenure_months: i64) -> CalcResult<EmiBreakdown> {
    let principal = ensure_finite(principal, "`principal` must be a number")?;
    let annual_rate = ensure_finite(annual_rate, "`annual_rate` must be a number")?;
    if principal <= 0.0 {
        return Err(CalcError::invalid("Principal amount must be greater than 0"));
    }
    if annual_rate < 0.0 {
        return Err(CalcError::invalid("Interest rate cannot be negative"));
    }
    if tenure_months <= 0 {
        return Err(CalcError::invalid("Tenure must be greater than 0 months"));
    }

    #[allow(clippy::cast_precision_loss)]
    let months = tenure_months as f64;

    let (emi, total_interest, total_amount) = if annual_rate == 0.0 {
        (principal / months, 0.0, principal)
    } else {
        let monthly_rate = annual_rate / 12.0 / 100.0;
        let exponent = months * monthly_rate.ln_1p();
        let emi = principal * monthly_rate * exponent.exp() / exponent.exp_m1();
        let total_amount = emi * months;
        (emi, total_amount - principal, total_amount)
    };

    Ok(EmiBreakdown {
        principal: round2(principal),
        annual_rate: round2(annual_rate),
        tenure_months,
        emi: round2(ensure_finite(emi, OVERFLOW_MESSAGE)?),
        total_interest: round2(ensure_finite(total_interest, OVERFLOW_MESSAGE)?),
        total_amount: round2(ensure_finite(total_amount, OVERFLOW_MESSAGE)?),
    })
}
