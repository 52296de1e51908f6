//! Age calculator
//!
//! Computes the elapsed years, months and days between a date of birth and an
//! evaluation date, plus the plain day count between them. The evaluation date is
//! always passed in; callers that want "today" supply it themselves.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

pub const FUTURE_DOB_MESSAGE: &str = "Date of birth cannot be in the future";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
}

/// Parse `dob` and compute the age on `today`.
pub fn compute_age(dob: &str, today: NaiveDate) -> CalcResult<AgeBreakdown> {
    let dob = parse_date(dob)?;
    age_between(dob, today)
}

/// Age on `today` of someone born on `dob`.
///
/// Naive field differences are taken first. A negative day count borrows the
/// length of the month preceding `today`'s month; a negative month count then
/// borrows a year.
pub fn age_between(dob: NaiveDate, today: NaiveDate) -> CalcResult<AgeBreakdown> {
    if dob > today {
        return Err(CalcError::invalid(FUTURE_DOB_MESSAGE));
    }

    let mut years = today.year() - dob.year();
    let mut months = today.month() as i32 - dob.month() as i32;
    let mut days = today.day() as i32 - dob.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_month_before(today)? as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(AgeBreakdown { years, months, days, total_days: (today - dob).num_days() })
}

/// Parse an ISO-8601 calendar date. Full date-times are accepted and truncated.
pub fn parse_date(raw: &str) -> CalcResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|dt| dt.date()))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| CalcError::invalid(format!("Invalid date '{raw}': expected YYYY-MM-DD")))
}

/// Length of the calendar month before the one `date` falls in.
fn days_in_month_before(date: NaiveDate) -> CalcResult<u32> {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| CalcError::invalid(format!("Date {date} is out of range")))
}
