//! CGPA to percentage conversion.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::rounding::round2;

pub const DEFAULT_UNIVERSITY: &str = "default";
pub const DEFAULT_MULTIPLIER: f64 = 9.5;
pub const MAX_CGPA: f64 = 10.0;
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Conversion multipliers by institution. Lookup is an exact, case-sensitive match.
pub const UNIVERSITY_MULTIPLIERS: &[(&str, f64)] = &[
    (DEFAULT_UNIVERSITY, DEFAULT_MULTIPLIER),
    ("VTU", 10.0),
    ("Mumbai", 9.5),
    ("Anna", 10.0),
    ("AKTU", 10.0),
    ("PTU", 9.5),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgpaConversion {
    pub cgpa: f64,
    pub percentage: f64,
    pub university: String,
}

/// Multiplier for `university`, falling back to [`DEFAULT_MULTIPLIER`] for unknown names.
pub fn multiplier_for(university: &str) -> f64 {
    UNIVERSITY_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == university)
        .map_or(DEFAULT_MULTIPLIER, |(_, multiplier)| *multiplier)
}

pub fn convert_cgpa(cgpa: f64, university: &str) -> CalcResult<CgpaConversion> {
    if !cgpa.is_finite() {
        return Err(CalcError::invalid("`cgpa` must be a number"));
    }
    if !(0.0..=MAX_CGPA).contains(&cgpa) {
        return Err(CalcError::invalid("CGPA must be between 0 and 10"));
    }

    let percentage = (cgpa * multiplier_for(university)).min(MAX_PERCENTAGE);

    Ok(CgpaConversion {
        cgpa: round2(cgpa),
        percentage: round2(percentage),
        university: university.to_string(),
    })
}
