//! Output rounding.
//!
//! Every monetary and percentage figure leaves the calculators rounded to two
//! decimal places, half away from zero. Rounding is applied once, when the result
//! struct is built, so intermediate arithmetic keeps full `f64` precision.

/// Round to two decimals, ties away from zero.
pub fn round2(value: f64) -> f64 {
    let scaled = (value * 100.0).round() / 100.0;
    // -0.0 would serialise as "-0.0"
    if scaled == 0.0 { 0.0 } else { scaled }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(80.754), 80.75);
        assert_eq!(round2(80.756), 80.76);
        assert_eq!(round2(1180.0), 1180.0);
    }

    #[test]
    fn ties_go_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(2.5), 2.5);
    }

    #[test]
    fn negative_zero_is_normalised() {
        let value = round2(-0.001);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }
}
