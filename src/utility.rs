//! Rounding helpers shared by the evaluator and the display conversions.

/// Round to a fixed number of decimal places, halves away from zero.
#[inline]
pub(crate) fn round_to(val: f64, decimals: i32) -> f64 {
    let scale = 10.0f64.powi(decimals);
    (val * scale).round() / scale
}

/// Round to the nearest integer with halves going toward positive infinity, so -2.5 becomes -2.0
/// and 2.5 becomes 3.0.
#[inline]
pub(crate) fn round_half_up(val: f64) -> f64 {
    (val + 0.5).floor()
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1013.25, 1), 1013.3);
        assert_eq!(round_to(-56.4999, 1), -56.5);
        assert_eq!(round_to(29.9212, 2), 29.92);
        assert_eq!(round_to(1.2250001, 3), 1.225);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(9999.9999), 10_000.0);
    }
}
