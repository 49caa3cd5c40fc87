//! Small numeric helpers shared by the aggregation services.

/// Round to one decimal place, e.g. for percentages shown as `42.9%`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole * 100`, or `0.0` when `whole` is zero.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(42.857), 42.9);
        assert_eq!(round1(0.04), 0.0);
        assert_eq!(round1(100.0), 100.0);
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1.0, 4.0), 25.0);
        assert!(percentage(1.0, 3.0).is_finite());
    }
}
