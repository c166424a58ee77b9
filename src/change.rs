/// Relative change of `current` against the previous count, rounded to two
/// decimal places (a doubled count yields `1.0`).
///
/// A missing previous count marks a first observation and returns the
/// sentinel `1`; a previous count of zero returns `0` instead of dividing
/// by zero.
pub fn relative_change(current: u64, previous: Option<u64>) -> f64 {
    match previous {
        None => 1.0,
        Some(0) => 0.0,
        Some(prev) => {
            let ratio = current as f64 / prev as f64 - 1.0;
            (ratio * 100.0).round() / 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_sentinel() {
        assert_eq!(relative_change(0, None), 1.0);
        assert_eq!(relative_change(3, None), 1.0);
        assert_eq!(relative_change(100_000, None), 1.0);
    }

    #[test]
    fn test_zero_previous_guard() {
        assert_eq!(relative_change(0, Some(0)), 0.0);
        assert_eq!(relative_change(42, Some(0)), 0.0);
    }

    #[test]
    fn test_relative_change_values() {
        assert_eq!(relative_change(150, Some(100)), 0.5);
        assert_eq!(relative_change(50, Some(100)), -0.5);
        assert_eq!(relative_change(100, Some(100)), 0.0);
        assert_eq!(relative_change(200, Some(100)), 1.0);
        assert_eq!(relative_change(0, Some(100)), -1.0);
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        assert_eq!(relative_change(5, Some(3)), 0.67);
        assert_eq!(relative_change(1, Some(3)), -0.67);
        assert_eq!(relative_change(1000, Some(999)), 0.0);
    }
}
