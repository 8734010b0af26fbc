/// Fraction of the iteration budget used before escaping, or `None` for a
/// point that never escaped.
///
/// Counts at or above the budget are interior, which also covers a zero
/// budget without dividing by it.
#[must_use]
pub fn escape_fraction(iterations: u32, max_iterations: u32) -> Option<f64> {
    if iterations >= max_iterations {
        return None;
    }

    Some(iterations as f64 / max_iterations as f64)
}

/// Scales `t` in `[0, 1]` to a channel byte, rounding half to even the way a
/// canvas' clamped byte array stores fractional values.
#[must_use]
pub fn to_channel(t: f64) -> u8 {
    (t * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_exhausted_is_interior() {
        assert_eq!(escape_fraction(300, 300), None);
        assert_eq!(escape_fraction(301, 300), None);
    }

    #[test]
    fn test_zero_budget_is_interior() {
        assert_eq!(escape_fraction(0, 0), None);
    }

    #[test]
    fn test_immediate_escape_is_zero_fraction() {
        assert_eq!(escape_fraction(0, 300), Some(0.0));
    }

    #[test]
    fn test_to_channel_rounds_to_nearest() {
        assert_eq!(to_channel(96.0 / 300.0), 82); // 81.6
        assert_eq!(to_channel(1.0 / 300.0), 1); // 0.85
        assert_eq!(to_channel(0.5), 128); // 127.5 ties to even
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(1.0), 255);
    }

    #[test]
    fn test_to_channel_clamps() {
        assert_eq!(to_channel(2.0), 255);
        assert_eq!(to_channel(-1.0), 0);
    }
}
