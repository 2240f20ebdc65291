/// Computes the arithmetic mean of a sequence of values.
///
/// # Arguments
///
/// * `values` - An iterator over `f64` values.
///
/// # Returns
///
/// * `Some(mean)` - if the sequence contains at least one value
/// * `None` - if the sequence is empty
///
/// # Examples
///
/// ```
/// # use oxivey_stats::descriptive::mean;
/// assert_eq!(mean([1.0, 2.0, 3.0]), Some(2.0));
///
/// let empty: Vec<f64> = Vec::new();
/// assert_eq!(mean(empty), None);
/// ```
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0_u32;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / f64::from(count))
}

/// Rounds a value to a fixed number of decimal places, ties to even.
///
/// Half-way cases round towards the nearest even digit (2.5 rounds to 2,
/// 3.5 rounds to 4), the convention used by most numeric toolchains for
/// tabular data. NaN and infinite inputs pass through unchanged.
///
/// # Arguments
///
/// * `value` - The value to round
/// * `decimals` - Number of decimal places to keep
///
/// # Examples
///
/// ```
/// # use oxivey_stats::descriptive::round_to_decimals;
/// assert_eq!(round_to_decimals(5.125, 2), 5.12);
/// assert_eq!(round_to_decimals(2.5, 0), 2.0);
/// assert_eq!(round_to_decimals(3.5, 0), 4.0);
/// ```
#[must_use]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_values() {
        assert_eq!(mean([2.0, 4.0, 6.0, 8.0]), Some(5.0));
        assert_eq!(mean([5.0]), Some(5.0));
    }

    #[test]
    fn test_mean_of_empty_sequence_is_none() {
        let values: Vec<f64> = vec![];
        assert_eq!(mean(values), None);
    }

    #[test]
    fn test_mean_consumes_any_iterator() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(mean(values.iter().copied().filter(|v| *v > 2.0)), Some(3.5));
    }

    #[test]
    fn test_round_keeps_exact_values() {
        assert_eq!(round_to_decimals(5.0, 2), 5.0);
        assert_eq!(round_to_decimals(4.25, 2), 4.25);
    }

    #[test]
    fn test_round_ties_go_to_even() {
        // All inputs here are exactly representable in binary, so the
        // half-way cases are genuine ties.
        assert_eq!(round_to_decimals(2.5, 0), 2.0);
        assert_eq!(round_to_decimals(3.5, 0), 4.0);
        assert_eq!(round_to_decimals(0.125, 2), 0.12);
        assert_eq!(round_to_decimals(0.375, 2), 0.38);
    }

    #[test]
    fn test_round_to_eight_decimals() {
        let third = 13.0 / 3.0;
        assert_eq!(round_to_decimals(third, 8), 4.333_333_33);
    }

    #[test]
    fn test_round_passes_non_finite_through() {
        assert!(round_to_decimals(f64::NAN, 2).is_nan());
        assert_eq!(round_to_decimals(f64::INFINITY, 2), f64::INFINITY);
    }
}
