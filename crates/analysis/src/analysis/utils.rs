//! Utility functions for analysis module
//!
//! Shared statistics helpers. Replicates that never recovered carry NaN, so
//! the order statistics here skip NaN values instead of propagating them.

/// Percentile `q` (0 to 100) of the non-NaN values.
///
/// Interpolates linearly between the two nearest order statistics. Returns
/// NaN when no value is left after dropping NaN.
pub fn nan_percentile(values: &[f64], q: f64) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);

    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let weight = rank - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * weight
}

/// Median of the non-NaN values, NaN if there are none.
pub fn nan_median(values: &[f64]) -> f64 {
    nan_percentile(values, 50.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_median() {
        assert_eq!(nan_median(&[1.0, 3.0, 2.0, 5.0, 4.0]), 3.0);
        assert_eq!(nan_median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(nan_median(&[f64::NAN, 7.0, 3.0]), 5.0);
        assert!(nan_median(&[f64::NAN, f64::NAN]).is_nan());
        assert!(nan_median(&[]).is_nan());
    }

    #[test]
    fn test_nan_percentile_interpolates() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(nan_percentile(&values, 0.0), 10.0);
        assert_eq!(nan_percentile(&values, 100.0), 30.0);
        // rank 0.05 between 10 and 20
        assert!((nan_percentile(&values, 2.5) - 10.5).abs() < 1e-12);
        // rank 1.95 between 20 and 30
        assert!((nan_percentile(&values, 97.5) - 29.5).abs() < 1e-12);
    }

    #[test]
    fn test_nan_percentile_single_value() {
        assert_eq!(nan_percentile(&[4.0, f64::NAN], 2.5), 4.0);
        assert_eq!(nan_percentile(&[4.0, f64::NAN], 97.5), 4.0);
    }
}
