use serde::{Deserialize, Serialize};

use crate::parse::NumericSeries;

/// Descriptive statistics summarizing a sample.
///
/// The empty sample maps to the all-zero value (`Descriptives::default()`); this is a
/// convention, not an error. A single value has `std_dev == 0.0` because the
/// variance divisor `n - 1` is floored at 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptives {
    /// Number of values in the sample.
    pub n: usize,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median; the mean of the two middle values when `n` is even.
    pub median: f64,
    /// The sample standard deviation (divisor `n - 1`).
    pub std_dev: f64,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
}

impl Descriptives {
    /// Computes descriptive statistics for a series.
    ///
    /// The series is copied and sorted internally; the input is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmate_stats::{descriptive::Descriptives, parse::NumericSeries};
    /// let series = NumericSeries::new(vec![5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// let stats = Descriptives::new(&series);
    /// assert_eq!(stats.n, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new(series: &NumericSeries) -> Self {
        Self::from_sorted(&series.sorted())
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Skips the sort; use it when the values are already in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if any value is not finite, or if `sorted_values` is not sorted in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmate_stats::descriptive::Descriptives;
    /// let stats = Descriptives::from_sorted(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(stats.median, 2.5);
    ///
    /// assert_eq!(Descriptives::from_sorted(&[]), Descriptives::default());
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(sorted_values.iter().all(|v| v.is_finite()), "values must be finite");
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self::default();
        };
        let n = sorted_values.len();
        let mean = mean(sorted_values, min, max);
        let median = if n % 2 == 0 {
            f64::midpoint(sorted_values[n / 2 - 1], sorted_values[n / 2])
        } else {
            sorted_values[n / 2]
        };

        Self {
            n,
            mean,
            median,
            std_dev: sample_std_dev(sorted_values, mean, min.abs().max(max.abs())),
            min,
            max,
        }
    }

    /// The sample variance, `std_dev²`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.std_dev.powi(2)
    }

    /// Standard error of the mean, `std_dev / sqrt(n)`.
    ///
    /// Returns 0 for the empty sample.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn standard_error(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.std_dev / (self.n as f64).sqrt()
    }
}

/// Arithmetic mean of a non-empty slice, clamped into `[min, max]`.
///
/// Falls back to summing `v / n` when the plain sum overflows; every partial sum
/// is then bounded by the largest magnitude.
#[expect(clippy::cast_precision_loss)]
fn mean(values: &[f64], min: f64, max: f64) -> f64 {
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    let mean = if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    };
    mean.clamp(min, max)
}

/// Sample standard deviation with divisor `max(n - 1, 1)`.
///
/// When squared deviations overflow, they are taken relative to `scale` (the
/// largest magnitude), which keeps every term within `[0, 4]`.
#[expect(clippy::cast_precision_loss)]
fn sample_std_dev(values: &[f64], mean: f64, scale: f64) -> f64 {
    let divisor = values.len().saturating_sub(1).max(1) as f64;
    let squared_deviations = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    if squared_deviations.is_finite() || scale <= 0.0 {
        return (squared_deviations / divisor).sqrt();
    }
    let scaled = values
        .iter()
        .map(|v| (v / scale - mean / scale).powi(2))
        .sum::<f64>();
    scale * (scaled / divisor).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> NumericSeries {
        NumericSeries::new(values.to_vec()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_sample() {
        let stats = Descriptives::new(&series(&[
            12.0, 15.0, 14.0, 18.0, 22.0, 19.0, 25.0, 14.0, 16.0, 20.0, 22.0, 24.0, 10.0, 15.0,
        ]));
        assert_eq!(stats.n, 14);
        assert_close(stats.mean, 246.0 / 14.0);
        assert_close(stats.median, 17.0);
        assert_close(stats.std_dev, 4.586_171_282_558_801);
        assert_close(stats.min, 10.0);
        assert_close(stats.max, 25.0);
        assert_eq!(format!("{:.2}", stats.mean), "17.57");
        assert_eq!(format!("{:.2}", stats.std_dev), "4.59");
    }

    #[test]
    fn test_empty_is_zero_value() {
        let stats = Descriptives::new(&NumericSeries::default());
        assert_eq!(
            stats,
            Descriptives {
                n: 0,
                mean: 0.0,
                median: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
            }
        );
        assert_eq!(stats.standard_error(), 0.0);
    }

    #[test]
    fn test_single_value_has_zero_std_dev() {
        let stats = Descriptives::new(&series(&[42.0]));
        assert_eq!(stats.n, 1);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_even_count_median_averages_middle_pair() {
        let stats = Descriptives::new(&series(&[10.0, 1.0, 7.0, 3.0]));
        assert_eq!(stats.median, 5.0);
    }

    #[test]
    fn test_sample_variance_uses_n_minus_one() {
        let stats = Descriptives::new(&series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));
        assert_close(stats.variance(), 32.0 / 7.0);
        assert_close(stats.standard_error(), (32.0_f64 / 7.0 / 8.0).sqrt());
    }

    #[test]
    fn test_negative_values() {
        let stats = Descriptives::new(&series(&[-3.0, -1.0, -2.0]));
        assert_eq!(stats.min, -3.0);
        assert_eq!(stats.max, -1.0);
        assert_eq!(stats.median, -2.0);
        assert_close(stats.std_dev, 1.0);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = Descriptives::from_sorted(&[2.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "values must be finite")]
    fn test_from_sorted_rejects_nan() {
        let _ = Descriptives::from_sorted(&[1.0, f64::NAN]);
    }

    #[test]
    fn test_huge_values_stay_finite() {
        let stats = Descriptives::new(&series(&[1e308, 1e308]));
        assert_eq!(stats.mean, 1e308);
        assert_eq!(stats.std_dev, 0.0);

        let stats = Descriptives::new(&series(&[f64::MAX, f64::MAX, f64::MAX]));
        assert!(stats.mean.is_finite() && stats.mean <= f64::MAX);
        assert_eq!(stats.median, f64::MAX);
        assert!(stats.std_dev.is_finite());

        let stats = Descriptives::new(&series(&[-1e308, 0.0, 1e308]));
        assert_close(stats.mean, 0.0);
        assert_close(stats.std_dev / 1e308, 1.0);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
    }

    #[test]
    fn test_mean_of_repeated_value_is_exact() {
        let stats = Descriptives::new(&series(&[0.1, 0.1, 0.1]));
        assert_eq!(stats.mean, 0.1);
    }
}
