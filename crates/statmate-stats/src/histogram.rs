use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::parse::NumericSeries;

const MIN_DEFAULT_BINS: NonZeroUsize = NonZeroUsize::new(5).unwrap();
const MAX_DEFAULT_BINS: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// An equal-width histogram of a dataset.
///
/// The bins cover `[min, max]` of the data without gaps or overlaps. Every bin except
/// the last is half-open (`start <= v < end`); the last bin is closed on both ends so
/// the maximum value is always counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// The bins in ascending order. Empty when the dataset is empty.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower bound.
    pub start: f64,
    /// Upper bound; exclusive except for the last bin.
    pub end: f64,
    /// The number of values that fall within this bin.
    pub count: usize,
    /// Display label, `"{start:.1} - {end:.1}"`.
    pub label: String,
}

impl Histogram {
    /// Creates a histogram with `bin_count` equal-width bins.
    ///
    /// If all values are equal, a single bin `[v, v]` labelled with the shared value
    /// holds every value, whatever `bin_count` is.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::num::NonZeroUsize;
    /// # use statmate_stats::{histogram::Histogram, parse::NumericSeries};
    /// let series = NumericSeries::new((1..=10).map(f64::from).collect()).unwrap();
    /// let histogram = Histogram::new(&series, NonZeroUsize::new(5).unwrap());
    /// assert_eq!(histogram.bins.len(), 5);
    /// assert_eq!(histogram.bins[0].label, "1.0 - 2.8");
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(series: &NumericSeries, bin_count: NonZeroUsize) -> Self {
        let values = series.as_slice();
        let (Some(min), Some(max)) = (
            values.iter().copied().reduce(f64::min),
            values.iter().copied().reduce(f64::max),
        ) else {
            return Self::default();
        };

        if max <= min {
            return Self {
                bins: vec![HistogramBin {
                    start: min,
                    end: max,
                    count: values.len(),
                    label: format!("{min}"),
                }],
            };
        }

        let bin_count = bin_count.get();
        // Half the bin width, taken from halved endpoints so the span of any two
        // finite values stays finite.
        let half_width = (max / 2.0 - min / 2.0) / bin_count as f64;
        // Pin the outer edges to the data range so rounding can never leave the
        // maximum outside the last bin.
        let boundary = |idx: usize| {
            if idx == bin_count {
                max
            } else {
                let offset = idx as f64 * half_width;
                min + offset + offset
            }
        };

        let mut bins = (0..bin_count)
            .map(|idx| {
                let start = boundary(idx);
                let end = boundary(idx + 1);
                HistogramBin {
                    start,
                    end,
                    count: 0,
                    label: format!("{start:.1} - {end:.1}"),
                }
            })
            .collect::<Vec<_>>();

        for &value in values {
            let idx = locate_bin(&bins, value, min, half_width);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// The largest single-bin count, or 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Index of the bin a value belongs to under the half-open/closed-last rule.
    ///
    /// Returns `None` for values outside the histogram range.
    #[must_use]
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let last = self.bins.len().checked_sub(1)?;
        self.bins.iter().enumerate().position(|(idx, bin)| {
            bin.start <= value && (value < bin.end || (idx == last && value <= bin.end))
        })
    }
}

/// Default bin count policy: `clamp(floor(sqrt(n)), 5, 10)`.
///
/// # Examples
///
/// ```
/// # use statmate_stats::histogram::default_bin_count;
/// assert_eq!(default_bin_count(14).get(), 5);
/// assert_eq!(default_bin_count(50).get(), 7);
/// assert_eq!(default_bin_count(1_000).get(), 10);
/// ```
#[must_use]
pub fn default_bin_count(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n.isqrt()).map_or(MIN_DEFAULT_BINS, |bins| {
        bins.clamp(MIN_DEFAULT_BINS, MAX_DEFAULT_BINS)
    })
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn locate_bin(bins: &[HistogramBin], value: f64, min: f64, half_width: f64) -> usize {
    let last = bins.len() - 1;
    let mut idx = (((value / 2.0 - min / 2.0) / half_width).floor() as usize).min(last);
    // The estimate can be off by one near a boundary; settle it against the
    // stored edges so counting agrees exactly with `bin_index`.
    while idx > 0 && value < bins[idx].start {
        idx -= 1;
    }
    while idx < last && value >= bins[idx].end {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> NumericSeries {
        NumericSeries::new(values.to_vec()).unwrap()
    }

    fn bins(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn counts(histogram: &Histogram) -> Vec<usize> {
        histogram.bins.iter().map(|bin| bin.count).collect()
    }

    #[test]
    fn test_empty_series_has_no_bins() {
        let histogram = Histogram::new(&NumericSeries::default(), bins(5));
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.max_count(), 0);
        assert_eq!(histogram.bin_index(1.0), None);
    }

    #[test]
    fn test_all_equal_values_single_bin() {
        let histogram = Histogram::new(&series(&[5.0, 5.0, 5.0, 5.0]), bins(5));
        assert_eq!(
            histogram.bins,
            vec![HistogramBin {
                start: 5.0,
                end: 5.0,
                count: 4,
                label: "5".to_owned(),
            }]
        );
    }

    #[test]
    fn test_uniform_values() {
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let histogram = Histogram::new(&series(&values), bins(5));
        assert_eq!(counts(&histogram), vec![2, 2, 2, 2, 2]);
        let labels = histogram
            .bins
            .iter()
            .map(|bin| bin.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["1.0 - 2.8", "2.8 - 4.6", "4.6 - 6.4", "6.4 - 8.2", "8.2 - 10.0"]
        );
    }

    #[test]
    fn test_reference_sample_default_bins() {
        let values = [
            12.0, 15.0, 14.0, 18.0, 22.0, 19.0, 25.0, 14.0, 16.0, 20.0, 22.0, 24.0, 10.0, 15.0,
        ];
        let histogram = Histogram::new(&series(&values), default_bin_count(values.len()));
        assert_eq!(counts(&histogram), vec![2, 4, 2, 2, 4]);
        assert_eq!(histogram.bins[0].label, "10.0 - 13.0");
        assert_eq!(histogram.bins[4].label, "22.0 - 25.0");
    }

    #[test]
    fn test_interior_boundary_goes_to_upper_bin() {
        let histogram = Histogram::new(&series(&[0.0, 5.0, 10.0]), bins(2));
        assert_eq!(counts(&histogram), vec![1, 2]);
        assert_eq!(histogram.bin_index(5.0), Some(1));
        assert_eq!(histogram.bin_index(10.0), Some(1));
        assert_eq!(histogram.bin_index(10.5), None);
    }

    #[test]
    fn test_outer_edges_match_data_range() {
        let histogram = Histogram::new(&series(&[0.1, 0.2, 0.7, 0.3]), bins(3));
        assert_eq!(histogram.bins[0].start, 0.1);
        assert_eq!(histogram.bins[2].end, 0.7);
        assert_eq!(histogram.total_count(), 4);
        assert_eq!(histogram.bin_index(0.7), Some(2));
    }

    #[test]
    fn test_adjacent_bins_share_boundary() {
        let values = [3.3, -1.7, 8.9, 0.0, 2.2, 7.1, 4.4];
        let histogram = Histogram::new(&series(&values), bins(7));
        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_single_bin() {
        let histogram = Histogram::new(&series(&[3.0, 1.0, 2.0]), bins(1));
        assert_eq!(counts(&histogram), vec![3]);
        assert_eq!(histogram.bins[0].label, "1.0 - 3.0");
    }

    #[test]
    fn test_counting_agrees_with_membership_rule() {
        let values = [0.3, 0.6, 0.9, 1.2, 1.5, 1.8, 2.1, 0.1, 2.4];
        let histogram = Histogram::new(&series(&values), bins(8));
        let mut expected = vec![0; histogram.bins.len()];
        for value in values {
            expected[histogram.bin_index(value).unwrap()] += 1;
        }
        assert_eq!(counts(&histogram), expected);
    }

    #[test]
    fn test_default_bin_count_bounds() {
        assert_eq!(default_bin_count(0).get(), 5);
        assert_eq!(default_bin_count(1).get(), 5);
        assert_eq!(default_bin_count(35).get(), 5);
        assert_eq!(default_bin_count(36).get(), 6);
        assert_eq!(default_bin_count(99).get(), 9);
        assert_eq!(default_bin_count(100).get(), 10);
        assert_eq!(default_bin_count(usize::MAX).get(), 10);
    }

    #[test]
    fn test_extreme_range_keeps_finite_edges() {
        let values = [-1e308, 0.0, 1e308];
        let histogram = Histogram::new(&series(&values), bins(4));
        assert_eq!(counts(&histogram), vec![1, 0, 1, 1]);
        assert!(
            histogram
                .bins
                .iter()
                .all(|bin| bin.start.is_finite() && bin.end.is_finite())
        );
        assert_eq!(histogram.bins[0].start, -1e308);
        assert_eq!(histogram.bins[3].end, 1e308);
        assert_eq!(histogram.bin_index(1e308), Some(3));
        assert_eq!(histogram.bin_index(-1e308), Some(0));
        assert_eq!(histogram.bin_index(0.0), Some(2));
    }

    #[test]
    fn test_full_f64_range() {
        let values = [f64::MIN, -1.0, 1.0, f64::MAX];
        let histogram = Histogram::new(&series(&values), bins(3));
        assert_eq!(histogram.total_count(), 4);
        assert_eq!(histogram.bin_index(f64::MAX), Some(2));
        for value in values {
            assert!(histogram.bin_index(value).is_some());
        }
    }
}
