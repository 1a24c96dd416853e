//! APA-style report sentences.
//!
//! Results keep full precision; rounding happens only here. Means and standard
//! deviations are shown with two decimals, `t` and mean differences with three, and
//! `df` with one. Minimum and maximum are printed as entered.

use crate::{descriptive::Descriptives, sample_size::SampleSizeComparison, ttest::WelchTTest};

/// Summary sentence for a descriptive analysis.
///
/// Returns `None` for an empty sample, which has nothing to report.
///
/// # Examples
///
/// ```
/// # use statmate_stats::{descriptive::Descriptives, report::descriptive_apa};
/// let stats = Descriptives::from_sorted(&[1.0, 2.0, 6.0]);
/// assert_eq!(
///     descriptive_apa(&stats).unwrap(),
///     "The analysis involved 3 participants. \
///      The scores ranged from 1 to 6 (M = 3.00, SD = 2.65)."
/// );
/// ```
#[must_use]
pub fn descriptive_apa(stats: &Descriptives) -> Option<String> {
    if stats.n == 0 {
        return None;
    }
    Some(format!(
        "The analysis involved {} participants. The scores ranged from {} to {} (M = {:.2}, SD = {:.2}).",
        stats.n, stats.min, stats.max, stats.mean, stats.std_dev
    ))
}

/// Summary sentence for a Welch's t-test.
#[must_use]
pub fn welch_apa(result: &WelchTTest) -> String {
    let WelchTTest {
        t_value,
        df,
        mean_diff,
        stat_a,
        stat_b,
    } = result;
    format!(
        "Welch's t-test compared group A (M = {:.2}, SD = {:.2}, n = {}) with group B \
         (M = {:.2}, SD = {:.2}, n = {}): t({df:.1}) = {t_value:.3}, mean difference = {mean_diff:.3}.",
        stat_a.mean, stat_a.std_dev, stat_a.n, stat_b.mean, stat_b.std_dev, stat_b.n,
    )
}

/// Summary sentence comparing the two sample-size estimates.
///
/// # Examples
///
/// ```
/// # use statmate_stats::{report::sample_size_summary, sample_size::*};
/// let comparison = SampleSizeComparison::new(1_000, ErrorMargin::STANDARD);
/// assert_eq!(
///     sample_size_summary(&comparison),
///     "For a population of 1000 at an error margin of 0.05, \
///      Yamane requires 286 and Krejcie & Morgan requires 278 respondents."
/// );
/// ```
#[must_use]
pub fn sample_size_summary(comparison: &SampleSizeComparison) -> String {
    format!(
        "For a population of {} at an error margin of {}, Yamane requires {} and Krejcie & Morgan requires {} respondents.",
        comparison.population,
        comparison.error_margin.get(),
        comparison.yamane,
        comparison.krejcie_morgan,
    )
}
