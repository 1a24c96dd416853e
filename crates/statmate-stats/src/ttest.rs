//! Two-sample comparison of means with Welch's unequal-variance t-test.
//!
//! Only the test statistic, the Welch–Satterthwaite degrees of freedom and the mean
//! difference are computed here. Turning `t` and `df` into a p-value is left to the
//! caller.

use serde::{Deserialize, Serialize};

use crate::{descriptive::Descriptives, parse::NumericSeries};

/// Identifies one of the two samples of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Group {
    #[display("group A")]
    A,
    #[display("group B")]
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TTestError {
    #[display("at least 2 values per group required ({group} has {n})")]
    InsufficientData { group: Group, n: usize },
    #[display("both groups have zero variance, so the t statistic is undefined")]
    ZeroVariance,
    #[display("the values are too large for the t statistic to be represented")]
    OutOfRange,
}

/// Result of Welch's t-test for two independent samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WelchTTest {
    /// `(mean_a - mean_b) / sqrt(var_a / n_a + var_b / n_b)`.
    pub t_value: f64,
    /// Welch–Satterthwaite degrees of freedom; not necessarily an integer.
    pub df: f64,
    /// `mean_a - mean_b`.
    pub mean_diff: f64,
    pub stat_a: Descriptives,
    pub stat_b: Descriptives,
}

impl WelchTTest {
    /// Smallest sample size accepted for each group.
    pub const MIN_GROUP_SIZE: usize = 2;

    /// Runs the test on two raw samples.
    ///
    /// Sizes are checked before anything is computed; a group with fewer than
    /// [`Self::MIN_GROUP_SIZE`] values fails with [`TTestError::InsufficientData`]
    /// (group A is reported first when both are short).
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmate_stats::{parse::parse_numeric_series, ttest::WelchTTest};
    /// let a = parse_numeric_series("5, 7, 8, 6, 9, 10, 6, 7").unwrap();
    /// let b = parse_numeric_series("2, 4, 3, 5, 3, 6, 2, 3").unwrap();
    /// let result = WelchTTest::new(&a, &b).unwrap();
    /// assert_eq!(result.mean_diff, 3.75);
    /// assert!(result.t_value > 4.8);
    /// ```
    pub fn new(group_a: &NumericSeries, group_b: &NumericSeries) -> Result<Self, TTestError> {
        check_group_size(Group::A, group_a.len())?;
        check_group_size(Group::B, group_b.len())?;
        Self::from_descriptives(Descriptives::new(group_a), Descriptives::new(group_b))
    }

    /// Runs the test from precomputed per-group descriptives.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_descriptives(
        stat_a: Descriptives,
        stat_b: Descriptives,
    ) -> Result<Self, TTestError> {
        check_group_size(Group::A, stat_a.n)?;
        check_group_size(Group::B, stat_b.n)?;

        let se_a = stat_a.standard_error();
        let se_b = stat_b.standard_error();
        let se = se_a.hypot(se_b);
        if se <= 0.0 {
            return Err(TTestError::ZeroVariance);
        }

        let mean_diff = stat_a.mean - stat_b.mean;
        let t_value = mean_diff / se;
        // Satterthwaite with each group's share of the variance, so nothing is
        // squared beyond [0, 1].
        let share_a = (se_a / se).powi(2);
        let share_b = (se_b / se).powi(2);
        let df = 1.0
            / (share_a.powi(2) / (stat_a.n - 1) as f64 + share_b.powi(2) / (stat_b.n - 1) as f64);
        if !(se.is_finite() && t_value.is_finite() && df.is_finite()) {
            return Err(TTestError::OutOfRange);
        }

        Ok(Self {
            t_value,
            df,
            mean_diff,
            stat_a,
            stat_b,
        })
    }

    /// Standard error of the mean difference.
    #[must_use]
    pub fn standard_error(&self) -> f64 {
        self.stat_a.standard_error().hypot(self.stat_b.standard_error())
    }
}

fn check_group_size(group: Group, n: usize) -> Result<(), TTestError> {
    if n < WelchTTest::MIN_GROUP_SIZE {
        return Err(TTestError::InsufficientData { group, n });
    }
    Ok(())
}
