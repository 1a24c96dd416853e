//! Sample-size estimation for a finite population.
//!
//! Two closed-form estimators are provided:
//!
//! - **Yamane**: `n = N / (1 + N e²)`
//! - **Krejcie & Morgan**: `n = χ² N P (1 - P) / (d² (N - 1) + χ² P (1 - P))`
//!   with `χ² = 3.841` (1 degree of freedom, 95% confidence) and `P = 0.5`.
//!
//! Both round up to the next whole observation and return 0 for an empty population.
//! The error margin is validated once, when the [`ErrorMargin`] is constructed.

use serde::{Deserialize, Serialize};

/// Chi-square value for 1 degree of freedom at 95% confidence.
pub const KM_CHI_SQUARE: f64 = 3.841;
/// Assumed population proportion (maximum variability).
pub const KM_PROPORTION: f64 = 0.5;

/// An error margin (precision) in the open interval `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ErrorMargin(f64);

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("error margin must be between 0 and 1 (exclusive), got {value}")]
pub struct InvalidErrorMarginError {
    pub value: f64,
}

impl ErrorMargin {
    /// The conventional 5% margin.
    pub const STANDARD: Self = Self(0.05);

    /// Validates `value` as an error margin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmate_stats::sample_size::ErrorMargin;
    /// assert!(ErrorMargin::new(0.05).is_ok());
    /// assert!(ErrorMargin::new(0.0).is_err());
    /// assert!(ErrorMargin::new(1.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, InvalidErrorMarginError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(InvalidErrorMarginError { value })
        }
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for ErrorMargin {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<f64> for ErrorMargin {
    type Error = InvalidErrorMarginError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ErrorMargin> for f64 {
    fn from(margin: ErrorMargin) -> Self {
        margin.0
    }
}

/// Required sample size by Yamane's formula.
///
/// # Examples
///
/// ```
/// # use statmate_stats::sample_size::{yamane, ErrorMargin};
/// assert_eq!(yamane(1_000, ErrorMargin::STANDARD), 286);
/// assert_eq!(yamane(0, ErrorMargin::STANDARD), 0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn yamane(population: u64, error_margin: ErrorMargin) -> u64 {
    if population == 0 {
        return 0;
    }
    let n = population as f64;
    round_up(n / (1.0 + n * error_margin.get().powi(2)))
}

/// Required sample size by the Krejcie & Morgan formula.
///
/// The margin is a free parameter here rather than the fixed 0.05 of the
/// published table.
///
/// # Examples
///
/// ```
/// # use statmate_stats::sample_size::{krejcie_morgan, ErrorMargin};
/// assert_eq!(krejcie_morgan(1_000, ErrorMargin::STANDARD), 278);
/// assert_eq!(krejcie_morgan(0, ErrorMargin::STANDARD), 0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn krejcie_morgan(population: u64, error_margin: ErrorMargin) -> u64 {
    if population == 0 {
        return 0;
    }
    let n = population as f64;
    let pq = KM_PROPORTION * (1.0 - KM_PROPORTION);
    let numerator = KM_CHI_SQUARE * n * pq;
    let denominator = error_margin.get().powi(2) * (n - 1.0) + KM_CHI_SQUARE * pq;
    round_up(numerator / denominator)
}

/// Both estimates for the same population and margin, side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeComparison {
    pub population: u64,
    pub error_margin: ErrorMargin,
    pub yamane: u64,
    pub krejcie_morgan: u64,
}

impl SampleSizeComparison {
    #[must_use]
    pub fn new(population: u64, error_margin: ErrorMargin) -> Self {
        Self {
            population,
            error_margin,
            yamane: yamane(population, error_margin),
            krejcie_morgan: krejcie_morgan(population, error_margin),
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_up(value: f64) -> u64 {
    value.ceil() as u64
}
