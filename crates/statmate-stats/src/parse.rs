//! Free-text numeric input.
//!
//! Raw text is split on commas and newlines, each token is trimmed, empty tokens
//! are discarded, and every remaining token must convert to a finite `f64`.
//! Invalid tokens are reported as a [`ParseError`]; they are never dropped silently.
//!
//! # Examples
//!
//! ```
//! use statmate_stats::parse::parse_numeric_series;
//!
//! let series = parse_numeric_series("12, 15\n14,, 18").unwrap();
//! assert_eq!(series.as_slice(), &[12.0, 15.0, 14.0, 18.0]);
//!
//! let err = parse_numeric_series("1, two, 3, four").unwrap_err();
//! assert_eq!(err.invalid_tokens, 2);
//! assert_eq!(err.first_invalid, "two");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An ordered sequence of finite real numbers.
///
/// Every element is guaranteed to be finite (no NaN, no infinity), so all
/// computations in this crate can accept a `&NumericSeries` without re-checking.
/// Input order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct NumericSeries(Vec<f64>);

/// Raw text contained tokens that are not finite numbers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "please enter valid numbers separated by commas or newlines \
     ({invalid_tokens} invalid token(s), first: {first_invalid:?})"
)]
pub struct ParseError {
    /// Number of tokens that failed numeric conversion.
    pub invalid_tokens: usize,
    /// The first offending token, as written by the user (trimmed).
    pub first_invalid: String,
}

/// A value handed to [`NumericSeries::new`] was NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("value at position {index} is not a finite number")]
pub struct NonFiniteValueError {
    /// Position of the first non-finite value.
    pub index: usize,
}

impl NumericSeries {
    /// Wraps already-parsed values, rejecting NaN and infinities.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmate_stats::parse::NumericSeries;
    /// assert!(NumericSeries::new(vec![1.0, 2.5]).is_ok());
    /// assert_eq!(NumericSeries::new(vec![1.0, f64::NAN]).unwrap_err().index, 1);
    /// ```
    pub fn new(values: Vec<f64>) -> Result<Self, NonFiniteValueError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(NonFiniteValueError { index }),
            None => Ok(Self(values)),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Returns a copy of the values sorted ascending by total order.
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.0.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for NumericSeries {
    type Error = NonFiniteValueError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<NumericSeries> for Vec<f64> {
    fn from(series: NumericSeries) -> Self {
        series.0
    }
}

impl FromStr for NumericSeries {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeric_series(s)
    }
}

/// Parses comma- and/or newline-delimited text into a [`NumericSeries`].
///
/// Tokens use Rust's `f64` grammar (`1`, `-2.5`, `.5`, `1e3`). Tokens that do not
/// parse, or that parse to NaN or infinity, are counted as invalid and the whole
/// call fails; no partial series is returned.
pub fn parse_numeric_series(text: &str) -> Result<NumericSeries, ParseError> {
    let mut values = vec![];
    let mut invalid_tokens = 0;
    let mut first_invalid = None;

    for token in tokens(text) {
        if let Some(value) = parse_token(token) {
            values.push(value);
        } else {
            invalid_tokens += 1;
            first_invalid.get_or_insert_with(|| token.to_owned());
        }
    }

    if let Some(first_invalid) = first_invalid {
        return Err(ParseError {
            invalid_tokens,
            first_invalid,
        });
    }
    Ok(NumericSeries(values))
}

/// Replaces every character that cannot belong to a number list with a space.
///
/// Keeps ASCII digits, `,`, `.`, `-` and whitespace. This turns a raw CSV export
/// (header row, quotes, units) into text the parser accepts, e.g. a `score`
/// header line becomes blank and is skipped.
///
/// # Examples
///
/// ```
/// # use statmate_stats::parse::clean_import_text;
/// assert_eq!(clean_import_text("score\n\"12\"\n15kg"), "     \n 12 \n15  ");
/// ```
#[must_use]
pub fn clean_import_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() || matches!(c, ',' | '.' | '-') || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Cleans imported file contents with [`clean_import_text`] and parses the result.
pub fn parse_import_text(text: &str) -> Result<NumericSeries, ParseError> {
    parse_numeric_series(&clean_import_text(text))
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn parse_token(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_delimiters_and_whitespace() {
        let series = parse_numeric_series(" 1,2\n 3 ,\r\n4\n\n,5 ").unwrap();
        assert_eq!(series.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_preserves_input_order() {
        let series = parse_numeric_series("9, 1, 5, 1").unwrap();
        assert_eq!(series.as_slice(), &[9.0, 1.0, 5.0, 1.0]);
    }

    #[test]
    fn test_empty_input_is_empty_series() {
        assert!(parse_numeric_series("").unwrap().is_empty());
        assert!(parse_numeric_series(" ,\n , ").unwrap().is_empty());
    }

    #[test]
    fn test_number_forms() {
        let series = parse_numeric_series("-2.5, .5, 1e3, +4").unwrap();
        assert_eq!(series.as_slice(), &[-2.5, 0.5, 1000.0, 4.0]);
    }

    #[test]
    fn test_invalid_tokens_are_counted_not_dropped() {
        let err = parse_numeric_series("1, abc, 2, x3").unwrap_err();
        assert_eq!(
            err,
            ParseError {
                invalid_tokens: 2,
                first_invalid: "abc".to_owned(),
            }
        );
    }

    #[test]
    fn test_non_finite_tokens_rejected() {
        let err = parse_numeric_series("1, NaN, inf, -infinity").unwrap_err();
        assert_eq!(err.invalid_tokens, 3);
        assert_eq!(err.first_invalid, "NaN");
    }

    #[test]
    fn test_space_separated_token_is_invalid() {
        let err = parse_numeric_series("1 2, 3").unwrap_err();
        assert_eq!(err.invalid_tokens, 1);
        assert_eq!(err.first_invalid, "1 2");
    }

    #[test]
    fn test_from_str() {
        let series: NumericSeries = "4, 5".parse().unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_new_rejects_infinity() {
        let err = NumericSeries::new(vec![0.0, 1.0, f64::INFINITY]).unwrap_err();
        assert_eq!(err.index, 2);
    }

    #[test]
    fn test_import_csv_with_header() {
        let series = parse_import_text("value\n10\n\"20\"\n30.5\n").unwrap();
        assert_eq!(series.as_slice(), &[10.0, 20.0, 30.5]);
    }

    #[test]
    fn test_deserialize_validates() {
        let series: NumericSeries = serde_json::from_str("[1.0, 2.0]").unwrap();
        assert_eq!(series.as_slice(), &[1.0, 2.0]);
        assert_eq!(serde_json::to_string(&series).unwrap(), "[1.0,2.0]");
    }

    #[test]
    fn test_sorted_copy_leaves_original() {
        let series = NumericSeries::new(vec![3.0, -1.0, 2.0]).unwrap();
        assert_eq!(series.sorted(), vec![-1.0, 2.0, 3.0]);
        assert_eq!(series.as_slice(), &[3.0, -1.0, 2.0]);
    }
}
