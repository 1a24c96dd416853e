//! Statistics engine for the StatMate analysis assistant.
//!
//! Every operation here is a pure, synchronous function over its inputs:
//!
//! - **Parsing**: turn comma/newline separated text into a validated series of finite numbers
//! - **Descriptive statistics**: n, mean, median, sample standard deviation, min, max
//! - **Histogram generation**: equal-width binning that always counts the maximum value
//! - **Welch's t-test**: t statistic, Welch–Satterthwaite df and mean difference
//! - **Sample-size estimation**: Yamane and Krejcie & Morgan formulas
//! - **Reports**: APA-style summary sentences over the results above
//!
//! # Modules
//!
//! - [`parse`]: Numeric input parsing and [`parse::NumericSeries`]
//! - [`descriptive`]: Descriptive statistics for summarizing a sample
//! - [`histogram`]: Histogram construction and the default bin-count policy
//! - [`ttest`]: Two independent samples compared with Welch's t-test
//! - [`sample_size`]: Required sample size for a finite population
//! - [`report`]: Human-readable summaries in APA style
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use statmate_stats::{descriptive::Descriptives, parse::parse_numeric_series};
//!
//! let series = parse_numeric_series("1, 2, 3, 4, 5").unwrap();
//! let stats = Descriptives::new(&series);
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use statmate_stats::{histogram::{default_bin_count, Histogram}, parse::parse_numeric_series};
//!
//! let series = parse_numeric_series("1\n2\n3\n4\n5\n6\n7\n8\n9\n10").unwrap();
//! let histogram = Histogram::new(&series, default_bin_count(series.len()));
//! assert_eq!(histogram.total_count(), 10);
//! ```
//!
//! ## Comparing two groups
//!
//! ```
//! use statmate_stats::{parse::parse_numeric_series, ttest::{TTestError, WelchTTest}};
//!
//! let a = parse_numeric_series("5, 7, 8, 6").unwrap();
//! let b = parse_numeric_series("2").unwrap();
//! assert!(matches!(WelchTTest::new(&a, &b), Err(TTestError::InsufficientData { .. })));
//! ```
//!
//! ## Estimating a sample size
//!
//! ```
//! use statmate_stats::sample_size::{ErrorMargin, SampleSizeComparison};
//!
//! let sizes = SampleSizeComparison::new(1_000, ErrorMargin::new(0.05).unwrap());
//! assert_eq!((sizes.yamane, sizes.krejcie_morgan), (286, 278));
//! ```

pub mod descriptive;
pub mod histogram;
pub mod parse;
pub mod report;
pub mod sample_size;
pub mod ttest;
