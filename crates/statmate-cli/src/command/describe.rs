use std::{num::NonZeroUsize, path::PathBuf};

use serde::Serialize;
use statmate_stats::{
    descriptive::Descriptives,
    histogram::{self, Histogram},
    report,
};
use tracing::info;

use crate::{
    table,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    /// Numbers separated by commas or newlines
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    data: Option<String>,
    /// Text or CSV file to import the numbers from
    #[arg(long)]
    file: Option<PathBuf>,
    /// Number of histogram bins (default: square root of N, clamped to 5..=10)
    #[arg(long)]
    bins: Option<NonZeroUsize>,
    /// Write the results as JSON instead of printing tables
    #[arg(long)]
    json: bool,
    /// Output file path for JSON results
    #[arg(long, requires = "json")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct DescribeReport {
    descriptives: Descriptives,
    histogram: Histogram,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let series = util::read_series("data", arg.data.as_deref(), arg.file.as_deref())?;
    let bins = arg
        .bins
        .unwrap_or_else(|| histogram::default_bin_count(series.len()));
    info!(n = series.len(), bins = bins.get(), "computing descriptive statistics");

    let descriptives = Descriptives::new(&series);
    let histogram = Histogram::new(&series, bins);
    let report = DescribeReport {
        summary: report::descriptive_apa(&descriptives),
        descriptives,
        histogram,
    };

    if arg.json {
        return Output::save_json(&report, arg.output.clone());
    }

    table::print_descriptives("Descriptive statistics", &report.descriptives);
    println!();
    table::print_histogram(&report.histogram);
    if let Some(summary) = &report.summary {
        println!();
        println!("{summary}");
    }
    Ok(())
}
