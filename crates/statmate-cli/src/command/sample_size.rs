use std::path::PathBuf;

use anyhow::Context;
use statmate_stats::{
    report,
    sample_size::{ErrorMargin, SampleSizeComparison},
};
use tracing::info;

use crate::{table, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SampleSizeArg {
    /// Population size; thousands separators (`,` or `_`) are allowed
    #[arg(long, value_parser = parse_population)]
    population: u64,
    /// Acceptable error margin, strictly between 0 and 1
    #[arg(long, value_parser = parse_error_margin, default_value = "0.05")]
    error_margin: ErrorMargin,
    /// Write the results as JSON instead of printing tables
    #[arg(long)]
    json: bool,
    /// Output file path for JSON results
    #[arg(long, requires = "json")]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SampleSizeArg) -> anyhow::Result<()> {
    info!(
        population = arg.population,
        error_margin = arg.error_margin.get(),
        "computing sample size"
    );
    let comparison = SampleSizeComparison::new(arg.population, arg.error_margin);

    if arg.json {
        return Output::save_json(&comparison, arg.output.clone());
    }

    table::print_sample_size(&comparison);
    println!();
    println!("{}", report::sample_size_summary(&comparison));
    Ok(())
}

fn parse_population(s: &str) -> anyhow::Result<u64> {
    let digits = s
        .chars()
        .filter(|c| !matches!(c, ',' | '_'))
        .collect::<String>();
    digits
        .trim()
        .parse()
        .with_context(|| format!("Invalid population size: {s}"))
}

fn parse_error_margin(s: &str) -> anyhow::Result<ErrorMargin> {
    let value = s
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid error margin: {s}"))?;
    Ok(ErrorMargin::new(value)?)
}
