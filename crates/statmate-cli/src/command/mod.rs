use std::io;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{
    consult::ConsultArg, describe::DescribeArg, sample_size::SampleSizeArg, t_test::TTestArg,
};

mod consult;
mod describe;
mod sample_size;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// What analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Descriptive statistics and histogram of one sample
    Describe(#[clap(flatten)] DescribeArg),
    /// Compare two independent samples with Welch's t-test
    TTest(#[clap(flatten)] TTestArg),
    /// Required sample size by Yamane and Krejcie & Morgan
    SampleSize(#[clap(flatten)] SampleSizeArg),
    /// Build a request for the remote consultation service
    Consult(#[clap(flatten)] ConsultArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::TTest(arg) => t_test::run(&arg)?,
        Mode::SampleSize(arg) => sample_size::run(&arg)?,
        Mode::Consult(arg) => consult::run(&arg)?,
    }
    Ok(())
}

/// Logs go to stderr so that reports and JSON on stdout stay clean.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
