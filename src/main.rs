mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::EpsError;
use crate::input::{Overrides, RawInputs, RawWeights, render_template, resolve_evaluation};
use crate::model::thresholds::RecommendationThresholds;
use crate::pipeline::evaluate;
use crate::pipeline::stage4_report::{OutputFormat, render, write_reports};

/// Ethical Propensity Score calculator
#[derive(Parser, Debug)]
#[command(name = "eps-score", version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); EPS_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one evaluation and print the report
    Score(ScoreArgs),
    /// Print an evaluation file filled with the default values
    Template,
}

#[derive(clap::Args, Debug)]
struct ScoreArgs {
    /// Evaluation file (TOML with [inputs] and [weights] tables)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write report.txt, summary.json and metrics.tsv into this directory
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    #[command(flatten)]
    inputs: RawInputs,

    #[command(flatten)]
    weights: RawWeights,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EpsError> {
    let text = match cli.command {
        Command::Score(args) => score(args)?,
        Command::Template => render_template()?,
    };
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .map_err(|e| EpsError::io("<stdout>", e))
}

fn score(args: ScoreArgs) -> Result<String, EpsError> {
    let overrides = Overrides {
        inputs: args.inputs,
        weights: args.weights,
    };
    let evaluation = resolve_evaluation(args.config.as_deref(), &overrides)?;
    let outcome = evaluate(&evaluation, &RecommendationThresholds::default_v1());

    if let Some(out_dir) = &args.out {
        write_reports(&outcome, out_dir)?;
    }
    render(&outcome, args.format)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
