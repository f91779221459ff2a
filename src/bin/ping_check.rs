//! Liveliness-only check: exit 0 when the URL answers with a 2xx status.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use envcheck::logging::{self, LogFormat};
use envcheck::probe::Prober;
use envcheck::runner::{self, CheckOutcome};

#[derive(Parser)]
#[command(
    name = "ping-check",
    version,
    about = "Check that a URL is live and returns a 2xx status code"
)]
struct Cli {
    /// Full URL of the environment login page to check
    #[arg(long)]
    url: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(LogFormat::Plain);

    match run(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<CheckOutcome> {
    let prober = Prober::new().context("failed to build HTTP client")?;
    Ok(runner::liveliness_only(&prober, &cli.url))
}
