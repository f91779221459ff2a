//! Combined check: liveliness first, then a login attempt.
//!
//! Credentials come from the environment (`EMAIL`, `PASSWORD`, optional
//! `APPLICATION_ID`), the usual shape for CI secrets. A missing variable
//! fails the run before any network request is made.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use envcheck::config::Credentials;
use envcheck::logging::{self, LogFormat};
use envcheck::login::LoginClient;
use envcheck::probe::Prober;
use envcheck::runner::{self, CheckOutcome};

#[derive(Parser)]
#[command(
    name = "login-check",
    version,
    about = "Check liveliness of an environment URL and attempt login"
)]
struct Cli {
    /// Base environment URL (e.g. https://customer.example.net)
    #[arg(long)]
    url: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(LogFormat::Timestamped);

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &credentials) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, credentials: &Credentials) -> anyhow::Result<CheckOutcome> {
    let prober = Prober::new().context("failed to build liveliness client")?;
    let login = LoginClient::new().context("failed to build login client")?;
    Ok(runner::liveliness_and_login(
        &prober,
        &login,
        &cli.url,
        credentials,
    ))
}
