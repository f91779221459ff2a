//! Orchestration of the check sequences.

use std::process::ExitCode;

use tracing::{error, info, warn};

use crate::config::Credentials;
use crate::login::LoginClient;
use crate::probe::Prober;

/// Terminal result of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed,
}

impl CheckOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Passed => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}

/// Liveliness check alone.
pub fn liveliness_only(prober: &Prober, url: &str) -> CheckOutcome {
    if prober.check(url) {
        CheckOutcome::Passed
    } else {
        CheckOutcome::Failed
    }
}

/// Liveliness check followed by a login attempt against the same
/// environment. A dead URL short-circuits; no login request is made.
pub fn liveliness_and_login(
    prober: &Prober,
    login: &LoginClient,
    url: &str,
    credentials: &Credentials,
) -> CheckOutcome {
    if !prober.check(url) {
        warn!("URL not live, skipping login attempt");
        return CheckOutcome::Failed;
    }

    match login.login(url, credentials) {
        Some(_cookies) => {
            info!("LOGIN CHECK PASSED");
            CheckOutcome::Passed
        }
        None => {
            error!("LOGIN FAILED");
            CheckOutcome::Failed
        }
    }
}
