//! HTTP liveliness probing.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::{error, info};

/// How long a liveliness GET may take before it counts as dead.
const PING_TIMEOUT: Duration = Duration::from_secs(20);

const PING_USER_AGENT: &str = "GitHub-Actions-Liveliness-Check/1.0";

/// One-shot liveliness prober.
///
/// Issues a single GET with a fixed timeout, following redirects. Any 2xx
/// response counts as live; everything else, including transport errors,
/// counts as dead. No retries.
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(PING_TIMEOUT)
            .user_agent(PING_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Check whether `url` responds with a success status.
    ///
    /// Errors never propagate; the outcome is the boolean plus log lines.
    pub fn check(&self, url: &str) -> bool {
        info!("Pinging URL: {url}...");
        let started = Instant::now();

        match self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
        {
            Ok(response) => {
                info!(
                    "SUCCESS: {url} responded in {:.2}s with {}",
                    started.elapsed().as_secs_f64(),
                    response.status()
                );
                true
            }
            Err(err) => {
                error!("FAILURE: could not reach {url}: {err}");
                false
            }
        }
    }
}
