//! Log output setup for the check binaries.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Line format for a binary's log output.
pub enum LogFormat {
    /// Bare level and message.
    Plain,
    /// Local timestamp and thread id before each line.
    Timestamped,
}

/// Install the global subscriber, writing human-readable lines to stdout.
///
/// Level defaults to `info` and follows `RUST_LOG` when set. Call once,
/// before any other work.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stdout);

    match format {
        LogFormat::Plain => builder.without_time().init(),
        LogFormat::Timestamped => builder
            .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S %z".to_string()))
            .with_thread_ids(true)
            .init(),
    }
}
