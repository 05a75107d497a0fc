//! `tracing` subscriber setup.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Logging setup errors.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter")]
    Filter(#[from] ParseError),
    /// A global subscriber was already installed.
    #[error("failed to install log subscriber")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber: the configured filter over a compact
/// formatter on stderr.
///
/// # Errors
///
/// Returns [`TelemetryError`] if the filter is malformed or a subscriber is
/// already installed.
pub fn init(logging: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&logging.filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
