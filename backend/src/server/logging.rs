//! Structured JSON logging setup.

use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt};

const FALLBACK_LEVEL: &str = "info";

/// Parse a log filter directive such as `info` or `storefront=debug,warn`.
///
/// # Errors
///
/// Returns the parse error when `level` is not a valid directive.
pub fn env_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}

/// Install the global JSON subscriber.
///
/// An unparsable `level` falls back to `info` and is reported once the
/// subscriber is running. Installing twice is logged and otherwise ignored.
pub fn init_logging(level: &str) {
    let (filter, rejected) = match env_filter(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_LEVEL), Some(err)),
    };

    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
    if let Some(err) = rejected {
        warn!(level, error = %err, "invalid log level, using info");
    }
}
