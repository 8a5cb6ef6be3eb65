//! Subscriber setup for the replay binary.
//!
//! Logs go to stderr so stdout stays machine-readable.

use selframe_core::logging::filter_directive_from_env;
use tracing_subscriber::EnvFilter;

use crate::error::{ReplayError, Result};

/// Install the global fmt subscriber.
///
/// `level` wins over the environment. A subscriber that is already
/// installed is kept.
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let directive = level
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(filter_directive_from_env, str::to_string);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|error| ReplayError::invalid(format!("log filter `{directive}`: {error}")))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
