#![forbid(unsafe_code)]

//! Logging facade.
//!
//! Instrumentation across the workspace goes through `tracing` behind the
//! `tracing` feature, so library users who do not opt in pay nothing. The
//! `tracing-json` feature adds a ready-made JSON subscriber for hosts.
//!
//! The filter directive is resolved from [`LOG_FILTER_ENV`] first, then
//! `RUST_LOG`, then [`DEFAULT_LOG_FILTER`].

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Environment variable consulted first for the log filter.
pub const LOG_FILTER_ENV: &str = "SELFRAME_LOG";

/// Filter used when no environment override is present.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Pick a filter directive from the two candidate environment values.
///
/// Empty or whitespace-only values are treated as unset.
#[must_use]
pub fn pick_filter_directive(selframe_log: Option<&str>, rust_log: Option<&str>) -> String {
    [selframe_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

/// Resolve the filter directive from the process environment.
#[must_use]
pub fn filter_directive_from_env() -> String {
    let selframe_log = std::env::var(LOG_FILTER_ENV).ok();
    let rust_log = std::env::var("RUST_LOG").ok();
    pick_filter_directive(selframe_log.as_deref(), rust_log.as_deref())
}

/// Subscriber installation failures.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter `{directive}`: {reason}")]
    InvalidFilter { directive: String, reason: String },
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Install a global JSON subscriber on stderr.
///
/// Fails if the filter does not parse or a global subscriber already exists.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directive = filter_directive_from_env();
    let filter = EnvFilter::try_new(&directive).map_err(|err| LoggingError::InvalidFilter {
        directive: directive.clone(),
        reason: err.to_string(),
    })?;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}
