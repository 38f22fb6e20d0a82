//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig, ObservabilityError};

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops). Only a filter
/// that does not parse is reported as an error.
pub fn init(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let filter = build_filter(&config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    // A subscriber may already be installed (tests, host app); keep it.
    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    }
    .is_ok();

    if installed {
        ::tracing::debug!(filter = %config.filter, format = ?config.format, "observability initialized");
    }
    Ok(())
}

pub(crate) fn build_filter(directives: &str) -> Result<EnvFilter, ObservabilityError> {
    EnvFilter::try_new(directives).map_err(|e| ObservabilityError::InvalidFilter {
        filter: directives.to_owned(),
        reason: e.to_string(),
    })
}
