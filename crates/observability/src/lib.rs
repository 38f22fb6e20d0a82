//! Tracing and logging setup shared by hosts embedding the adapters.

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), ObservabilityError> {
    tracing::init(&ObservabilityConfig::from_env())
}

/// Logging configuration.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, ObservabilityError};
