//! Telemetry module
//!
//! Structured logging via `tracing`

mod logging;

pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Guard that cleans up telemetry on drop
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;
    tracing::debug!(level = %config.log_level, format = ?config.log_format, "Logging initialized");
    Ok(TelemetryGuard { _priv: () })
}
