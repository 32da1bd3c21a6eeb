//! # Surya Telemetry
//!
//! Structured logging for the SuryaOptiAI console.
//!
//! The terminal UI owns stdout, so every event goes to a log file through a
//! `tracing-subscriber` registry with an `EnvFilter`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use surya_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_logging(&config)?;
//! tracing::info!("console started");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SURYA_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `SURYA_LOG_FILE` | `surya.log` | Log file path |
//! | `SURYA_JSON_LOGS` | `false` | JSON lines instead of text |
//! | `SURYA_SERVICE_NAME` | `surya` | Service name in log lines |

mod config;
mod tracing_setup;

use std::path::PathBuf;

use thiserror::Error;

pub use config::{TelemetryConfig, DEFAULT_LOG_FILE};

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber.
///
/// Returns a guard to hold for the lifetime of the application. Fails with
/// [`TelemetryError::Init`] when a subscriber is already installed.
pub fn init_logging(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    tracing_setup::init_subscriber(config)?;

    tracing::info!(
        service = %config.service_name,
        filter = %config.log_level,
        json = config.json_logs,
        "logging initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name.clone(),
    })
}

/// Guard that marks the logging session. Drop to record shutdown.
#[derive(Debug)]
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TelemetryError::Filter("bad".to_string());
        assert_eq!(err.to_string(), "Invalid log filter: bad");
    }
}
