//! File-backed tracing subscriber.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the filter from the configured directive.
pub(crate) fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Filter(format!("{}: {}", config.log_level, e)))
}

/// Install the global subscriber writing to `config.log_file`.
pub(crate) fn init_subscriber(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|source| TelemetryError::LogFile {
            path: config.log_file.clone(),
            source,
        })?;
    let writer = Mutex::new(file);

    if config.json_logs {
        let json_layer = fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_directives() {
        let mut config = TelemetryConfig::default();
        config.log_level = "surya_core=debug,info".to_string();
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_filter_rejects_garbage() {
        let mut config = TelemetryConfig::default();
        config.log_level = "surya_core=verbose".to_string();
        assert!(matches!(build_filter(&config), Err(TelemetryError::Filter(_))));
    }

    #[test]
    fn test_missing_log_directory() {
        let mut config = TelemetryConfig::default();
        config.log_file = std::env::temp_dir()
            .join("surya-missing-dir-for-test")
            .join("nested")
            .join("surya.log");
        assert!(matches!(
            init_subscriber(&config),
            Err(TelemetryError::LogFile { .. })
        ));
    }
}
