//! Logging configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "surya.log";

/// Configuration for the file-backed tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name recorded in every log line
    pub service_name: String,

    /// Log level filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` directive such as `surya_core=debug`)
    pub log_level: String,

    /// File the subscriber appends to. The terminal belongs to the UI.
    pub log_file: PathBuf,

    /// Whether to write JSON lines instead of plain text
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "surya".to_string(),
            log_level: "info".to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SURYA_SERVICE_NAME`: Service name (default: surya)
    /// - `SURYA_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `SURYA_LOG_FILE`: Log file path (default: surya.log)
    /// - `SURYA_JSON_LOGS`: `true` or `1` for JSON lines (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            service_name: lookup("SURYA_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("SURYA_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            log_file: lookup("SURYA_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),

            json_logs: lookup("SURYA_JSON_LOGS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, log_level: Option<String>, log_file: Option<PathBuf>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(file) = log_file {
            self.log_file = file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::from_lookup(lookup(&[]));
        assert_eq!(config, TelemetryConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, PathBuf::from("surya.log"));
    }

    #[test]
    fn test_env_values() {
        let config = TelemetryConfig::from_lookup(lookup(&[
            ("SURYA_SERVICE_NAME", "surya-test"),
            ("RUST_LOG", "warn"),
            ("SURYA_LOG_FILE", "/tmp/x.log"),
            ("SURYA_JSON_LOGS", "TRUE"),
        ]));
        assert_eq!(config.service_name, "surya-test");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
        assert!(config.json_logs);
    }

    #[test]
    fn test_surya_level_wins_over_rust_log() {
        let config = TelemetryConfig::from_lookup(lookup(&[
            ("SURYA_LOG_LEVEL", "debug"),
            ("RUST_LOG", "warn"),
            ("SURYA_JSON_LOGS", "no"),
        ]));
        assert_eq!(config.log_level, "debug");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_cli_overrides() {
        let config = TelemetryConfig::default()
            .with_overrides(Some("trace".into()), Some(PathBuf::from("ui.log")));
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.log_file, PathBuf::from("ui.log"));

        let untouched = TelemetryConfig::default().with_overrides(None, None);
        assert_eq!(untouched, TelemetryConfig::default());
    }
}
