//! # Logging
//!
//! Installs the file subscriber once and checks that navigation
//! transitions are written to it.

#[cfg(test)]
mod tests {
    use std::fs;

    use surya_core::{Navigator, SystemType, TabId};
    use surya_telemetry::{init_logging, TelemetryConfig, TelemetryError};

    #[test]
    fn test_navigation_events_reach_log_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log_file = dir.path().join("surya.log");
        let config = TelemetryConfig::default()
            .with_overrides(Some("surya_core=debug,info".to_string()), Some(log_file.clone()));

        let guard = init_logging(&config).expect("first init succeeds");

        let mut nav = Navigator::new();
        nav.select_system(SystemType::SharedGrid);
        nav.set_active_tab(TabId::Devices);
        nav.reset_system();

        // Only one global subscriber per process
        assert!(matches!(init_logging(&config), Err(TelemetryError::Init(_))));
        drop(guard);

        let contents = fs::read_to_string(&log_file).expect("log file written");
        assert!(contents.contains("logging initialized"));
        assert!(contents.contains("system type selected"));
        assert!(contents.contains("tab not offered"));
        assert!(contents.contains("system type reset"));
        assert!(contents.contains("shutting down"));
    }
}
