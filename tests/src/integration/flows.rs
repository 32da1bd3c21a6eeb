//! # Navigation Flows
//!
//! Drives `App` with key presses the way a user would and checks the
//! resolved navigation state after each step.

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use surya_core::{resolve_view, NavAction, Navigator, SystemType, TabId, View};
    use surya_tui::App;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_all(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            press(app, *code);
        }
    }

    fn tabs(app: &App) -> Vec<TabId> {
        app.navigator.navigation_items().iter().map(|i| i.id).collect()
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    /// Select private, open devices, reset, select shared-grid: the stale
    /// devices tab falls back to the dashboard and is not offered.
    #[test]
    fn test_devices_fallback_after_switching_system() {
        let mut app = App::new();
        assert_eq!(app.navigator.view(), View::SystemSelector);

        // Highlight "Private PV" and confirm
        press_all(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.navigator.view(), View::Dashboard(SystemType::Private));
        assert_eq!(tabs(&app).len(), 7);

        // Devices is the fourth item for a private system
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.navigator.view(), View::DeviceControl);

        // Header "Switch System"
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.navigator.view(), View::SystemSelector);
        assert_eq!(app.navigator.active_tab(), TabId::Devices);

        // Pick shared-grid by number
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.navigator.active_tab(), TabId::Devices);
        assert_eq!(app.navigator.view(), View::Dashboard(SystemType::SharedGrid));
        assert!(!tabs(&app).contains(&TabId::Devices));
    }

    #[test]
    fn test_tab_cycle_from_stale_devices_tab() {
        let mut app = App::with_navigator(Navigator::with_state(
            Some(SystemType::SharedGrid),
            TabId::Devices,
        ));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.navigator.active_tab(), TabId::Dashboard);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.navigator.view(), View::EnergyUsage(SystemType::SharedGrid));
        press_all(&mut app, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(app.navigator.active_tab(), TabId::Settings);
    }

    #[test]
    fn test_settings_reset_returns_to_selector() {
        let mut app = App::with_navigator(Navigator::with_state(
            Some(SystemType::Private),
            TabId::Dashboard,
        ));
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.navigator.view(), View::Settings);

        // Last entry is "Change system type"
        press_all(&mut app, &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.navigator.view(), View::SystemSelector);

        // Navigation keys do nothing on the selector
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.navigator.view(), View::SystemSelector);
        assert!(tabs(&app).iter().all(|t| *t != TabId::Devices));
    }

    #[test]
    fn test_view_state_kept_across_system_switch() {
        let mut app = App::with_navigator(Navigator::with_state(
            Some(SystemType::Private),
            TabId::Devices,
        ));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.devices.active_count(), 2);

        press_all(&mut app, &[KeyCode::Char('s'), KeyCode::Char('2')]);
        assert_eq!(app.navigator.view(), View::DeviceControl);
        assert_eq!(app.devices.active_count(), 2);
    }

    #[test]
    fn test_repeat_and_release_events_ignored() {
        let mut app = App::new();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Repeat;
        app.handle_key_event(key);
        assert_eq!(app.navigator.view(), View::SystemSelector);
    }

    #[test]
    fn test_resolution_is_total() {
        let systems = [None, Some(SystemType::SharedGrid), Some(SystemType::Private)];
        for system in systems {
            for tab in TabId::ALL {
                let mut nav = Navigator::with_state(system, tab);
                let view = nav.view();
                assert_eq!(view, resolve_view(system, tab));
                if system.is_none() {
                    assert_eq!(view, View::SystemSelector);
                }

                nav.apply(NavAction::ResetSystem);
                assert_eq!(nav.view(), View::SystemSelector);
                assert_eq!(nav.active_tab(), tab);
            }
        }
    }

    #[test]
    fn test_dump_state_json() {
        let app = App::with_navigator(Navigator::with_state(
            Some(SystemType::SharedGrid),
            TabId::Devices,
        ));
        let json = serde_json::to_value(app.snapshot()).expect("snapshot serializes");
        assert_eq!(json["active_tab"], "devices");
        assert_eq!(json["view"]["view"], "dashboard");
        assert_eq!(json["view"]["system"], "shared-grid");
        assert_eq!(json["navigation"].as_array().map(Vec::len), Some(6));
    }
}
