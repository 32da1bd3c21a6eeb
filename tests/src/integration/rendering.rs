//! # Rendering
//!
//! Full-screen renders of `App`. The body must follow the resolved view,
//! never the raw active tab.

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use surya_core::{Navigator, SystemType, TabId};
    use surya_tui::{ui, App};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
        terminal.draw(|frame| ui::render(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_at(system: Option<SystemType>, tab: TabId) -> App {
        App::with_navigator(Navigator::with_state(system, tab))
    }

    #[test]
    fn test_every_tab_renders_for_both_systems() {
        for system in SystemType::ALL {
            for tab in TabId::ALL {
                let text = screen(&app_at(Some(system), tab));
                assert!(text.contains("SuryaOptiAI"), "{system} / {tab}");
                assert!(text.contains(system.label()), "{system} / {tab}");
            }
        }
    }

    #[test]
    fn test_unselected_always_shows_selector() {
        for tab in TabId::ALL {
            let text = screen(&app_at(None, tab));
            assert!(text.contains("Choose your system"), "{tab}");
            assert!(!text.contains("Switch System"), "{tab}");
        }
    }

    #[test]
    fn test_devices_view_only_for_private() {
        let private = screen(&app_at(Some(SystemType::Private), TabId::Devices));
        assert!(private.contains("Device Control"));

        let shared = screen(&app_at(Some(SystemType::SharedGrid), TabId::Devices));
        assert!(!shared.contains("Device Control"));
        assert!(shared.contains("AI Insights"));
    }

    #[test]
    fn test_unread_badge_in_navigation() {
        let mut app = app_at(Some(SystemType::Private), TabId::Dashboard);
        assert!(screen(&app).contains("Alerts(2)"));
        app.inbox.mark_all_read();
        assert!(!screen(&app).contains("Alerts(2)"));
    }
}
