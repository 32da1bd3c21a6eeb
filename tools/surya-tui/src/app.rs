//! Application state and key handling.
//!
//! `App` owns the single [`Navigator`] plus the local state of every view.
//! Views never touch the navigator; key handlers turn view output into a
//! [`NavAction`] and hand it to [`Navigator::apply`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::Serialize;
use tracing::debug;

use surya_core::notifications::AlertTopic;
use surya_core::{
    AlertPreferences, DeviceBoard, EnergyUsageState, HistoryLog, Inbox, NavAction, NavigationItem,
    Navigator, SettingsPanel, SystemSelector, SystemType, TabId, View,
};

/// Top-level mode of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Normal operation.
    #[default]
    Running,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Which pane of the notifications view receives list keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFocus {
    #[default]
    Inbox,
    Preferences,
}

impl NotificationFocus {
    fn toggle(self) -> Self {
        match self {
            NotificationFocus::Inbox => NotificationFocus::Preferences,
            NotificationFocus::Preferences => NotificationFocus::Inbox,
        }
    }
}

/// Serializable view of the navigation state, printed by `--dump-state`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub system_type: Option<SystemType>,
    pub active_tab: TabId,
    pub view: View,
    pub navigation: Vec<NavigationItem>,
}

impl From<&Navigator> for StateSnapshot {
    fn from(nav: &Navigator) -> Self {
        Self {
            system_type: nav.system_type(),
            active_tab: nav.active_tab(),
            view: nav.view(),
            navigation: nav.navigation_items(),
        }
    }
}

/// Main application model.
#[derive(Debug, Default)]
pub struct App {
    /// Current mode.
    pub state: AppState,
    /// Navigation state; the only source of the rendered view.
    pub navigator: Navigator,
    pub selector: SystemSelector,
    pub energy: EnergyUsageState,
    pub devices: DeviceBoard,
    pub history: HistoryLog,
    pub inbox: Inbox,
    pub alert_prefs: AlertPreferences,
    /// Highlighted row in the alert preference list.
    pub alert_cursor: usize,
    pub notification_focus: NotificationFocus,
    pub settings: SettingsPanel,
    /// Feedback for the last rejected action, cleared on the next key.
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an application with a preselected navigation state.
    pub fn with_navigator(navigator: Navigator) -> Self {
        Self {
            navigator,
            ..Self::default()
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from(&self.navigator)
    }

    /// Handle a terminal key event. Release and repeat events are ignored.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.on_key(key.code, key.modifiers);
    }

    /// Handle a key press.
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.state {
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Running;
                return;
            }
            AppState::Quit => return,
            AppState::Running => {}
        }

        self.status_message = None;

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.state = AppState::Quit;
                return;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.state = AppState::Quit;
                return;
            }
            KeyCode::Char('?') => {
                self.state = AppState::Help;
                return;
            }
            _ => {}
        }

        let view = self.navigator.view();
        if view == View::SystemSelector {
            self.handle_selector_key(code);
            return;
        }

        if self.handle_navigation_key(code) {
            return;
        }

        match view {
            View::SystemSelector => {}
            View::Dashboard(_) | View::ComponentStatus(_) => {}
            View::EnergyUsage(_) => self.handle_energy_key(code),
            View::DeviceControl => self.handle_devices_key(code),
            View::History(_) => self.handle_history_key(code),
            View::Notifications => self.handle_notifications_key(code),
            View::Settings => self.handle_settings_key(code),
        }
    }

    /// Global keys available once a system is selected. Returns true when
    /// the key was consumed.
    fn handle_navigation_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Tab | KeyCode::Right => {
                self.navigator.cycle_tab(true);
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.navigator.cycle_tab(false);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.navigator.apply(NavAction::ResetSystem);
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = c as usize - '1' as usize;
                self.navigator.select_nav_index(index);
            }
            _ => return false,
        }
        true
    }

    fn handle_selector_key(&mut self, code: KeyCode) {
        let action = match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selector.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selector.move_down();
                None
            }
            KeyCode::Enter => Some(self.selector.confirm()),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                self.selector.choose(c as usize - '1' as usize)
            }
            _ => None,
        };
        if let Some(action) = action {
            self.navigator.apply(action);
        }
    }

    fn handle_energy_key(&mut self, code: KeyCode) {
        if let KeyCode::Char('v') | KeyCode::Char('V') = code {
            self.energy.toggle_period();
        }
    }

    fn handle_devices_key(&mut self, code: KeyCode) {
        let result = match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.devices.select_previous();
                return;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.devices.select_next();
                return;
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.devices.toggle_selected().map(|_| ()),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.devices.adjust_selected(true).map(|_| ())
            }
            KeyCode::Char('-') => self.devices.adjust_selected(false).map(|_| ()),
            _ => return,
        };
        if let Err(err) = result {
            debug!(error = %err, "device control rejected");
            self.status_message = Some(err.to_string());
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        if let KeyCode::Char('p') | KeyCode::Char('P') = code {
            self.history.cycle_period();
        }
    }

    fn handle_notifications_key(&mut self, code: KeyCode) {
        if let KeyCode::Char('p') | KeyCode::Char('P') = code {
            self.notification_focus = self.notification_focus.toggle();
            return;
        }
        if let KeyCode::Char('a') | KeyCode::Char('A') = code {
            self.inbox.mark_all_read();
            return;
        }

        match self.notification_focus {
            NotificationFocus::Inbox => match code {
                KeyCode::Up | KeyCode::Char('k') => self.inbox.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.inbox.select_next(),
                KeyCode::Enter => {
                    self.inbox.mark_selected_read();
                }
                KeyCode::Char('x') | KeyCode::Delete => {
                    self.inbox.delete_selected();
                }
                _ => {}
            },
            NotificationFocus::Preferences => {
                let len = AlertTopic::ALL.len();
                match code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.alert_cursor = (self.alert_cursor + len - 1) % len;
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.alert_cursor = (self.alert_cursor + 1) % len;
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        let topic = AlertTopic::ALL[self.alert_cursor % len];
                        self.alert_prefs.toggle(topic);
                    }
                    _ => {}
                }
            }
        }
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.settings.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.settings.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(action) = self.settings.activate() {
                    self.navigator.apply(action);
                }
            }
            _ => {}
        }
    }
}
