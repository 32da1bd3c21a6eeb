//! Alert inbox and alert preferences.

use serde::Serialize;
use tracing::debug;

use crate::priority::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Success,
    Info,
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "⚠",
            NotificationKind::Success => "✔",
            NotificationKind::Info => "ℹ",
            NotificationKind::Error => "✖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub priority: Priority,
    pub title: String,
    pub message: String,
    pub received: String,
    pub read: bool,
}

impl Notification {
    fn seeded(
        id: u32,
        kind: NotificationKind,
        priority: Priority,
        title: &str,
        message: &str,
        received: &str,
        read: bool,
    ) -> Self {
        Self {
            id,
            kind,
            priority,
            title: title.to_string(),
            message: message.to_string(),
            received: received.to_string(),
            read,
        }
    }
}

fn seeded_notifications() -> Vec<Notification> {
    use NotificationKind::*;
    vec![
        Notification::seeded(
            1,
            Warning,
            Priority::High,
            "High inverter temperature",
            "Main inverter reached 47°C. Keep monitoring to prevent overheating.",
            "10 minutes ago",
            false,
        ),
        Notification::seeded(
            2,
            Success,
            Priority::Medium,
            "Maintenance complete",
            "Cleaning of panel arrays 1-3 finished. Efficiency up 3%.",
            "2 hours ago",
            false,
        ),
        Notification::seeded(
            3,
            Info,
            Priority::Low,
            "Weather forecast",
            "Clear skies expected tomorrow. Production forecast +15%.",
            "4 hours ago",
            true,
        ),
        Notification::seeded(
            4,
            Error,
            Priority::Critical,
            "Anomaly detected",
            "Voltage fluctuation on the distribution panel. Backup system engaged.",
            "1 day ago",
            true,
        ),
        Notification::seeded(
            5,
            Info,
            Priority::Low,
            "Daily report",
            "Production today: 145.2 kWh. Target reached 102%.",
            "1 day ago",
            true,
        ),
    ]
}

/// Alert list with a highlighted row.
#[derive(Debug, Clone, PartialEq)]
pub struct Inbox {
    notifications: Vec<Notification>,
    selected: usize,
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Inbox {
    pub fn new() -> Self {
        Self {
            notifications: seeded_notifications(),
            selected: 0,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Notification> {
        self.notifications.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.notifications.is_empty() {
            self.selected = (self.selected + 1) % self.notifications.len();
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.notifications.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Returns false when no alert has this id.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                debug!(id, "notification marked read");
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
        debug!("all notifications marked read");
    }

    /// Returns false when no alert has this id.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        let removed = self.notifications.len() < before;
        if removed {
            debug!(id, "notification deleted");
            self.selected = self.selected.min(self.notifications.len().saturating_sub(1));
        }
        removed
    }

    pub fn mark_selected_read(&mut self) -> bool {
        match self.selected().map(|n| n.id) {
            Some(id) => self.mark_read(id),
            None => false,
        }
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selected().map(|n| n.id) {
            Some(id) => self.delete(id),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTopic {
    Anomaly,
    Maintenance,
    Weather,
    Performance,
    Reports,
}

impl AlertTopic {
    pub const ALL: [AlertTopic; 5] = [
        AlertTopic::Anomaly,
        AlertTopic::Maintenance,
        AlertTopic::Weather,
        AlertTopic::Performance,
        AlertTopic::Reports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlertTopic::Anomaly => "Anomaly alerts",
            AlertTopic::Maintenance => "Maintenance reminders",
            AlertTopic::Weather => "Weather updates",
            AlertTopic::Performance => "Performance reports",
            AlertTopic::Reports => "Daily reports",
        }
    }
}

/// Which alert topics the user subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertPreferences {
    pub anomaly: bool,
    pub maintenance: bool,
    pub weather: bool,
    pub performance: bool,
    pub reports: bool,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            anomaly: true,
            maintenance: true,
            weather: false,
            performance: true,
            reports: false,
        }
    }
}

impl AlertPreferences {
    fn slot(&mut self, topic: AlertTopic) -> &mut bool {
        match topic {
            AlertTopic::Anomaly => &mut self.anomaly,
            AlertTopic::Maintenance => &mut self.maintenance,
            AlertTopic::Weather => &mut self.weather,
            AlertTopic::Performance => &mut self.performance,
            AlertTopic::Reports => &mut self.reports,
        }
    }

    pub fn is_enabled(&self, topic: AlertTopic) -> bool {
        match topic {
            AlertTopic::Anomaly => self.anomaly,
            AlertTopic::Maintenance => self.maintenance,
            AlertTopic::Weather => self.weather,
            AlertTopic::Performance => self.performance,
            AlertTopic::Reports => self.reports,
        }
    }

    /// Flips a topic and returns its new value.
    pub fn toggle(&mut self, topic: AlertTopic) -> bool {
        let slot = self.slot(topic);
        *slot = !*slot;
        debug!(?topic, enabled = *slot, "alert preference toggled");
        *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (AlertTopic, bool)> + '_ {
        AlertTopic::ALL.into_iter().map(|t| (t, self.is_enabled(t)))
    }
}
