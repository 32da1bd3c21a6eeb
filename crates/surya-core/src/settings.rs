//! User and system preferences for the settings view.
//!
//! The panel is a flat list of entries driven by a cursor. Activating an
//! entry either flips a local toggle or yields a [`NavAction`] for the
//! navigator to apply.

use serde::Serialize;
use tracing::debug;

use crate::navigation::NavAction;

pub const APP_VERSION: &str = "2.1.0";
pub const BUILD_LABEL: &str = "2024.01.15";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub location: String,
    pub timezone: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Admin SuryaOptiAI".to_string(),
            email: "admin@suryaoptiai.com".to_string(),
            location: "Jakarta, Indonesia".to_string(),
            timezone: "Asia/Jakarta".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemToggles {
    pub auto_optimization: bool,
    pub predictive_mode: bool,
    pub real_time_monitoring: bool,
    pub weather_integration: bool,
    pub energy_saving_mode: bool,
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self {
            auto_optimization: true,
            predictive_mode: true,
            real_time_monitoring: true,
            weather_integration: true,
            energy_saving_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataToggles {
    pub auto_backup: bool,
    pub cloud_sync: bool,
}

impl Default for DataToggles {
    fn default() -> Self {
        Self {
            auto_backup: true,
            cloud_sync: true,
        }
    }
}

/// Fixed connectivity rows as (service, status).
pub const CONNECTIVITY: &[(&str, &str)] = &[
    ("Azure Cloud", "Connected"),
    ("Weather API", "Active"),
    ("IoT Sensors", "12/12 Online"),
    ("Azure ML", "Operational"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsEntry {
    AutoOptimization,
    PredictiveMode,
    RealTimeMonitoring,
    WeatherIntegration,
    EnergySavingMode,
    AutoBackup,
    CloudSync,
    FactoryReset,
    ChangeSystemType,
}

impl SettingsEntry {
    pub const ALL: [SettingsEntry; 9] = [
        SettingsEntry::AutoOptimization,
        SettingsEntry::PredictiveMode,
        SettingsEntry::RealTimeMonitoring,
        SettingsEntry::WeatherIntegration,
        SettingsEntry::EnergySavingMode,
        SettingsEntry::AutoBackup,
        SettingsEntry::CloudSync,
        SettingsEntry::FactoryReset,
        SettingsEntry::ChangeSystemType,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsEntry::AutoOptimization => "Automatic optimization",
            SettingsEntry::PredictiveMode => "AI predictive mode",
            SettingsEntry::RealTimeMonitoring => "Real-time monitoring",
            SettingsEntry::WeatherIntegration => "Weather integration",
            SettingsEntry::EnergySavingMode => "Energy saving mode",
            SettingsEntry::AutoBackup => "Automatic backup",
            SettingsEntry::CloudSync => "Cloud sync",
            SettingsEntry::FactoryReset => "Reset to factory settings",
            SettingsEntry::ChangeSystemType => "Change system type",
        }
    }

    pub fn is_action(&self) -> bool {
        matches!(self, SettingsEntry::FactoryReset | SettingsEntry::ChangeSystemType)
    }
}

/// State of the settings view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPanel {
    pub profile: UserProfile,
    pub system: SystemToggles,
    pub data: DataToggles,
    cursor: usize,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &'static [SettingsEntry] {
        &SettingsEntry::ALL
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> SettingsEntry {
        SettingsEntry::ALL[self.cursor % SettingsEntry::ALL.len()]
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % SettingsEntry::ALL.len();
    }

    pub fn move_up(&mut self) {
        let len = SettingsEntry::ALL.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    /// Toggle state for an entry; `None` for action entries.
    pub fn value(&self, entry: SettingsEntry) -> Option<bool> {
        match entry {
            SettingsEntry::AutoOptimization => Some(self.system.auto_optimization),
            SettingsEntry::PredictiveMode => Some(self.system.predictive_mode),
            SettingsEntry::RealTimeMonitoring => Some(self.system.real_time_monitoring),
            SettingsEntry::WeatherIntegration => Some(self.system.weather_integration),
            SettingsEntry::EnergySavingMode => Some(self.system.energy_saving_mode),
            SettingsEntry::AutoBackup => Some(self.data.auto_backup),
            SettingsEntry::CloudSync => Some(self.data.cloud_sync),
            SettingsEntry::FactoryReset | SettingsEntry::ChangeSystemType => None,
        }
    }

    fn toggle_slot(&mut self, entry: SettingsEntry) -> Option<&mut bool> {
        match entry {
            SettingsEntry::AutoOptimization => Some(&mut self.system.auto_optimization),
            SettingsEntry::PredictiveMode => Some(&mut self.system.predictive_mode),
            SettingsEntry::RealTimeMonitoring => Some(&mut self.system.real_time_monitoring),
            SettingsEntry::WeatherIntegration => Some(&mut self.system.weather_integration),
            SettingsEntry::EnergySavingMode => Some(&mut self.system.energy_saving_mode),
            SettingsEntry::AutoBackup => Some(&mut self.data.auto_backup),
            SettingsEntry::CloudSync => Some(&mut self.data.cloud_sync),
            SettingsEntry::FactoryReset | SettingsEntry::ChangeSystemType => None,
        }
    }

    /// Restores profile and toggles to their defaults. The cursor stays.
    pub fn factory_reset(&mut self) {
        let cursor = self.cursor;
        *self = Self {
            cursor,
            ..Self::default()
        };
        debug!("settings restored to factory defaults");
    }

    /// Activates the entry under the cursor.
    pub fn activate(&mut self) -> Option<NavAction> {
        self.activate_entry(self.current())
    }

    pub fn activate_entry(&mut self, entry: SettingsEntry) -> Option<NavAction> {
        match entry {
            SettingsEntry::ChangeSystemType => Some(NavAction::ResetSystem),
            SettingsEntry::FactoryReset => {
                self.factory_reset();
                None
            }
            toggle => {
                if let Some(slot) = self.toggle_slot(toggle) {
                    *slot = !*slot;
                    debug!(entry = toggle.label(), enabled = *slot, "setting toggled");
                }
                None
            }
        }
    }
}
