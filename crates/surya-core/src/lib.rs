//! # Surya Core
//!
//! Domain model for the SuryaOptiAI solar monitoring console.
//!
//! ## Layout
//!
//! - [`navigation`]: system type, tabs and the [`Navigator`] that resolves
//!   which view is shown.
//! - [`dashboard`], [`energy`], [`components`], [`devices`], [`history`],
//!   [`notifications`], [`settings`], [`selector`]: the data and local state
//!   behind each view.
//!
//! Views never mutate the navigator directly. They hand back a [`NavAction`]
//! and the caller applies it with [`Navigator::apply`].

pub mod components;
pub mod dashboard;
pub mod devices;
pub mod energy;
pub mod errors;
pub mod history;
pub mod navigation;
pub mod notifications;
pub mod priority;
pub mod selector;
pub mod settings;

pub use components::{ComponentReport, HealthStatus};
pub use dashboard::DashboardSnapshot;
pub use devices::DeviceBoard;
pub use energy::{EnergyPeriod, EnergyUsageState};
pub use errors::{DeviceError, ParseError};
pub use history::HistoryLog;
pub use navigation::{
    header_subtitle, navigation_items, resolve_view, NavAction, NavigationItem, Navigator,
    SystemType, TabId, View,
};
pub use notifications::{AlertPreferences, Inbox};
pub use priority::Priority;
pub use selector::SystemSelector;
pub use settings::SettingsPanel;
