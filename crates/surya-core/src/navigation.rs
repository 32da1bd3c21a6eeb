//! Navigation controller.
//!
//! The shell keeps exactly two pieces of session state: the selected system
//! type and the active tab. Everything else the UI shows is derived:
//!
//! ```text
//!  (system_type, active_tab) ──resolve_view──────▶ View
//!   system_type              ──navigation_items──▶ [NavigationItem]
//! ```
//!
//! `Navigator` is the only owner of that state and its three mutators
//! (`select_system`, `set_active_tab`, `reset_system`) are the only way to
//! change it. Views ask for changes by returning a [`NavAction`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::ParseError;

// =============================================================================
// SYSTEM TYPE
// =============================================================================

/// Deployment mode of the monitored installation.
///
/// "Unselected" is not a variant; it is `Option::<SystemType>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemType {
    /// Community or commercial microgrid feeding several facilities.
    SharedGrid,
    /// Single household installation with controllable appliances.
    Private,
}

impl SystemType {
    /// All system types in selector order.
    pub const ALL: [SystemType; 2] = [SystemType::SharedGrid, SystemType::Private];

    /// Canonical identifier.
    pub fn id(&self) -> &'static str {
        match self {
            SystemType::SharedGrid => "shared-grid",
            SystemType::Private => "private",
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            SystemType::SharedGrid => "Shared Microgrid",
            SystemType::Private => "Private PV",
        }
    }

    /// One-line description shown on the selector card.
    pub fn description(&self) -> &'static str {
        match self {
            SystemType::SharedGrid => {
                "Solar plant for a community or commercial area, distributing to multiple facilities"
            }
            SystemType::Private => {
                "Rooftop panels for a standalone household with automatic appliance control"
            }
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SystemType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared-grid" | "shared" | "microgrid" | "mikrogrid" => Ok(SystemType::SharedGrid),
            "private" | "home" | "pribadi" => Ok(SystemType::Private),
            _ => Err(ParseError::UnknownSystemType(s.to_string())),
        }
    }
}

// =============================================================================
// TAB ID
// =============================================================================

/// Content section selectable from the bottom navigation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    #[default]
    Dashboard,
    Energy,
    Components,
    /// Only offered for [`SystemType::Private`].
    Devices,
    History,
    Notifications,
    Settings,
}

impl TabId {
    /// All tabs in navigation order.
    pub const ALL: [TabId; 7] = [
        TabId::Dashboard,
        TabId::Energy,
        TabId::Components,
        TabId::Devices,
        TabId::History,
        TabId::Notifications,
        TabId::Settings,
    ];

    /// Canonical identifier.
    pub fn id(&self) -> &'static str {
        match self {
            TabId::Dashboard => "dashboard",
            TabId::Energy => "energy",
            TabId::Components => "components",
            TabId::Devices => "devices",
            TabId::History => "history",
            TabId::Notifications => "notifications",
            TabId::Settings => "settings",
        }
    }

    /// Label shown under the navigation button.
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Dashboard => "Dashboard",
            TabId::Energy => "Energy",
            TabId::Components => "Components",
            TabId::Devices => "Devices",
            TabId::History => "History",
            TabId::Notifications => "Alerts",
            TabId::Settings => "Settings",
        }
    }

    /// Icon glyph for the navigation button.
    pub fn icon(&self) -> &'static str {
        match self {
            TabId::Dashboard => "⌂",
            TabId::Energy => "≋",
            TabId::Components => "◈",
            TabId::Devices => "⏻",
            TabId::History => "◷",
            TabId::Notifications => "⚑",
            TabId::Settings => "⚙",
        }
    }

    /// Whether this tab is offered for the given system type.
    pub fn is_offered_for(&self, system_type: Option<SystemType>) -> bool {
        *self != TabId::Devices || system_type == Some(SystemType::Private)
    }

    /// Parse an identifier, mapping anything unrecognised to the dashboard.
    pub fn parse_or_default(s: &str) -> TabId {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TabId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TabId::ALL
            .into_iter()
            .find(|tab| tab.id() == wanted)
            .ok_or_else(|| ParseError::UnknownTab(s.to_string()))
    }
}

// =============================================================================
// DERIVED VALUES
// =============================================================================

/// A tab-selection affordance derived from the system type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub id: TabId,
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<TabId> for NavigationItem {
    fn from(id: TabId) -> Self {
        Self {
            id,
            label: id.label(),
            icon: id.icon(),
        }
    }
}

/// The view to render for a given navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "system", rename_all = "kebab-case")]
pub enum View {
    SystemSelector,
    Dashboard(SystemType),
    EnergyUsage(SystemType),
    ComponentStatus(SystemType),
    DeviceControl,
    History(SystemType),
    Notifications,
    Settings,
}

/// State change requested by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    SelectSystem(SystemType),
    SetActiveTab(TabId),
    ResetSystem,
}

/// Resolve the rendered view. Total over every `(system_type, tab)` pair.
pub fn resolve_view(system_type: Option<SystemType>, tab: TabId) -> View {
    let Some(system) = system_type else {
        return View::SystemSelector;
    };

    match (tab, system) {
        (TabId::Dashboard, _) => View::Dashboard(system),
        (TabId::Energy, _) => View::EnergyUsage(system),
        (TabId::Components, _) => View::ComponentStatus(system),
        (TabId::Devices, SystemType::Private) => View::DeviceControl,
        // Stale tab from a previous private session.
        (TabId::Devices, SystemType::SharedGrid) => View::Dashboard(system),
        (TabId::History, _) => View::History(system),
        (TabId::Notifications, _) => View::Notifications,
        (TabId::Settings, _) => View::Settings,
    }
}

/// Navigation items offered for a system type, in display order.
pub fn navigation_items(system_type: Option<SystemType>) -> Vec<NavigationItem> {
    TabId::ALL
        .into_iter()
        .filter(|tab| tab.is_offered_for(system_type))
        .map(NavigationItem::from)
        .collect()
}

/// Subtitle shown under the application title.
pub fn header_subtitle(system_type: Option<SystemType>) -> &'static str {
    match system_type {
        Some(system) => system.label(),
        None => "Smart Solar Monitoring",
    }
}

// =============================================================================
// NAVIGATOR
// =============================================================================

/// Owner of the navigation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    system_type: Option<SystemType>,
    active_tab: TabId,
}

impl Navigator {
    /// Start state: no system selected, dashboard tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit state (CLI preselection, tests).
    pub fn with_state(system_type: Option<SystemType>, active_tab: TabId) -> Self {
        Self {
            system_type,
            active_tab,
        }
    }

    pub fn system_type(&self) -> Option<SystemType> {
        self.system_type
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// Select (or switch) the system type. The active tab is kept.
    pub fn select_system(&mut self, system_type: SystemType) {
        info!(
            from = ?self.system_type,
            to = %system_type,
            tab = %self.active_tab,
            "system type selected"
        );
        if !self.active_tab.is_offered_for(Some(system_type)) {
            debug!(
                tab = %self.active_tab,
                system = %system_type,
                "active tab not offered for this system; dashboard will be shown"
            );
        }
        self.system_type = Some(system_type);
    }

    /// Switch tab. Returns `false` when the request was ignored because the
    /// devices tab is not offered for the current system type.
    pub fn set_active_tab(&mut self, tab: TabId) -> bool {
        if !tab.is_offered_for(self.system_type) {
            debug!(system = ?self.system_type, tab = %tab, "tab not offered; ignoring");
            return false;
        }
        if tab != self.active_tab {
            debug!(from = %self.active_tab, to = %tab, "active tab changed");
        }
        self.active_tab = tab;
        true
    }

    /// Return to the system selector. Idempotent; the active tab is kept.
    pub fn reset_system(&mut self) {
        if self.system_type.take().is_some() {
            info!(tab = %self.active_tab, "system type reset");
        }
    }

    /// Apply an action emitted by a view.
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::SelectSystem(system_type) => self.select_system(system_type),
            NavAction::SetActiveTab(tab) => {
                self.set_active_tab(tab);
            }
            NavAction::ResetSystem => self.reset_system(),
        }
    }

    pub fn navigation_items(&self) -> Vec<NavigationItem> {
        navigation_items(self.system_type)
    }

    pub fn view(&self) -> View {
        let view = resolve_view(self.system_type, self.active_tab);
        if self.active_tab == TabId::Devices && view != View::DeviceControl && self.system_type.is_some() {
            debug!(system = ?self.system_type, "devices tab not offered; rendering dashboard");
        }
        view
    }

    /// Move to the next (or previous) offered tab, wrapping around.
    ///
    /// A stale tab that is not offered restarts the cycle from the first item.
    /// Does nothing while no system is selected.
    pub fn cycle_tab(&mut self, forward: bool) -> bool {
        if self.system_type.is_none() {
            return false;
        }
        let items = self.navigation_items();
        let len = items.len();
        let next = match items.iter().position(|item| item.id == self.active_tab) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.set_active_tab(items[next].id)
    }

    /// Select the n-th offered navigation item (0-based).
    pub fn select_nav_index(&mut self, index: usize) -> bool {
        if self.system_type.is_none() {
            return false;
        }
        match self.navigation_items().get(index) {
            Some(item) => self.set_active_tab(item.id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[NavigationItem]) -> Vec<TabId> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_start_state() {
        let nav = Navigator::new();
        assert_eq!(nav.system_type(), None);
        assert_eq!(nav.active_tab(), TabId::Dashboard);
        assert_eq!(nav.view(), View::SystemSelector);
    }

    #[test]
    fn test_unselected_always_resolves_to_selector() {
        for tab in TabId::ALL {
            assert_eq!(resolve_view(None, tab), View::SystemSelector);
        }
    }

    #[test]
    fn test_devices_tab_resolution() {
        assert_eq!(
            resolve_view(Some(SystemType::Private), TabId::Devices),
            View::DeviceControl
        );
        assert_eq!(
            resolve_view(Some(SystemType::SharedGrid), TabId::Devices),
            View::Dashboard(SystemType::SharedGrid)
        );
    }

    #[test]
    fn test_resolution_is_parameterised_by_system() {
        for system in SystemType::ALL {
            let s = Some(system);
            assert_eq!(resolve_view(s, TabId::Dashboard), View::Dashboard(system));
            assert_eq!(resolve_view(s, TabId::Energy), View::EnergyUsage(system));
            assert_eq!(resolve_view(s, TabId::Components), View::ComponentStatus(system));
            assert_eq!(resolve_view(s, TabId::History), View::History(system));
            assert_eq!(resolve_view(s, TabId::Notifications), View::Notifications);
            assert_eq!(resolve_view(s, TabId::Settings), View::Settings);
        }
    }

    #[test]
    fn test_reset_always_yields_selector() {
        for tab in [TabId::Settings, TabId::History, TabId::Devices] {
            let mut nav = Navigator::with_state(Some(SystemType::Private), tab);
            nav.reset_system();
            assert_eq!(nav.view(), View::SystemSelector);
            assert_eq!(nav.active_tab(), tab);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut nav = Navigator::with_state(Some(SystemType::SharedGrid), TabId::Energy);
        nav.reset_system();
        let once = nav.clone();
        nav.reset_system();
        assert_eq!(nav, once);
    }

    #[test]
    fn test_switching_system_keeps_tab() {
        let mut nav = Navigator::new();
        nav.select_system(SystemType::SharedGrid);
        assert!(nav.set_active_tab(TabId::History));
        nav.select_system(SystemType::Private);
        assert_eq!(nav.active_tab(), TabId::History);
        assert_eq!(nav.view(), View::History(SystemType::Private));
    }

    #[test]
    fn test_devices_request_ignored_outside_private() {
        let mut nav = Navigator::with_state(Some(SystemType::SharedGrid), TabId::Energy);
        assert!(!nav.set_active_tab(TabId::Devices));
        assert_eq!(nav.active_tab(), TabId::Energy);

        let mut unselected = Navigator::new();
        assert!(!unselected.set_active_tab(TabId::Devices));
        assert_eq!(unselected.active_tab(), TabId::Dashboard);
    }

    #[test]
    fn test_devices_nav_item_only_for_private() {
        let private = navigation_items(Some(SystemType::Private));
        assert_eq!(private.iter().filter(|i| i.id == TabId::Devices).count(), 1);
        assert!(!ids(&navigation_items(Some(SystemType::SharedGrid))).contains(&TabId::Devices));
        assert!(!ids(&navigation_items(None)).contains(&TabId::Devices));
    }

    #[test]
    fn test_navigation_order() {
        assert_eq!(ids(&navigation_items(Some(SystemType::Private))), TabId::ALL.to_vec());
        assert_eq!(
            ids(&navigation_items(Some(SystemType::SharedGrid))),
            vec![
                TabId::Dashboard,
                TabId::Energy,
                TabId::Components,
                TabId::History,
                TabId::Notifications,
                TabId::Settings,
            ]
        );
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut nav = Navigator::new();

        nav.apply(NavAction::SelectSystem(SystemType::Private));
        assert_eq!(nav.system_type(), Some(SystemType::Private));
        assert_eq!(nav.active_tab(), TabId::Dashboard);
        assert_eq!(nav.view(), View::Dashboard(SystemType::Private));
        assert_eq!(ids(&nav.navigation_items()), TabId::ALL.to_vec());

        nav.apply(NavAction::SetActiveTab(TabId::Devices));
        assert_eq!(nav.view(), View::DeviceControl);

        nav.apply(NavAction::SelectSystem(SystemType::SharedGrid));
        assert_eq!(nav.active_tab(), TabId::Devices);
        assert_eq!(nav.view(), View::Dashboard(SystemType::SharedGrid));
        assert_eq!(nav.navigation_items().len(), 6);

        nav.apply(NavAction::ResetSystem);
        assert_eq!(nav.view(), View::SystemSelector);
    }

    #[test]
    fn test_cycle_tab_wraps_and_skips_devices() {
        let mut nav = Navigator::with_state(Some(SystemType::SharedGrid), TabId::Components);
        nav.cycle_tab(true);
        assert_eq!(nav.active_tab(), TabId::History);

        let mut nav = Navigator::with_state(Some(SystemType::SharedGrid), TabId::Dashboard);
        nav.cycle_tab(false);
        assert_eq!(nav.active_tab(), TabId::Settings);
    }

    #[test]
    fn test_cycle_from_stale_tab_restarts() {
        let mut nav = Navigator::with_state(Some(SystemType::SharedGrid), TabId::Devices);
        assert!(nav.cycle_tab(true));
        assert_eq!(nav.active_tab(), TabId::Dashboard);
    }

    #[test]
    fn test_select_nav_index_follows_derived_items() {
        let mut private = Navigator::with_state(Some(SystemType::Private), TabId::Dashboard);
        assert!(private.select_nav_index(3));
        assert_eq!(private.active_tab(), TabId::Devices);

        let mut shared = Navigator::with_state(Some(SystemType::SharedGrid), TabId::Dashboard);
        assert!(shared.select_nav_index(3));
        assert_eq!(shared.active_tab(), TabId::History);
        assert!(!shared.select_nav_index(6));

        let mut unselected = Navigator::new();
        assert!(!unselected.select_nav_index(1));
        assert_eq!(unselected.active_tab(), TabId::Dashboard);
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("shared-grid".parse::<SystemType>(), Ok(SystemType::SharedGrid));
        assert_eq!("Pribadi".parse::<SystemType>(), Ok(SystemType::Private));
        assert!("hybrid".parse::<SystemType>().is_err());

        assert_eq!("notifications".parse::<TabId>(), Ok(TabId::Notifications));
        assert_eq!(
            "wallet".parse::<TabId>(),
            Err(ParseError::UnknownTab("wallet".to_string()))
        );
        assert_eq!(TabId::parse_or_default("wallet"), TabId::Dashboard);
        assert_eq!(TabId::parse_or_default("HISTORY"), TabId::History);
    }

    #[test]
    fn test_header_subtitle() {
        assert_eq!(header_subtitle(None), "Smart Solar Monitoring");
        assert_eq!(header_subtitle(Some(SystemType::SharedGrid)), "Shared Microgrid");
        assert_eq!(header_subtitle(Some(SystemType::Private)), "Private PV");
    }

    #[test]
    fn test_view_serialization() {
        let json = serde_json::to_value(View::History(SystemType::SharedGrid)).unwrap();
        assert_eq!(json, serde_json::json!({ "view": "history", "system": "shared-grid" }));
        let json = serde_json::to_value(View::SystemSelector).unwrap();
        assert_eq!(json, serde_json::json!({ "view": "system-selector" }));
    }
}
