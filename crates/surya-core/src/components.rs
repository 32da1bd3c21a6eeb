//! Component health models.
//!
//! Static readings for the hardware of each installation type, plus the
//! summary the component status view shows in its header.

use serde::Serialize;

use crate::navigation::SystemType;

/// Health classification of a component or of the whole system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Optimal,
    Good,
    Warning,
    Error,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Optimal => "Optimal",
            HealthStatus::Good => "Good",
            HealthStatus::Warning => "Attention",
            HealthStatus::Error => "Error",
        }
    }

    /// Optimal or good.
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Optimal | HealthStatus::Good)
    }
}

/// Kind of hardware being monitored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    SolarArray,
    Battery,
    Inverter,
    Distribution,
}

impl ComponentKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ComponentKind::SolarArray => "☀",
            ComponentKind::Battery => "▮",
            ComponentKind::Inverter | ComponentKind::Distribution => "ϟ",
        }
    }
}

/// One monitored component with its latest readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemComponent {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ComponentKind,
    pub status: HealthStatus,
    pub health_percent: u8,
    pub temperature_c: f64,
    pub voltage_v: f64,
    pub current_a: f64,
    pub details: &'static str,
}

/// Components installed for a system type.
pub fn components_for(system_type: SystemType) -> Vec<SystemComponent> {
    match system_type {
        SystemType::SharedGrid => vec![
            SystemComponent {
                id: "solar-panels",
                name: "Solar Panels",
                kind: ComponentKind::SolarArray,
                status: HealthStatus::Optimal,
                health_percent: 94,
                temperature_c: 38.0,
                voltage_v: 380.0,
                current_a: 12.5,
                details: "Arrays 1-5 operating normally",
            },
            SystemComponent {
                id: "battery-bank",
                name: "Battery Bank",
                kind: ComponentKind::Battery,
                status: HealthStatus::Good,
                health_percent: 87,
                temperature_c: 32.0,
                voltage_v: 48.2,
                current_a: 8.7,
                details: "5000 kWh capacity",
            },
            SystemComponent {
                id: "inverter-main",
                name: "Main Inverter",
                kind: ComponentKind::Inverter,
                status: HealthStatus::Optimal,
                health_percent: 96,
                temperature_c: 45.0,
                voltage_v: 220.0,
                current_a: 150.8,
                details: "3-phase AC output",
            },
            SystemComponent {
                id: "distribution-panel",
                name: "Distribution Panel",
                kind: ComponentKind::Distribution,
                status: HealthStatus::Warning,
                health_percent: 78,
                temperature_c: 42.0,
                voltage_v: 220.0,
                current_a: 125.4,
                details: "Load balancing active",
            },
        ],
        SystemType::Private => vec![
            SystemComponent {
                id: "roof-panels",
                name: "Roof Panels",
                kind: ComponentKind::SolarArray,
                status: HealthStatus::Optimal,
                health_percent: 92,
                temperature_c: 36.0,
                voltage_v: 24.0,
                current_a: 8.3,
                details: "12 monocrystalline panels",
            },
            SystemComponent {
                id: "home-battery",
                name: "Home Battery",
                kind: ComponentKind::Battery,
                status: HealthStatus::Optimal,
                health_percent: 89,
                temperature_c: 28.0,
                voltage_v: 12.8,
                current_a: 5.2,
                details: "10 kWh Li-ion",
            },
            SystemComponent {
                id: "home-inverter",
                name: "Inverter",
                kind: ComponentKind::Inverter,
                status: HealthStatus::Good,
                health_percent: 91,
                temperature_c: 41.0,
                voltage_v: 220.0,
                current_a: 15.7,
                details: "5 kW hybrid inverter",
            },
        ],
    }
}

/// Component list plus derived counts for one system type.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentReport {
    pub system_type: SystemType,
    pub components: Vec<SystemComponent>,
}

impl ComponentReport {
    pub fn for_system(system_type: SystemType) -> Self {
        Self {
            system_type,
            components: components_for(system_type),
        }
    }

    pub fn total(&self) -> usize {
        self.components.len()
    }

    pub fn optimal_count(&self) -> usize {
        self.components
            .iter()
            .filter(|c| c.status == HealthStatus::Optimal)
            .count()
    }

    /// Components in warning or error state.
    pub fn attention_needed(&self) -> Vec<&SystemComponent> {
        self.components
            .iter()
            .filter(|c| !c.status.is_healthy())
            .collect()
    }

    /// Anomaly-detection notes. One maintenance forecast per component that
    /// needs attention; a single all-clear line otherwise.
    pub fn anomaly_notes(&self) -> Vec<String> {
        let flagged = self.attention_needed();
        if flagged.is_empty() {
            return vec!["All components normal - no anomalies detected".to_string()];
        }
        flagged
            .iter()
            .flat_map(|c| {
                [
                    format!("Maintenance forecast: {} within 30 days", c.name),
                    format!(
                        "Temperature rising on {} ({:.0}°C) - keep monitoring",
                        c.name, c.temperature_c
                    ),
                ]
            })
            .collect()
    }
}
