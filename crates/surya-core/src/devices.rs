//! Household device board.
//!
//! Holds the controllable loads of a private installation and applies the
//! switch, thermostat and dimmer controls the device view exposes.

use serde::Serialize;
use tracing::debug;

use crate::errors::DeviceError;
use crate::priority::Priority;

pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<u8> = 16..=30;
pub const BRIGHTNESS_RANGE: std::ops::RangeInclusive<u8> = 10..=100;
pub const BRIGHTNESS_STEP: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AcMode {
    Cool,
    Fan,
    Dry,
}

impl AcMode {
    pub fn label(&self) -> &'static str {
        match self {
            AcMode::Cool => "cool",
            AcMode::Fan => "fan",
            AcMode::Dry => "dry",
        }
    }
}

/// Kind-specific controls. Only air conditioners carry a thermostat and only
/// lights carry a dimmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DeviceKind {
    AirConditioner { temperature_c: u8, mode: AcMode },
    Light { brightness_percent: u8 },
    Appliance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub id: &'static str,
    pub name: &'static str,
    pub power_watts: u32,
    pub is_on: bool,
    pub controllable: bool,
    pub priority: Priority,
    pub kind: DeviceKind,
}

impl Device {
    /// Status line for the kind-specific control.
    pub fn control_summary(&self) -> Option<String> {
        match self.kind {
            DeviceKind::AirConditioner {
                temperature_c,
                mode,
            } => Some(format!("{}°C {}", temperature_c, mode.label())),
            DeviceKind::Light { brightness_percent } => Some(format!("{}%", brightness_percent)),
            DeviceKind::Appliance => None,
        }
    }
}

fn seeded_devices() -> Vec<Device> {
    vec![
        Device {
            id: "ac-living",
            name: "Living Room AC",
            power_watts: 1200,
            is_on: true,
            controllable: true,
            priority: Priority::High,
            kind: DeviceKind::AirConditioner {
                temperature_c: 24,
                mode: AcMode::Cool,
            },
        },
        Device {
            id: "tv-main",
            name: "Main TV",
            power_watts: 150,
            is_on: false,
            controllable: true,
            priority: Priority::Medium,
            kind: DeviceKind::Appliance,
        },
        Device {
            id: "lights",
            name: "House Lights",
            power_watts: 200,
            is_on: true,
            controllable: true,
            priority: Priority::High,
            kind: DeviceKind::Light {
                brightness_percent: 80,
            },
        },
        Device {
            id: "refrigerator",
            name: "Refrigerator",
            power_watts: 300,
            is_on: true,
            controllable: false,
            priority: Priority::Critical,
            kind: DeviceKind::Appliance,
        },
        Device {
            id: "washing-machine",
            name: "Washing Machine",
            power_watts: 800,
            is_on: false,
            controllable: true,
            priority: Priority::Low,
            kind: DeviceKind::Appliance,
        },
        Device {
            id: "coffee-maker",
            name: "Coffee Maker",
            power_watts: 1000,
            is_on: false,
            controllable: true,
            priority: Priority::Low,
            kind: DeviceKind::Appliance,
        },
    ]
}

fn snap_brightness(pct: i32) -> u8 {
    let min = i32::from(*BRIGHTNESS_RANGE.start());
    let max = i32::from(*BRIGHTNESS_RANGE.end());
    let step = i32::from(BRIGHTNESS_STEP);
    let snapped = (pct.clamp(min, max) + step / 2) / step * step;
    snapped.clamp(min, max) as u8
}

fn clamp_temperature(c: i32) -> u8 {
    c.clamp(
        i32::from(*TEMPERATURE_RANGE.start()),
        i32::from(*TEMPERATURE_RANGE.end()),
    ) as u8
}

/// Device list with a highlighted row.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceBoard {
    devices: Vec<Device>,
    selected: usize,
}

impl Default for DeviceBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBoard {
    pub fn new() -> Self {
        Self {
            devices: seeded_devices(),
            selected: 0,
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Device> {
        self.devices.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.devices.is_empty() {
            self.selected = (self.selected + 1) % self.devices.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.devices.is_empty() {
            self.selected = (self.selected + self.devices.len() - 1) % self.devices.len();
        }
    }

    fn device_mut(&mut self, id: &str) -> Result<&mut Device, DeviceError> {
        self.devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| DeviceError::UnknownDevice(id.to_string()))
    }

    /// Device that accepts kind-specific adjustments right now.
    fn adjustable_mut(&mut self, id: &str) -> Result<&mut Device, DeviceError> {
        let device = self.device_mut(id)?;
        if !device.controllable {
            return Err(DeviceError::NotControllable(id.to_string()));
        }
        if !device.is_on {
            return Err(DeviceError::PoweredOff(id.to_string()));
        }
        Ok(device)
    }

    /// Flips the power switch. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, DeviceError> {
        let device = self.device_mut(id)?;
        if !device.controllable {
            return Err(DeviceError::NotControllable(id.to_string()));
        }
        device.is_on = !device.is_on;
        debug!(device = id, on = device.is_on, "device toggled");
        Ok(device.is_on)
    }

    /// Sets the thermostat, clamped to [`TEMPERATURE_RANGE`].
    pub fn set_temperature(&mut self, id: &str, celsius: i32) -> Result<u8, DeviceError> {
        let device = self.adjustable_mut(id)?;
        match &mut device.kind {
            DeviceKind::AirConditioner { temperature_c, .. } => {
                *temperature_c = clamp_temperature(celsius);
                debug!(device = id, temperature_c = *temperature_c, "temperature set");
                Ok(*temperature_c)
            }
            _ => Err(DeviceError::UnsupportedControl {
                id: id.to_string(),
                control: "temperature",
            }),
        }
    }

    pub fn adjust_temperature(&mut self, id: &str, delta: i32) -> Result<u8, DeviceError> {
        let current = match self.get(id).map(|d| d.kind) {
            Some(DeviceKind::AirConditioner { temperature_c, .. }) => i32::from(temperature_c),
            // Let set_temperature report the precise error.
            _ => 0,
        };
        self.set_temperature(id, current + delta)
    }

    /// Sets the dimmer, clamped to [`BRIGHTNESS_RANGE`] and snapped to
    /// [`BRIGHTNESS_STEP`].
    pub fn set_brightness(&mut self, id: &str, percent: i32) -> Result<u8, DeviceError> {
        let device = self.adjustable_mut(id)?;
        match &mut device.kind {
            DeviceKind::Light { brightness_percent } => {
                *brightness_percent = snap_brightness(percent);
                debug!(device = id, brightness_percent = *brightness_percent, "brightness set");
                Ok(*brightness_percent)
            }
            _ => Err(DeviceError::UnsupportedControl {
                id: id.to_string(),
                control: "brightness",
            }),
        }
    }

    pub fn adjust_brightness(&mut self, id: &str, delta: i32) -> Result<u8, DeviceError> {
        let current = match self.get(id).map(|d| d.kind) {
            Some(DeviceKind::Light { brightness_percent }) => i32::from(brightness_percent),
            _ => 0,
        };
        self.set_brightness(id, current + delta)
    }

    /// Applies a +/- step to whatever control the selected device has.
    pub fn adjust_selected(&mut self, up: bool) -> Result<u8, DeviceError> {
        let Some(device) = self.selected() else {
            return Err(DeviceError::UnknownDevice(String::new()));
        };
        let (id, kind) = (device.id, device.kind);
        match kind {
            DeviceKind::AirConditioner { .. } => {
                self.adjust_temperature(id, if up { 1 } else { -1 })
            }
            DeviceKind::Light { .. } => {
                let step = i32::from(BRIGHTNESS_STEP);
                self.adjust_brightness(id, if up { step } else { -step })
            }
            DeviceKind::Appliance => Err(DeviceError::UnsupportedControl {
                id: id.to_string(),
                control: "level",
            }),
        }
    }

    pub fn toggle_selected(&mut self) -> Result<bool, DeviceError> {
        let id = self.selected().map(|d| d.id).unwrap_or_default();
        self.toggle(id)
    }

    pub fn active_count(&self) -> usize {
        self.devices.iter().filter(|d| d.is_on).count()
    }

    pub fn total_power_watts(&self) -> u32 {
        self.devices
            .iter()
            .filter(|d| d.is_on)
            .map(|d| d.power_watts)
            .sum()
    }

    fn sheddable(&self) -> impl Iterator<Item = &Device> {
        self.devices
            .iter()
            .filter(|d| d.is_on && d.controllable && d.priority.is_sheddable())
    }

    /// Power freed by switching off every running low-priority load.
    pub fn potential_savings_watts(&self) -> u32 {
        self.sheddable().map(|d| d.power_watts).sum()
    }

    pub fn recommendations(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let shed: Vec<&str> = self.sheddable().map(|d| d.name).collect();
        if !shed.is_empty() {
            lines.push(format!(
                "Switch off {} to save {}W",
                shed.join(" and "),
                self.potential_savings_watts()
            ));
        }

        let cool_ac = self.devices.iter().any(|d| {
            d.is_on
                && matches!(d.kind, DeviceKind::AirConditioner { temperature_c, .. } if temperature_c < 26)
        });
        if cool_ac {
            lines.push("Raise the AC to 26°C while solar production is low (night)".to_string());
        }

        lines.push("Schedule the washing machine at 12:00 when solar output peaks".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_board() {
        let board = DeviceBoard::new();
        assert_eq!(board.devices().len(), 6);
        assert_eq!(board.active_count(), 3);
        assert_eq!(board.total_power_watts(), 1700);
        assert_eq!(board.potential_savings_watts(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut board = DeviceBoard::new();
        assert_eq!(board.toggle("tv-main"), Ok(true));
        assert_eq!(board.total_power_watts(), 1850);
        assert_eq!(board.potential_savings_watts(), 150);

        assert_eq!(
            board.toggle("refrigerator"),
            Err(DeviceError::NotControllable("refrigerator".into()))
        );
        assert_eq!(
            board.toggle("toaster"),
            Err(DeviceError::UnknownDevice("toaster".into()))
        );
    }

    #[test]
    fn test_temperature_is_clamped() {
        let mut board = DeviceBoard::new();
        assert_eq!(board.set_temperature("ac-living", 40), Ok(30));
        assert_eq!(board.set_temperature("ac-living", 3), Ok(16));
        assert_eq!(board.adjust_temperature("ac-living", -1), Ok(16));
        assert_eq!(board.adjust_temperature("ac-living", 2), Ok(18));
        assert_eq!(
            board.set_temperature("lights", 20),
            Err(DeviceError::UnsupportedControl {
                id: "lights".into(),
                control: "temperature"
            })
        );
    }

    #[test]
    fn test_brightness_snaps_to_steps() {
        let mut board = DeviceBoard::new();
        assert_eq!(board.set_brightness("lights", 47), Ok(50));
        assert_eq!(board.set_brightness("lights", 0), Ok(10));
        assert_eq!(board.set_brightness("lights", 250), Ok(100));
        assert_eq!(board.adjust_brightness("lights", 10), Ok(100));
        assert_eq!(board.adjust_brightness("lights", -30), Ok(70));
    }

    #[test]
    fn test_controls_require_power() {
        let mut board = DeviceBoard::new();
        board.toggle("ac-living").unwrap();
        assert_eq!(
            board.set_temperature("ac-living", 20),
            Err(DeviceError::PoweredOff("ac-living".into()))
        );
    }

    #[test]
    fn test_selection_wraps_and_adjusts() {
        let mut board = DeviceBoard::new();
        board.select_previous();
        assert_eq!(board.selected().map(|d| d.id), Some("coffee-maker"));
        board.select_next();
        assert_eq!(board.selected().map(|d| d.id), Some("ac-living"));
        assert_eq!(board.adjust_selected(true), Ok(25));
        board.select_next();
        assert!(board.adjust_selected(true).is_err());
    }

    #[test]
    fn test_recommendations() {
        let mut board = DeviceBoard::new();
        assert_eq!(board.recommendations().len(), 2);

        board.toggle("tv-main").unwrap();
        board.toggle("coffee-maker").unwrap();
        let recs = board.recommendations();
        assert_eq!(recs[0], "Switch off Main TV and Coffee Maker to save 1150W");
    }
}
