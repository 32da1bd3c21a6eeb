//! Production and consumption series for the energy usage view.

use serde::Serialize;

use crate::navigation::SystemType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyPeriod {
    #[default]
    Daily,
    Weekly,
}

impl EnergyPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            EnergyPeriod::Daily => "24 Hours",
            EnergyPeriod::Weekly => "7 Days",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            EnergyPeriod::Daily => EnergyPeriod::Weekly,
            EnergyPeriod::Weekly => EnergyPeriod::Daily,
        }
    }

    pub fn samples(&self) -> &'static [EnergySample] {
        match self {
            EnergyPeriod::Daily => DAILY_SAMPLES,
            EnergyPeriod::Weekly => WEEKLY_SAMPLES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySample {
    pub label: &'static str,
    pub production_kwh: f64,
    pub consumption_kwh: f64,
}

const fn sample(label: &'static str, production_kwh: f64, consumption_kwh: f64) -> EnergySample {
    EnergySample {
        label,
        production_kwh,
        consumption_kwh,
    }
}

pub const DAILY_SAMPLES: &[EnergySample] = &[
    sample("00:00", 0.0, 2.1),
    sample("06:00", 1.2, 3.5),
    sample("08:00", 4.8, 5.2),
    sample("10:00", 8.5, 6.8),
    sample("12:00", 12.3, 8.9),
    sample("14:00", 15.2, 12.4),
    sample("16:00", 11.8, 9.8),
    sample("18:00", 6.2, 11.5),
    sample("20:00", 0.8, 8.7),
    sample("22:00", 0.0, 4.2),
];

pub const WEEKLY_SAMPLES: &[EnergySample] = &[
    sample("Mon", 145.0, 123.0),
    sample("Tue", 156.0, 134.0),
    sample("Wed", 142.0, 128.0),
    sample("Thu", 158.0, 142.0),
    sample("Fri", 151.0, 138.0),
    sample("Sat", 139.0, 115.0),
    sample("Sun", 147.0, 119.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnergyBalance {
    Surplus,
    Deficit,
}

impl EnergyBalance {
    pub fn label(&self) -> &'static str {
        match self {
            EnergyBalance::Surplus => "Energy surplus",
            EnergyBalance::Deficit => "Energy deficit",
        }
    }
}

/// Totals over a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySummary {
    pub total_production_kwh: f64,
    pub total_consumption_kwh: f64,
}

impl EnergySummary {
    pub fn from_samples(samples: &[EnergySample]) -> Self {
        let (total_production_kwh, total_consumption_kwh) = samples
            .iter()
            .fold((0.0, 0.0), |(p, c), s| (p + s.production_kwh, c + s.consumption_kwh));
        Self {
            total_production_kwh,
            total_consumption_kwh,
        }
    }

    /// Production as a percentage of consumption. `None` with no consumption.
    pub fn efficiency_percent(&self) -> Option<f64> {
        if self.total_consumption_kwh <= 0.0 {
            return None;
        }
        Some(self.total_production_kwh / self.total_consumption_kwh * 100.0)
    }

    pub fn balance(&self) -> EnergyBalance {
        match self.efficiency_percent() {
            Some(pct) if pct > 100.0 => EnergyBalance::Surplus,
            Some(_) => EnergyBalance::Deficit,
            // Nothing consumed: any production is surplus.
            None if self.total_production_kwh > 0.0 => EnergyBalance::Surplus,
            None => EnergyBalance::Deficit,
        }
    }
}

/// Best-performance facts shown under the chart.
pub const BEST_PERFORMANCE: &[(&str, &str)] = &[
    ("Peak production hour", "14:00 (15.2 kWh)"),
    ("Most efficient day", "Thursday (111% efficiency)"),
    ("Average daily surplus", "+18.5 kWh"),
];

/// State of the energy usage view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyUsageState {
    period: EnergyPeriod,
}

impl EnergyUsageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> EnergyPeriod {
        self.period
    }

    pub fn toggle_period(&mut self) {
        self.period = self.period.toggle();
        tracing::debug!(period = self.period.label(), "energy period toggled");
    }

    pub fn samples(&self) -> &'static [EnergySample] {
        self.period.samples()
    }

    pub fn summary(&self) -> EnergySummary {
        EnergySummary::from_samples(self.samples())
    }

    pub fn title(&self, system_type: SystemType) -> String {
        format!("Energy Usage · {} · {}", system_type.label(), self.period.label())
    }
}
