//! Historical trends and the event log.

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl HistoryPeriod {
    pub const ALL: [HistoryPeriod; 3] = [HistoryPeriod::Week, HistoryPeriod::Month, HistoryPeriod::Year];

    pub fn label(&self) -> &'static str {
        match self {
            HistoryPeriod::Week => "Week",
            HistoryPeriod::Month => "Month",
            HistoryPeriod::Year => "Year",
        }
    }

    pub fn next(self) -> Self {
        match self {
            HistoryPeriod::Week => HistoryPeriod::Month,
            HistoryPeriod::Month => HistoryPeriod::Year,
            HistoryPeriod::Year => HistoryPeriod::Week,
        }
    }
}

/// One day of the efficiency trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: &'static str,
    pub production_kwh: f64,
    pub consumption_kwh: f64,
    pub efficiency_percent: f64,
}

const fn point(date: &'static str, production_kwh: f64, consumption_kwh: f64, efficiency_percent: f64) -> TrendPoint {
    TrendPoint {
        date,
        production_kwh,
        consumption_kwh,
        efficiency_percent,
    }
}

pub const WEEKLY_TREND: &[TrendPoint] = &[
    point("2024-01-01", 145.0, 123.0, 118.0),
    point("2024-01-02", 156.0, 134.0, 116.0),
    point("2024-01-03", 142.0, 128.0, 111.0),
    point("2024-01-04", 158.0, 142.0, 111.0),
    point("2024-01-05", 151.0, 138.0, 109.0),
    point("2024-01-06", 139.0, 115.0, 121.0),
    point("2024-01-07", 147.0, 119.0, 124.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryStats {
    pub month_total_kwh: f64,
    pub average_efficiency_percent: f64,
    pub uptime_percent: f64,
}

pub const HISTORY_STATS: HistoryStats = HistoryStats {
    month_total_kwh: 892.5,
    average_efficiency_percent: 94.2,
    uptime_percent: 99.8,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Maintenance,
    Anomaly,
    Optimization,
    Weather,
    Performance,
}

impl EventKind {
    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Maintenance => "ϟ",
            EventKind::Anomaly => "⚠",
            EventKind::Optimization => "↗",
            EventKind::Weather => "☁",
            EventKind::Performance => "★",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Completed,
    Resolved,
    Active,
    Predicted,
    Milestone,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Completed => "Completed",
            EventStatus::Resolved => "Resolved",
            EventStatus::Active => "Active",
            EventStatus::Predicted => "Predicted",
            EventStatus::Milestone => "Milestone",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEvent {
    pub id: u32,
    pub timestamp: NaiveDateTime,
    pub kind: EventKind,
    pub title: &'static str,
    pub description: &'static str,
    pub status: EventStatus,
    pub impact: &'static str,
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

type EventRow = (
    u32,
    &'static str,
    EventKind,
    &'static str,
    &'static str,
    EventStatus,
    &'static str,
);

const EVENT_ROWS: &[EventRow] = &[
    (
        1,
        "2024-01-07 14:30",
        EventKind::Maintenance,
        "Routine solar panel maintenance",
        "Cleaning and inspection of panel arrays 1-3",
        EventStatus::Completed,
        "Efficiency +3%",
    ),
    (
        2,
        "2024-01-06 09:15",
        EventKind::Anomaly,
        "Anomaly detected - inverter",
        "Output fluctuation detected on the main inverter",
        EventStatus::Resolved,
        "15 min downtime",
    ),
    (
        3,
        "2024-01-05 16:45",
        EventKind::Optimization,
        "Load balancing optimization",
        "Load distribution adjusted automatically",
        EventStatus::Active,
        "Efficiency +5%",
    ),
    (
        4,
        "2024-01-04 11:20",
        EventKind::Weather,
        "Cloudy weather forecast",
        "Production drop predicted due to weather",
        EventStatus::Predicted,
        "Production -12%",
    ),
    (
        5,
        "2024-01-03 08:30",
        EventKind::Performance,
        "Daily production record",
        "Highest production this month",
        EventStatus::Milestone,
        "158 kWh",
    ),
];

fn seeded_events() -> Vec<HistoryEvent> {
    let mut events: Vec<HistoryEvent> = EVENT_ROWS
        .iter()
        .filter_map(|&(id, when, kind, title, description, status, impact)| {
            let timestamp = NaiveDateTime::parse_from_str(when, TIMESTAMP_FORMAT).ok()?;
            Some(HistoryEvent {
                id,
                timestamp,
                kind,
                title,
                description,
                status,
                impact,
            })
        })
        .collect();
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events
}

/// State of the history view.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog {
    period: HistoryPeriod,
    events: Vec<HistoryEvent>,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            period: HistoryPeriod::default(),
            events: seeded_events(),
        }
    }

    pub fn period(&self) -> HistoryPeriod {
        self.period
    }

    pub fn cycle_period(&mut self) {
        self.period = self.period.next();
        tracing::debug!(period = self.period.label(), "history period changed");
    }

    /// Newest first.
    pub fn events(&self) -> &[HistoryEvent] {
        &self.events
    }

    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &HistoryEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    pub fn stats(&self) -> HistoryStats {
        HISTORY_STATS
    }

    pub fn trend(&self) -> &'static [TrendPoint] {
        WEEKLY_TREND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_newest_first() {
        let log = HistoryLog::new();
        let ids: Vec<u32> = log.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(log
            .events()
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_events_of_kind() {
        let log = HistoryLog::new();
        let anomalies: Vec<_> = log.events_of(EventKind::Anomaly).collect();
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].status, EventStatus::Resolved);
    }

    #[test]
    fn test_period_cycle() {
        let mut log = HistoryLog::new();
        assert_eq!(log.period(), HistoryPeriod::Month);
        log.cycle_period();
        assert_eq!(log.period(), HistoryPeriod::Year);
        log.cycle_period();
        assert_eq!(log.period(), HistoryPeriod::Week);
    }

    #[test]
    fn test_trend_and_stats() {
        let log = HistoryLog::new();
        assert_eq!(log.trend().len(), 7);
        assert_eq!(log.stats().month_total_kwh, 892.5);
    }
}
