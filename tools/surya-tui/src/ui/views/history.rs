//! Efficiency trend and event log.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, List, ListItem, Paragraph},
    Frame,
};
use surya_core::history::{EventStatus, HistoryPeriod};
use surya_core::{HistoryLog, SystemType};

use crate::ui::widgets::panel;

fn status_color(status: EventStatus) -> Color {
    match status {
        EventStatus::Completed => Color::Green,
        EventStatus::Resolved => Color::Blue,
        EventStatus::Active => Color::LightRed,
        EventStatus::Predicted => Color::Yellow,
        EventStatus::Milestone => Color::Magenta,
    }
}

/// Render the history view.
pub fn render(frame: &mut Frame, area: Rect, log: &HistoryLog, system_type: SystemType) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Period selector + stats
            Constraint::Length(10), // Trend chart
            Constraint::Min(6),     // Events
        ])
        .split(area);

    render_header(frame, chunks[0], log, system_type);
    render_trend(frame, chunks[1], log);
    render_events(frame, chunks[2], log);
}

fn render_header(frame: &mut Frame, area: Rect, log: &HistoryLog, system_type: SystemType) {
    let stats = log.stats();

    let mut spans = vec![Span::raw(" ")];
    for period in HistoryPeriod::ALL {
        let style = if period == log.period() {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", period.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.extend([
        Span::raw("   Month total "),
        Span::styled(
            format!("{:.1} kWh", stats.month_total_kwh),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Avg efficiency "),
        Span::styled(
            format!("{:.1}%", stats.average_efficiency_percent),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Uptime "),
        Span::styled(
            format!("{:.1}%", stats.uptime_percent),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
    ]);

    let title = format!("History · {} [p]", system_type.label());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(panel(title)), area);
}

fn render_trend(frame: &mut Frame, area: Rect, log: &HistoryLog) {
    let bars: Vec<Bar> = log
        .trend()
        .iter()
        .map(|point| {
            let color = if point.efficiency_percent >= 120.0 {
                Color::Green
            } else if point.efficiency_percent >= 110.0 {
                Color::Cyan
            } else {
                Color::Yellow
            };
            // Day of month from YYYY-MM-DD
            let day = point.date.get(8..).unwrap_or(point.date);
            Bar::default()
                .value(point.efficiency_percent.round() as u64)
                .label(Line::from(day.to_string()))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Weekly Efficiency Trend (%)"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    frame.render_widget(chart, area);
}

fn render_events(frame: &mut Frame, area: Rect, log: &HistoryLog) {
    let items: Vec<ListItem> = log
        .events()
        .iter()
        .map(|event| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", event.kind.icon()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        event.title,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", event.status.label()),
                        Style::default().fg(status_color(event.status)),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(
                        format!("   {}  ", event.timestamp.format("%Y-%m-%d %H:%M")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(event.description),
                    Span::styled(format!("  ({})", event.impact), Style::default().fg(Color::Cyan)),
                ]),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(panel("Events")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_history_view() {
        let log = HistoryLog::new();
        let screen = render_to_string(120, 30, |f| render(f, f.area(), &log, SystemType::Private));
        assert!(screen.contains("892.5 kWh"));
        assert!(screen.contains("99.8%"));
        assert!(screen.contains("2024-01-07 14:30"));
        assert!(screen.contains("Routine solar panel maintenance"));
        assert!(screen.contains("[Milestone]"));
    }
}
