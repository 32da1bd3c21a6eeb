//! Component health table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use surya_core::components::ComponentReport;
use surya_core::{HealthStatus, SystemType};

use crate::ui::format::progress_bar;
use crate::ui::widgets::panel;

fn status_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Optimal => Color::Green,
        HealthStatus::Good => Color::Cyan,
        HealthStatus::Warning => Color::Yellow,
        HealthStatus::Error => Color::Red,
    }
}

/// Render the component status view.
pub fn render(frame: &mut Frame, area: Rect, system_type: SystemType) {
    let report = ComponentReport::for_system(system_type);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary
            Constraint::Min(6),    // Table
            Constraint::Length(6), // Anomaly notes
        ])
        .split(area);

    render_summary(frame, chunks[0], &report);
    render_table(frame, chunks[1], &report);
    render_anomalies(frame, chunks[2], &report);
}

fn render_summary(frame: &mut Frame, area: Rect, report: &ComponentReport) {
    let attention = report.attention_needed().len();
    let line = Line::from(vec![
        Span::raw(" Optimal "),
        Span::styled(
            format!("{}/{}", report.optimal_count(), report.total()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Needs attention "),
        Span::styled(
            attention.to_string(),
            Style::default().fg(if attention > 0 { Color::Yellow } else { Color::Green }),
        ),
    ]);

    let title = format!("Component Status · {}", report.system_type.label());
    frame.render_widget(Paragraph::new(line).block(panel(title)), area);
}

fn render_table(frame: &mut Frame, area: Rect, report: &ComponentReport) {
    let header = Row::new(vec!["", "Component", "Status", "Health", "Temp", "Voltage", "Current"])
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = report
        .components
        .iter()
        .map(|c| {
            let color = status_color(c.status);
            Row::new(vec![
                Cell::from(c.kind.icon()),
                Cell::from(c.name),
                Cell::from(Span::styled(c.status.label(), Style::default().fg(color))),
                Cell::from(Span::styled(
                    format!("{} {}%", progress_bar(f64::from(c.health_percent), 8), c.health_percent),
                    Style::default().fg(color),
                )),
                Cell::from(format!("{:.0}°C", c.temperature_c)),
                Cell::from(format!("{:.1} V", c.voltage_v)),
                Cell::from(format!("{:.1} A", c.current_a)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(20),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths).header(header).block(panel("Components"));
    frame.render_widget(table, area);
}

fn render_anomalies(frame: &mut Frame, area: Rect, report: &ComponentReport) {
    let healthy = report.attention_needed().is_empty();
    let items: Vec<ListItem> = report
        .anomaly_notes()
        .into_iter()
        .map(|note| {
            let (glyph, color) = if healthy {
                ("✔", Color::Green)
            } else {
                ("⚠", Color::Yellow)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", glyph), Style::default().fg(color)),
                Span::raw(note),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(panel("AI Anomaly Detection")), area);
}
