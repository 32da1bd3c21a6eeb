//! Dashboard summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph},
    Frame,
};
use surya_core::dashboard::{DashboardExtra, DashboardSnapshot};
use surya_core::SystemType;

use crate::ui::format::{format_idr, format_number};
use crate::ui::widgets::panel;

/// Render the dashboard for a system type.
pub fn render(frame: &mut Frame, area: Rect, system_type: SystemType) {
    let snapshot = DashboardSnapshot::for_system(system_type);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Power figures
            Constraint::Length(3), // Battery gauge
            Constraint::Length(5), // System-specific figures
            Constraint::Min(4),    // Insights
        ])
        .split(area);

    render_power(frame, chunks[0], &snapshot);
    render_battery(frame, chunks[1], &snapshot);
    render_extra(frame, chunks[2], &snapshot);
    render_insights(frame, chunks[3], &snapshot);
}

fn metric(label: &str, value: String, color: Color) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(panel(label))
}

fn render_power(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let net = snapshot.net_balance_kw();
    let net_color = if net >= 0.0 { Color::Green } else { Color::Red };

    frame.render_widget(
        metric("Production", format!(" {:.1} kW", snapshot.production_kw), Color::Yellow),
        cols[0],
    );
    frame.render_widget(
        metric("Consumption", format!(" {:.1} kW", snapshot.consumption_kw), Color::Cyan),
        cols[1],
    );
    frame.render_widget(
        metric("Net Balance", format!(" {:+.1} kW", net), net_color),
        cols[2],
    );
    frame.render_widget(
        metric(
            "Efficiency",
            format!(" {}% · {}", snapshot.efficiency_percent, snapshot.status.label()),
            Color::Green,
        ),
        cols[3],
    );
}

fn render_battery(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let color = match snapshot.battery_percent {
        0..=20 => Color::Red,
        21..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(panel("Battery"))
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(snapshot.battery_percent.min(100)))
        .label(format!("{}%", snapshot.battery_percent));

    frame.render_widget(gauge, area);
}

fn render_extra(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let (title, lines) = match snapshot.extra {
        DashboardExtra::Distribution {
            total_distributed_kw,
            connected_facilities,
        } => (
            "Distribution",
            vec![
                Line::from(vec![
                    Span::raw(" Total distributed     "),
                    Span::styled(
                        format!("{:.1} kW", total_distributed_kw),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw(" Connected facilities  "),
                    Span::styled(
                        format_number(u64::from(connected_facilities)),
                        Style::default().fg(Color::White),
                    ),
                ]),
            ],
        ),
        DashboardExtra::Household {
            monthly_savings_idr,
            connected_devices,
        } => (
            "Household",
            vec![
                Line::from(vec![
                    Span::raw(" Savings this month    "),
                    Span::styled(
                        format_idr(monthly_savings_idr),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw(" Connected devices     "),
                    Span::styled(
                        format_number(u64::from(connected_devices)),
                        Style::default().fg(Color::White),
                    ),
                ]),
            ],
        ),
    };

    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

fn render_insights(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let items: Vec<ListItem> = snapshot
        .insights()
        .into_iter()
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled(" • ", Style::default().fg(Color::Yellow)),
                Span::raw(line),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(panel("AI Insights")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_shared_grid_dashboard() {
        let screen = render_to_string(100, 24, |f| render(f, f.area(), SystemType::SharedGrid));
        assert!(screen.contains("145.2 kW"));
        assert!(screen.contains("892.5 kW"));
        assert!(screen.contains("+21.4 kW"));
        assert!(!screen.contains("run the AC"));
    }

    #[test]
    fn test_private_dashboard() {
        let screen = render_to_string(100, 24, |f| render(f, f.area(), SystemType::Private));
        assert!(screen.contains("12.3 kW"));
        assert!(screen.contains("Rp 456.000"));
        assert!(screen.contains("run the AC"));
    }
}
