//! Energy usage chart and summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use surya_core::energy::{EnergyBalance, BEST_PERFORMANCE};
use surya_core::{EnergyUsageState, SystemType};

use crate::ui::widgets::panel;

/// Render the energy usage view.
pub fn render(frame: &mut Frame, area: Rect, state: &EnergyUsageState, system_type: SystemType) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_chart(frame, chunks[0], state, system_type);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(chunks[1]);

    render_summary(frame, side[0], state);
    render_best_performance(frame, side[1]);
}

fn render_chart(frame: &mut Frame, area: Rect, state: &EnergyUsageState, system_type: SystemType) {
    let samples = state.samples();

    let production: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.production_kwh))
        .collect();
    let consumption: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.consumption_kwh))
        .collect();

    let y_max = samples
        .iter()
        .map(|s| s.production_kwh.max(s.consumption_kwh))
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.1;
    let x_max = samples.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Span> = match (samples.first(), samples.get(samples.len() / 2), samples.last()) {
        (Some(first), Some(mid), Some(last)) => vec![
            Span::raw(first.label),
            Span::raw(mid.label),
            Span::raw(last.label),
        ],
        _ => Vec::new(),
    };
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_max / 2.0)),
        Span::raw(format!("{:.0}", y_max)),
    ];

    let datasets = vec![
        Dataset::default()
            .name("Production")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&production),
        Dataset::default()
            .name("Consumption")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&consumption),
    ];

    let chart = Chart::new(datasets)
        .block(panel(state.title(system_type)))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("kWh")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &EnergyUsageState) {
    let summary = state.summary();
    let balance = summary.balance();
    let balance_color = match balance {
        EnergyBalance::Surplus => Color::Green,
        EnergyBalance::Deficit => Color::Red,
    };
    let efficiency = summary
        .efficiency_percent()
        .map(|pct| format!("{:.1}%", pct))
        .unwrap_or_else(|| "n/a".to_string());

    let text = vec![
        Line::from(vec![
            Span::raw(" Production   "),
            Span::styled(
                format!("{:.1} kWh", summary.total_production_kwh),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Consumption  "),
            Span::styled(
                format!("{:.1} kWh", summary.total_consumption_kwh),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Efficiency   "),
            Span::styled(efficiency, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!(" {}", balance.label()),
            Style::default().fg(balance_color).add_modifier(Modifier::BOLD),
        )),
    ];

    let title = format!("Summary · {} [v]", state.period().label());
    frame.render_widget(Paragraph::new(text).block(panel(title)), area);
}

fn render_best_performance(frame: &mut Frame, area: Rect) {
    let text: Vec<Line> = BEST_PERFORMANCE
        .iter()
        .flat_map(|(label, value)| {
            [
                Line::from(Span::styled(format!(" {}", label), Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    format!("   {}", value),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(text).block(panel("Best Performance")), area);
}
