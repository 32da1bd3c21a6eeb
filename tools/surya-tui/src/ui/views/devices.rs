//! Household device control.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use surya_core::devices::{Device, DeviceKind};
use surya_core::{DeviceBoard, Priority};

use crate::ui::format::format_number;
use crate::ui::widgets::{panel, selected_style};

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Critical => Color::Red,
        Priority::High => Color::Yellow,
        Priority::Medium => Color::Cyan,
        Priority::Low => Color::Gray,
    }
}

/// Render the device control view.
pub fn render(frame: &mut Frame, area: Rect, board: &DeviceBoard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Totals
            Constraint::Min(8),    // Device list
            Constraint::Length(5), // Recommendations
        ])
        .split(area);

    render_totals(frame, chunks[0], board);
    render_devices(frame, chunks[1], board);
    render_recommendations(frame, chunks[2], board);
}

fn render_totals(frame: &mut Frame, area: Rect, board: &DeviceBoard) {
    let line = Line::from(vec![
        Span::raw(" Active "),
        Span::styled(
            format!("{}/{}", board.active_count(), board.devices().len()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Load "),
        Span::styled(
            format!("{} W", format_number(u64::from(board.total_power_watts()))),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Potential savings "),
        Span::styled(
            format!("{} W", format_number(u64::from(board.potential_savings_watts()))),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(panel("Device Control")), area);
}

fn device_line(device: &Device) -> Line<'static> {
    let (power_glyph, power_style) = if device.is_on {
        ("● ON ", Style::default().fg(Color::Green))
    } else {
        ("○ OFF", Style::default().fg(Color::DarkGray))
    };

    let control = match device.kind {
        DeviceKind::AirConditioner { .. } | DeviceKind::Light { .. }
            if device.is_on && device.controllable =>
        {
            device.control_summary().map(|s| format!("{} [+/-]", s))
        }
        _ => device.control_summary(),
    }
    .unwrap_or_default();

    let mode = if device.controllable { "" } else { " (auto)" };

    Line::from(vec![
        Span::styled(format!(" {} ", power_glyph), power_style),
        Span::styled(
            format!("{:<18}", format!("{}{}", device.name, mode)),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:>7} W  ", format_number(u64::from(device.power_watts))),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:<9}", device.priority.label()),
            Style::default().fg(priority_color(device.priority)),
        ),
        Span::raw(control),
    ])
}

fn render_devices(frame: &mut Frame, area: Rect, board: &DeviceBoard) {
    let items: Vec<ListItem> = board
        .devices()
        .iter()
        .enumerate()
        .map(|(i, device)| {
            ListItem::new(device_line(device)).style(selected_style(i == board.selected_index()))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(panel("Devices [Space] power [+/-] adjust")),
        area,
    );
}

fn render_recommendations(frame: &mut Frame, area: Rect, board: &DeviceBoard) {
    let text: Vec<Line> = board
        .recommendations()
        .into_iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(" • ", Style::default().fg(Color::Green)),
                Span::raw(line),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(text).block(panel("AI Recommendations")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_seeded_devices() {
        let board = DeviceBoard::new();
        let screen = render_to_string(100, 20, |f| render(f, f.area(), &board));
        assert!(screen.contains("3/6"));
        assert!(screen.contains("1,700 W"));
        assert!(screen.contains("Refrigerator (auto)"));
        assert!(screen.contains("24°C cool"));
        assert!(screen.contains("80%"));
    }

    #[test]
    fn test_toggle_updates_totals() {
        let mut board = DeviceBoard::new();
        board.toggle("coffee-maker").expect("controllable");
        let screen = render_to_string(100, 20, |f| render(f, f.area(), &board));
        assert!(screen.contains("2,700 W"));
        assert!(screen.contains("Switch off Coffee Maker to save 1000W"));
    }
}
