//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
}

fn binding<'a>(keys: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", keys), KEY_STYLE),
        Span::raw(action),
    ])
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "SURYAOPTIAI HELP",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        section("Navigation"),
        binding("Tab / →", "Next section"),
        binding("S-Tab / ←", "Previous section"),
        binding("1-7", "Jump to section"),
        binding("s", "Switch system type"),
        Line::raw(""),
        section("Views"),
        binding("↑/↓", "Move selection"),
        binding("Enter", "Confirm / mark read / activate"),
        binding("v", "Energy: toggle 24h / 7 days"),
        binding("Space", "Devices: power · Alerts: toggle"),
        binding("+ / -", "Devices: temperature or brightness"),
        binding("p", "History: period · Alerts: focus"),
        binding("x / a", "Alerts: delete / mark all read"),
        Line::raw(""),
        binding("q / Esc", "Quit"),
        binding("?", "Toggle this help"),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
