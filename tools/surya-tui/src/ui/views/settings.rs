//! Settings panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use surya_core::settings::{SettingsEntry, APP_VERSION, BUILD_LABEL, CONNECTIVITY};
use surya_core::SettingsPanel;

use crate::ui::widgets::{panel, selected_style};

/// Render the settings view.
pub fn render(frame: &mut Frame, area: Rect, settings: &SettingsPanel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_entries(frame, chunks[0], settings);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Profile
            Constraint::Length(6), // Connectivity
            Constraint::Min(4),    // Version
        ])
        .split(chunks[1]);

    render_profile(frame, side[0], settings);
    render_connectivity(frame, side[1]);
    render_version(frame, side[2]);
}

fn render_entries(frame: &mut Frame, area: Rect, settings: &SettingsPanel) {
    let items: Vec<ListItem> = settings
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let value = match settings.value(*entry) {
                Some(true) => Span::styled(" [on] ", Style::default().fg(Color::Green)),
                Some(false) => Span::styled(" [off]", Style::default().fg(Color::DarkGray)),
                None if *entry == SettingsEntry::ChangeSystemType => {
                    Span::styled("  ⇄  ", Style::default().fg(Color::Yellow))
                }
                None => Span::styled("  ↺  ", Style::default().fg(Color::Red)),
            };
            let label_style = if entry.is_action() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                value,
                Span::raw(" "),
                Span::styled(entry.label(), label_style),
            ]))
            .style(selected_style(i == settings.cursor()))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(panel("Settings [Enter] activate")),
        area,
    );
}

fn render_profile(frame: &mut Frame, area: Rect, settings: &SettingsPanel) {
    let profile = &settings.profile;
    let row = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!(" {:<10}", label), Style::default().fg(Color::Gray)),
            Span::raw(value.to_string()),
        ])
    };

    let text = vec![
        row("Name", &profile.name),
        row("Email", &profile.email),
        row("Location", &profile.location),
        row("Timezone", &profile.timezone),
    ];

    frame.render_widget(Paragraph::new(text).block(panel("Profile")), area);
}

fn render_connectivity(frame: &mut Frame, area: Rect) {
    let text: Vec<Line> = CONNECTIVITY
        .iter()
        .map(|(service, status)| {
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(Color::Green)),
                Span::raw(format!("{:<14}", service)),
                Span::styled(*status, Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(text).block(panel("Connectivity")), area);
}

fn render_version(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            format!(" SuryaOptiAI v{}", APP_VERSION),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" Build: {}", BUILD_LABEL),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(text).block(panel("About")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_settings_view() {
        let mut settings = SettingsPanel::new();
        settings.activate_entry(SettingsEntry::EnergySavingMode);
        let screen = render_to_string(120, 24, |f| render(f, f.area(), &settings));
        assert!(screen.contains("[on]  Energy saving mode"));
        assert!(screen.contains("Change system type"));
        assert!(screen.contains("12/12 Online"));
        assert!(screen.contains("SuryaOptiAI v2.1.0"));
        assert!(screen.contains("admin@suryaoptiai.com"));
    }
}
