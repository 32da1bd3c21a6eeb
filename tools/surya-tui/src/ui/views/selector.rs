//! System type selector.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use surya_core::SystemSelector;

use crate::ui::widgets::{panel, selected_style};

/// Render the first-run selector.
pub fn render(frame: &mut Frame, area: Rect, selector: &SystemSelector) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Choose your system",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick the installation type to start monitoring",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(panel("Welcome"));
    frame.render_widget(intro, chunks[0]);

    let items: Vec<ListItem> = selector
        .options()
        .iter()
        .enumerate()
        .map(|(i, system)| {
            let is_selected = i == selector.highlighted_index();
            let marker = if is_selected { "▶" } else { " " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", marker), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("({}) ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        system.label(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("       {}", system.description()),
                    Style::default().fg(Color::Gray),
                )),
                Line::raw(""),
            ])
            .style(selected_style(is_selected))
        })
        .collect();

    frame.render_widget(List::new(items).block(panel("System Type")), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_lists_both_system_types() {
        let mut selector = SystemSelector::new();
        selector.move_down();
        let screen = render_to_string(120, 16, |f| render(f, f.area(), &selector));
        assert!(screen.contains("Shared Microgrid"));
        assert!(screen.contains("Private PV"));
        assert!(screen.contains("(2) Private PV"));
    }
}
