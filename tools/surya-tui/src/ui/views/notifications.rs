//! Alert inbox and alert preferences.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use surya_core::notifications::{Notification, NotificationKind};
use surya_core::Priority;

use crate::app::{App, NotificationFocus};
use crate::ui::widgets::{panel, selected_style};

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Success => Color::Green,
        NotificationKind::Info => Color::Blue,
        NotificationKind::Error => Color::Red,
    }
}

/// Render the notifications view.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_inbox(frame, chunks[0], app);
    render_preferences(frame, chunks[1], app);
}

fn notification_item(n: &Notification, is_selected: bool) -> ListItem<'static> {
    let title_style = if n.read {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let priority_style = match n.priority {
        Priority::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Priority::High => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::DarkGray),
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", n.kind.icon()),
                Style::default().fg(kind_color(n.kind)),
            ),
            Span::styled(n.title.clone(), title_style),
            Span::raw(if n.read { "  " } else { " ●" }),
            Span::styled(format!("  {}", n.priority.label()), priority_style),
            Span::styled(format!("  {}", n.received), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("   {}", n.message),
            Style::default().fg(Color::Gray),
        )),
    ])
    .style(selected_style(is_selected))
}

fn render_inbox(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.notification_focus == NotificationFocus::Inbox;
    let title = format!("Alerts · {} unread [Enter] read [x] delete [a] all", app.inbox.unread_count());

    if app.inbox.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                " No notifications",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(panel(title));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .inbox
        .notifications()
        .iter()
        .enumerate()
        .map(|(i, n)| notification_item(n, focused && i == app.inbox.selected_index()))
        .collect();

    frame.render_widget(List::new(items).block(panel(title)), area);
}

fn render_preferences(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.notification_focus == NotificationFocus::Preferences;

    let items: Vec<ListItem> = app
        .alert_prefs
        .iter()
        .enumerate()
        .map(|(i, (topic, enabled))| {
            let (mark, color) = if enabled {
                ("[on] ", Color::Green)
            } else {
                ("[off]", Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", mark), Style::default().fg(color)),
                Span::raw(topic.label()),
            ]))
            .style(selected_style(focused && i == app.alert_cursor))
        })
        .collect();

    frame.render_widget(List::new(items).block(panel("Alert Settings [p]")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_inbox_view() {
        let app = App::new();
        let screen = render_to_string(140, 20, |f| render(f, f.area(), &app));
        assert!(screen.contains("2 unread"));
        assert!(screen.contains("High inverter temperature"));
        assert!(screen.contains("[off] Weather updates"));
    }

    #[test]
    fn test_empty_inbox() {
        let mut app = App::new();
        while app.inbox.delete_selected() {}
        let screen = render_to_string(140, 20, |f| render(f, f.area(), &app));
        assert!(screen.contains("No notifications"));
        assert!(screen.contains("0 unread"));
    }
}
