//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  SuryaOptiAI  Private PV                   14:05 [s]Switch [?]  │
//! └─────────────────────────────────────────────────────────────────┘
//!   body: renderer chosen by navigator.view()
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ [1]⌂ Dashboard [2]≋ Energy ...   (only once a system is chosen) │
//! └─────────────────────────────────────────────────────────────────┘
//!   footer: key hints or last error
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use surya_core::{header_subtitle, View};

use crate::app::{App, AppState};

use super::{views, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let show_nav = app.navigator.system_type().is_some();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                 // Header
            Constraint::Min(8),                                    // Body
            Constraint::Length(if show_nav { 3 } else { 0 }),      // Navigation
            Constraint::Length(1),                                 // Footer
        ])
        .split(frame.area());

    render_header(frame, main_chunks[0], app);
    render_body(frame, main_chunks[1], app);
    if show_nav {
        render_navigation(frame, main_chunks[2], app);
    }
    render_footer(frame, main_chunks[3], app);

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let system_type = app.navigator.system_type();

    let title = vec![
        Span::styled(
            " SuryaOptiAI ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(header_subtitle(system_type), Style::default().fg(Color::Gray)),
    ];

    let clock = Span::styled(
        format!(" {} ", chrono::Local::now().format("%H:%M")),
        Style::default().fg(Color::DarkGray),
    );

    let mut hints = Vec::new();
    if system_type.is_some() {
        hints.push(Span::styled("[s]", Style::default().fg(Color::Yellow)));
        hints.push(Span::raw("Switch System "));
    }
    hints.push(Span::styled("[?]", Style::default().fg(Color::Yellow)));
    hints.push(Span::raw("Help "));

    // Right-align clock and hints inside the borders
    let title_len: usize = title.iter().map(|s| s.width()).sum();
    let hints_len: usize = hints.iter().map(|s| s.width()).sum();
    let padding = area
        .width
        .saturating_sub(2)
        .saturating_sub((title_len + clock.width() + hints_len) as u16);

    let mut spans = title;
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.push(clock);
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Dispatch to the renderer for the resolved view.
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match app.navigator.view() {
        View::SystemSelector => views::selector::render(frame, area, &app.selector),
        View::Dashboard(system) => views::dashboard::render(frame, area, system),
        View::EnergyUsage(system) => views::energy::render(frame, area, &app.energy, system),
        View::ComponentStatus(system) => views::components::render(frame, area, system),
        View::DeviceControl => views::devices::render(frame, area, &app.devices),
        View::History(system) => views::history::render(frame, area, &app.history, system),
        View::Notifications => views::notifications::render(frame, area, app),
        View::Settings => views::settings::render(frame, area, &app.settings),
    }
}

/// Render the bottom navigation bar from the derived items.
fn render_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.navigator.active_tab();
    let unread = app.inbox.unread_count();

    let mut spans = Vec::new();
    for (i, item) in app.navigator.navigation_items().iter().enumerate() {
        let style = if item.id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{}]", i + 1), Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(format!("{} {}", item.icon, item.label), style));
        if item.id == surya_core::TabId::Notifications && unread > 0 {
            spans.push(Span::styled(format!("({})", unread), Style::default().fg(Color::Red)));
        }
        spans.push(Span::raw("  "));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(nav, area);
}

/// Render the footer with key hints or the last rejected action.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" ⚠ {}", message),
            Style::default().fg(Color::Red),
        )),
        None if app.navigator.system_type().is_none() => Line::from(vec![
            Span::styled(" [↑↓]", Style::default().fg(Color::Yellow)),
            Span::raw(" Choose  "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Confirm  "),
            Span::styled("[Q]", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ]),
        None => Line::from(vec![
            Span::styled(" [Tab]", Style::default().fg(Color::Yellow)),
            Span::raw(" Next  "),
            Span::styled("[1-9]", Style::default().fg(Color::Yellow)),
            Span::raw(" Jump  "),
            Span::styled("[?]", Style::default().fg(Color::Yellow)),
            Span::raw(" Help  "),
            Span::styled("[Q]", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ]),
    };

    frame.render_widget(Paragraph::new(line), area);
}
