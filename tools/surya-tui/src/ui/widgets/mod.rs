//! Reusable UI widgets.

mod help_overlay;

pub use help_overlay::render_help_overlay;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered panel with the console's title styling.
pub fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title.into()))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Row style for a highlighted list entry.
pub fn selected_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
