//! Logs panel component
//!
//! Shows the newest captured tracing events, color-coded by level. The panel
//! always follows the tail of the ring; it has no scroll state of its own.

use crate::logging::LogEntry;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use tracing::Level;

/// Render the logs panel with the newest entries that fit
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let viewport = area.height.saturating_sub(2) as usize;
    let entries = app.log_ring.tail(viewport);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(entry.display_line()).style(log_level_style(entry, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" System Logs ({}) ", app.log_ring.len())),
    );

    f.render_widget(list, area);
}

fn log_level_style(entry: &LogEntry, theme: &Theme) -> Style {
    let color = match entry.level {
        Level::ERROR => theme.log_error,
        Level::WARN => theme.log_warn,
        Level::INFO => theme.log_info,
        _ => theme.log_debug,
    };
    Style::default().fg(color)
}
