// Title bar component
//
// Renders the app title with the busy spinner and the exchange count.

use super::formatters::format_count;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows:
/// - App name ("Ask Me Anything 🤖")
/// - Spinner plus "thinking" while a question is in flight
/// - Number of exchanges in the transcript (right-aligned)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let busy_indicator = if app.store.is_busy() {
        format!(" {} thinking", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = format!(" Ask Me Anything 🤖{}", busy_indicator);
    let count = format!(" {} ", format_count(app.store.exchanges().len(), "exchange"));

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(count).right_aligned()),
        );

    f.render_widget(title, area);
}
