//! Question input box
//!
//! Bound to the store's draft. The submit action label lives in the top-right
//! border and switches to "⏳ Thinking..." (dimmed) while the action is
//! disabled. The box grows with the draft up to `MAX_ROWS` and scrolls to
//! keep the cursor visible beyond that.

use super::formatters::wrap_text;
use crate::tui::app::App;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MAX_ROWS: usize = 5;

pub const SUBMIT_LABEL: &str = "💬 Get Answer";
pub const BUSY_LABEL: &str = "⏳ Thinking...";

/// Label of the submit action for the current state
pub fn submit_label(busy: bool) -> &'static str {
    if busy {
        BUSY_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// Total height (rows plus borders) needed for the draft at this width
pub fn height(app: &App, width: u16) -> u16 {
    let inner = width.saturating_sub(2) as usize;
    let (cursor_row, _) = app.cursor.screen_position(app.store.draft(), inner);
    let rows = wrap_text(app.store.draft(), inner).len().max(cursor_row + 1);
    rows.clamp(1, MAX_ROWS) as u16 + 2
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let busy = app.store.is_busy();
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible_rows = area.height.saturating_sub(2) as usize;

    let draft = app.store.draft();
    let (cursor_row, cursor_col) = app.cursor.screen_position(draft, inner_width);
    let skip = (cursor_row + 1).saturating_sub(visible_rows.max(1));

    let body: Vec<Line> = if draft.is_empty() {
        vec![Line::styled(
            "Type your question...",
            Style::default().fg(theme.muted),
        )]
    } else {
        wrap_text(draft, inner_width)
            .into_iter()
            .map(Line::from)
            .collect()
    };

    let action_style = if busy {
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    };
    let action = Line::styled(format!(" {} ", submit_label(busy)), action_style).right_aligned();

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(theme.foreground))
        .scroll((u16::try_from(skip).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.highlight))
                .title(" Your question ")
                .title_top(action),
        );

    f.render_widget(paragraph, area);

    let x = area.x + 1 + cursor_col as u16;
    let y = area.y + 1 + (cursor_row - skip) as u16;
    f.set_cursor_position(Position::new(x, y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_busy_state() {
        assert_eq!(submit_label(false), "💬 Get Answer");
        assert_eq!(submit_label(true), "⏳ Thinking...");
    }
}
