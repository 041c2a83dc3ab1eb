//! Transcript panel
//!
//! Newest exchange first. While a question is in flight a placeholder line
//! carrying the current loading message sits above everything else, where
//! the answer will appear.

use super::formatters::wrap_text;
use super::scrollbar::render_scrollbar;
use crate::conversation::Store;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const USER_LABEL: &str = "You: ";
const AI_LABEL: &str = "AI: ";

/// Build the wrapped transcript lines for a content width
pub fn transcript_lines(store: &Store, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    if store.is_busy() {
        let loading = Style::default()
            .fg(theme.loading)
            .add_modifier(Modifier::ITALIC);
        lines.extend(labelled(
            AI_LABEL,
            store.loading_stage().message(),
            width,
            label.fg(theme.ai),
            loading,
        ));
        lines.push(Line::default());
    }

    if store.exchanges().is_empty() && !store.is_busy() {
        lines.push(Line::styled(
            "No conversations yet. Ask something below.",
            Style::default().fg(theme.muted),
        ));
        return lines;
    }

    let text = Style::default().fg(theme.foreground);
    for exchange in store.exchanges() {
        lines.extend(labelled(
            USER_LABEL,
            &exchange.question,
            width,
            label.fg(theme.user),
            text,
        ));
        lines.extend(labelled(
            AI_LABEL,
            &exchange.answer,
            width,
            label.fg(theme.ai),
            text,
        ));
        lines.push(Line::default());
    }

    lines
}

/// Wrap `label` + `body`, styling the label part of the first row
fn labelled(
    label: &'static str,
    body: &str,
    width: usize,
    label_style: Style,
    body_style: Style,
) -> Vec<Line<'static>> {
    let rows = wrap_text(&format!("{}{}", label, body), width);
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row.strip_prefix(label) {
            Some(rest) if i == 0 => Line::from(vec![
                Span::styled(label, label_style),
                Span::styled(rest.to_string(), body_style),
            ]),
            _ => Line::from(Span::styled(row, body_style)),
        })
        .collect()
}

/// Render the transcript, syncing its scroll state to the content
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    // Borders on both sides plus one column for the scrollbar
    let width = area.width.saturating_sub(3) as usize;
    let viewport = area.height.saturating_sub(2) as usize;

    let lines = transcript_lines(&app.store, width, &app.theme);
    app.transcript_scroll.update_dimensions(lines.len(), viewport);

    let theme = &app.theme;
    let paragraph = Paragraph::new(lines)
        .scroll((app.transcript_scroll.render_offset(), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Conversation "),
        );

    f.render_widget(paragraph, area);
    render_scrollbar(f, area, &app.transcript_scroll, theme);
}
