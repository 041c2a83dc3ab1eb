// Status bar component
//
// Renders key hints and the API endpoint at the bottom of the screen.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key hints for a given terminal width
pub fn hints(bp: Breakpoint) -> &'static str {
    match bp {
        Breakpoint::Compact => " ⏎ ask │ ^K clear │ Esc quit",
        Breakpoint::Normal => " ⏎ ask │ Alt+⏎ newline │ ↑↓ scroll │ ^K clear │ ^Y copy │ Esc quit",
        Breakpoint::Wide => {
            " ⏎ ask │ Alt+⏎ newline │ ↑↓/PgUp/PgDn scroll │ ^K clear chat │ ^U clear draft │ ^R refresh │ ^Y copy │ ^L logs │ Esc quit"
        }
    }
}

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: all hints plus the API endpoint
/// - Narrow: the essentials only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let status_text = if bp.at_least(Breakpoint::Wide) {
        format!("{} │ 📡 {}", hints(bp), app.api_label)
    } else {
        hints(bp).to_string()
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.muted))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_hints_are_a_subset() {
        assert!(hints(Breakpoint::Compact).contains("Esc quit"));
        assert!(!hints(Breakpoint::Compact).contains("newline"));
        assert!(hints(Breakpoint::Wide).contains("^L logs"));
    }
}
