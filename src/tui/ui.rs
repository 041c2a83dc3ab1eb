// UI rendering - lays out the chat screen
//
// Rendering is a pure function of App state apart from the transcript, which
// reports its content height back to its ScrollState each frame.

use super::app::App;
use super::components::{input_bar, logs_panel, status_bar, title_bar, transcript};
use super::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

/// Main draw function - called every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    // Split the terminal into four vertical sections:
    // - Title bar (3 lines fixed)
    // - Conversation (fills remaining space)
    // - Input box (grows with the draft)
    // - Status bar (2 lines: top border + hints)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(input_bar::height(app, area.width)),
            Constraint::Length(2),
        ])
        .split(area);

    title_bar::render(f, chunks[0], app);
    render_body(f, chunks[1], app);
    input_bar::render(f, chunks[2], app);
    status_bar::render(f, chunks[3], app);

    // Toasts go last so they sit on top of everything
    app.toasts.render(f, area, &app.theme);
}

/// Transcript, with the log panel beside it (or below it when narrow)
fn render_body(f: &mut Frame, area: Rect, app: &mut App) {
    if !app.show_logs {
        transcript::render(f, area, app);
        return;
    }

    let (direction, split) = Breakpoint::from_width(area.width).logs_split();

    let chunks = Layout::default()
        .direction(direction)
        .constraints(split)
        .split(area);

    transcript::render(f, chunks[0], app);
    logs_panel::render(f, chunks[1], app);
}
