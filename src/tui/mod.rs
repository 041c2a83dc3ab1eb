// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, redraw ticks, loading ticks)
// - Rendering the UI
// - Applying gateway outcomes as they arrive

pub mod app;
pub mod clipboard;
pub mod components;
pub mod editor;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::conversation::{LoadingTicker, Outcome};
use crate::gateway::Gateway;
use crate::logging::LogRing;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::Action;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, loads the transcript, runs the event loop and
/// restores the terminal when done, even if the loop failed.
pub async fn run_tui(
    gateway: Arc<dyn Gateway>,
    log_ring: LogRing,
    config: Config,
    api_label: String,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )
    .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (mut app, mut outcome_rx) = App::new(gateway, log_ring, &config, api_label);

    // Mounted: fetch the transcript and start cycling loading messages
    app.refresh();
    let mut ticker = LoadingTicker::spawn(config.loading_interval());

    let result = run_event_loop(&mut terminal, &mut app, &mut outcome_rx, &mut ticker).await;

    // Unmounted: the ticker task is aborted on drop
    drop(ticker);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles four types of events:
/// 1. Keyboard and mouse input
/// 2. Redraw ticks (spinner animation, toast expiry)
/// 3. Loading ticks (advance the loading message while busy)
/// 4. Gateway outcomes (fold into the store)
///
/// Everything that mutates App happens here, one event at a time.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    outcome_rx: &mut mpsc::UnboundedReceiver<Outcome>,
    ticker: &mut LoadingTicker,
) -> Result<()> {
    // Periodic redraw ticker (5 FPS is plenty for a spinner)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => {
                            if let Some(action) = input::action_for(key_event) {
                                app.handle_action(action);
                            }
                        }
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::Paste(text)) => app.handle_action(Action::Paste(text)),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(()) = ticker.tick() => {
                app.store.advance_loading_stage();
            }

            Some(outcome) = outcome_rx.recv() => {
                app.apply_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Mouse wheel scrolls the transcript
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.handle_action(Action::ScrollUp),
        MouseEventKind::ScrollDown => app.handle_action(Action::ScrollDown),
        _ => {}
    }
}
