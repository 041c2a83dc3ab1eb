// TUI application state
//
// App wraps the conversation Store with everything that only matters on
// screen: draft cursor, transcript scroll, toasts, theme and the log panel.
// Gateway work runs on spawned tasks; their outcomes come back through the
// channel returned by `App::new` and are applied from the event loop, so
// every mutation happens on the loop's task.

use super::clipboard;
use super::components::toast::ToastStack;
use super::editor::DraftCursor;
use super::input::Action;
use super::scroll::ScrollState;
use super::theme::Theme;
use crate::config::Config;
use crate::conversation::{Outcome, Request, Store};
use crate::gateway::{dispatch, Gateway};
use crate::logging::LogRing;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    /// Chat state (draft, transcript, submit phase, loading stage)
    pub store: Store,

    pub cursor: DraftCursor,

    pub transcript_scroll: ScrollState,

    pub toasts: ToastStack,

    pub theme: Theme,

    /// Captured tracing output for the log panel
    pub log_ring: LogRing,

    pub show_logs: bool,

    pub should_quit: bool,

    /// Where requests go, for the status bar
    pub api_label: String,

    /// Animation frame counter for the busy spinner
    animation_frame: usize,

    gateway: Arc<dyn Gateway>,

    outcome_tx: mpsc::UnboundedSender<Outcome>,
}

impl App {
    /// Create app state plus the receiver its gateway outcomes arrive on
    pub fn new(
        gateway: Arc<dyn Gateway>,
        log_ring: LogRing,
        config: &Config,
        api_label: impl Into<String>,
    ) -> (Self, mpsc::UnboundedReceiver<Outcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let app = Self {
            store: Store::new(),
            cursor: DraftCursor::new(),
            transcript_scroll: ScrollState::new(),
            toasts: ToastStack::new(config.toast_duration()),
            theme: Theme::named(&config.theme),
            log_ring,
            show_logs: false,
            should_quit: false,
            api_label: api_label.into(),
            animation_frame: 0,
            gateway,
            outcome_tx,
        };
        (app, outcome_rx)
    }

    /// Re-fetch the transcript (also run once on mount)
    pub fn refresh(&mut self) {
        self.spawn_request(Request::Refresh);
    }

    /// Submit the current draft, or surface why it can't be submitted
    pub fn submit(&mut self) {
        match self.store.begin_submit() {
            Ok(request) => self.spawn_request(request),
            Err(rejection) => {
                tracing::debug!(?rejection, "Submit rejected");
                if let Some(notification) = rejection.notification() {
                    self.toasts.notify(notification);
                }
            }
        }
    }

    /// Wipe the remote transcript
    pub fn clear(&mut self) {
        self.spawn_request(Request::Clear);
    }

    fn spawn_request(&self, request: Request) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            dispatch(gateway.as_ref(), request, |outcome| {
                // Receiver gone means the TUI is shutting down
                let _ = tx.send(outcome);
            })
            .await;
        });
    }

    /// Fold a gateway outcome into the state and show its notifications
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        let new_transcript = matches!(
            outcome,
            Outcome::Loaded(Ok(_)) | Outcome::Answered(Ok(_)) | Outcome::Cleared(Ok(()))
        );

        for notification in self.store.apply(outcome) {
            self.toasts.notify(notification);
        }

        if new_transcript {
            // Newest exchange is at the top
            self.transcript_scroll.scroll_to_top();
        }
        self.cursor.clamp(self.store.draft());
    }

    /// Apply one key action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Submit => self.submit(),
            Action::ClearChat => self.clear(),
            Action::Refresh => self.refresh(),

            Action::Insert(ch) => self.edit(|cursor, draft| cursor.insert(draft, ch)),
            Action::Paste(text) => {
                let text: String = text.chars().filter(|&c| c != '\r').collect();
                self.edit(|cursor, draft| cursor.insert_str(draft, &text));
            }
            Action::Newline => self.edit(|cursor, draft| cursor.insert(draft, '\n')),
            Action::Backspace => self.edit(|cursor, draft| cursor.backspace(draft)),
            Action::Delete => self.edit(|cursor, draft| cursor.delete(draft)),
            Action::CursorLeft => self.cursor.left(),
            Action::CursorRight => self.cursor.right(self.store.draft()),
            Action::CursorHome => self.cursor.home(self.store.draft()),
            Action::CursorEnd => self.cursor.end(self.store.draft()),
            Action::ClearDraft => {
                self.store.set_draft(String::new());
                self.cursor.reset();
            }

            Action::ScrollUp => self.transcript_scroll.scroll_up(),
            Action::ScrollDown => self.transcript_scroll.scroll_down(),
            Action::PageUp => self.transcript_scroll.page_up(),
            Action::PageDown => self.transcript_scroll.page_down(),

            Action::CopyAnswer => self.copy_latest_answer(),
            Action::ToggleLogs => self.show_logs = !self.show_logs,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Run a cursor edit directly on the store's draft
    fn edit(&mut self, f: impl FnOnce(&mut DraftCursor, &mut String)) {
        let cursor = &mut self.cursor;
        self.store.edit_draft(|draft| f(cursor, draft));
    }

    /// Copy the newest answer to the system clipboard
    pub fn copy_latest_answer(&mut self) {
        let Some(latest) = self.store.exchanges().first() else {
            self.toasts.info("Nothing to copy yet");
            return;
        };

        match clipboard::copy_to_clipboard(clipboard::copy_text(latest)) {
            Ok(()) => self.toasts.info("Copied answer to clipboard"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.toasts.info("Failed to copy");
            }
        }
    }

    /// Advance the spinner and expire old toasts (called on the redraw tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.toasts.prune();
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}
