//! Toast notifications
//!
//! Non-blocking overlays that auto-dismiss after a configurable duration.
//! Toasts stack upward from the bottom-right corner, newest at the bottom,
//! and render on top of all other content.

use super::formatters::text_width;
use crate::conversation::{Notification, NotificationLevel};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Upper bound on toasts shown at once; older ones are dropped first
const MAX_TOASTS: usize = 4;

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: NotificationLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(notification: Notification, duration: Duration) -> Self {
        Self {
            message: notification.message.to_string(),
            level: notification.level,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Informational toast that is not a store notification (clipboard etc.)
    pub fn info(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    fn icon(&self) -> &'static str {
        match self.level {
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        }
    }

    fn color(&self, theme: &Theme) -> ratatui::style::Color {
        match self.level {
            NotificationLevel::Success => theme.success,
            NotificationLevel::Error => theme.error,
        }
    }

    /// Render in `toast_area`, clearing it first so the toast sits on top
    fn render(&self, f: &mut Frame, toast_area: Rect, theme: &Theme) {
        let color = self.color(theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(format!("{} {}", self.icon(), self.message))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

/// The visible toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastStack {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.push(Toast::new(notification, self.duration));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::info(message, self.duration));
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    /// Drop expired toasts; returns true if any were removed
    pub fn prune(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Render the stack in the bottom-right corner of `area`
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let height = 3; // 1 line of text + 2 for borders
        let mut bottom = area.bottom().saturating_sub(1);

        for toast in self.toasts.iter().rev() {
            if bottom < area.y + height {
                break;
            }
            // Icon, space, 2 padding each side and borders
            let message_width = u16::try_from(text_width(&toast.message)).unwrap_or(u16::MAX);
            let width = message_width.saturating_add(8).min(area.width.saturating_sub(4));
            let x = area.right().saturating_sub(width + 2);
            let y = bottom - height;

            toast.render(f, Rect::new(x, y, width, height), theme);
            bottom = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{Failure, ANSWER_RECEIVED};

    #[test]
    fn stack_keeps_levels_and_order() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        stack.notify(ANSWER_RECEIVED);
        stack.notify(Failure::Fetch.notification());

        let toasts = stack.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].message, "Answer received!");
        assert_eq!(toasts[0].level, NotificationLevel::Success);
        assert_eq!(toasts[1].message, "Failed to load conversations");
        assert_eq!(toasts[1].level, NotificationLevel::Error);
    }

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        for i in 0..(MAX_TOASTS + 2) {
            stack.info(format!("toast {}", i));
        }
        assert_eq!(stack.toasts().len(), MAX_TOASTS);
        assert_eq!(stack.toasts()[0].message, "toast 2");
    }

    #[test]
    fn expired_toasts_are_pruned() {
        let mut stack = ToastStack::new(Duration::ZERO);
        stack.notify(ANSWER_RECEIVED);
        assert!(stack.prune());
        assert!(stack.is_empty());
        assert!(!stack.prune());
    }
}
