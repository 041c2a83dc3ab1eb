//! Responsive breakpoint system for TUI layout decisions.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::{Constraint, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: split pane, icons only
    Compact,
    /// 60-99 cols: short hints
    Normal,
    /// 100+ cols: full hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// How the log panel shares space with the transcript: beside it when
    /// wide, underneath otherwise. Transcript constraint comes first.
    pub fn logs_split(&self) -> (Direction, [Constraint; 2]) {
        if self.at_least(Breakpoint::Wide) {
            (
                Direction::Horizontal,
                [Constraint::Percentage(60), Constraint::Percentage(40)],
            )
        } else {
            (
                Direction::Vertical,
                [Constraint::Percentage(65), Constraint::Percentage(35)],
            )
        }
    }
}
