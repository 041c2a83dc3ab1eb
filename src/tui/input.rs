// Key bindings
//
// Maps raw crossterm key events to chat actions. The input box always has
// focus, so printable characters are text and every command sits behind a
// modifier or a non-printable key.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything a key press can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit,
    ClearChat,
    Refresh,

    // Draft editing
    Insert(char),
    /// Bracketed paste, inserted as one edit
    Paste(String),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearDraft,

    // Transcript
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    CopyAnswer,
    ToggleLogs,
    Quit,
}

/// Resolve a key event to an action
///
/// Only press (and repeat) events act; release events from terminals that
/// report them are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let action = match key.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'c' => Action::Quit,
            'k' => Action::ClearChat,
            'u' => Action::ClearDraft,
            'y' => Action::CopyAnswer,
            'l' => Action::ToggleLogs,
            'r' => Action::Refresh,
            'j' => Action::Newline,
            _ => return None,
        },
        KeyCode::Char(c) if !alt => Action::Insert(c),
        KeyCode::Enter if alt || shift => Action::Newline,
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        _ => return None,
    };

    Some(action)
}
