// Draft editing
//
// The draft text itself lives in the Store; this is only the cursor. Positions
// are char indices, converted to byte offsets at the point of mutation so
// multi-byte input never splits a character.

use super::components::formatters::{text_width, wrap_text};

/// Cursor into the draft, as a char index in `0..=len`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftCursor {
    pos: usize,
}

impl DraftCursor {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Keep the cursor inside `text` after an outside change (e.g. draft cleared)
    pub fn clamp(&mut self, text: &str) {
        self.pos = self.pos.min(text.chars().count());
    }

    pub fn insert(&mut self, text: &mut String, ch: char) {
        self.clamp(text);
        let at = byte_index(text, self.pos);
        text.insert(at, ch);
        self.pos += 1;
    }

    /// Insert a whole string at the cursor in one pass (bracketed paste)
    pub fn insert_str(&mut self, text: &mut String, s: &str) {
        self.clamp(text);
        let at = byte_index(text, self.pos);
        text.insert_str(at, s);
        self.pos += s.chars().count();
    }

    pub fn backspace(&mut self, text: &mut String) {
        self.clamp(text);
        if self.pos == 0 {
            return;
        }
        self.pos -= 1;
        let at = byte_index(text, self.pos);
        text.remove(at);
    }

    pub fn delete(&mut self, text: &mut String) {
        self.clamp(text);
        if self.pos < text.chars().count() {
            let at = byte_index(text, self.pos);
            text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn right(&mut self, text: &str) {
        self.pos = (self.pos + 1).min(text.chars().count());
    }

    /// Start of the current line
    pub fn home(&mut self, text: &str) {
        self.clamp(text);
        let before: Vec<char> = text.chars().take(self.pos).collect();
        self.pos = before
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// End of the current line
    pub fn end(&mut self, text: &str) {
        self.clamp(text);
        let rest = text.chars().skip(self.pos).take_while(|&c| c != '\n').count();
        self.pos += rest;
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// (row, column) of the cursor once `text` is wrapped to `width`
    pub fn screen_position(&self, text: &str, width: usize) -> (usize, usize) {
        let width = width.max(1);
        let prefix: String = text.chars().take(self.pos).collect();
        let rows = wrap_text(&prefix, width);
        let row = rows.len() - 1;
        let col = rows.last().map(|r| text_width(r)).unwrap_or(0);
        if col >= width {
            (row + 1, 0)
        } else {
            (row, col)
        }
    }
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
