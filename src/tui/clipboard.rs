//! Copying chat content to the system clipboard
//!
//! `arboard` talks to the platform clipboard. A handle is opened per copy
//! and dropped straight after, so nothing is held while the TUI runs.

use crate::conversation::Exchange;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails when there is no clipboard to talk to (headless Linux, SSH without
/// forwarding) or the platform refuses access.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// The text copied for an exchange: the answer alone
pub fn copy_text(exchange: &Exchange) -> &str {
    exchange.answer.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_answer_without_trailing_whitespace() {
        let exchange = Exchange::new("q", "the answer\n\n");
        assert_eq!(copy_text(&exchange), "the answer");
    }
}
