//! Loading stages shown in the transcript while an answer is pending

/// Messages cycled through while a submit cycle is in flight
pub const LOADING_MESSAGES: [&str; 5] = [
    "🧠 Thinking hard...",
    "🔍 Searching the AI brain...",
    "📚 Looking through knowledge base...",
    "💬 Formulating the perfect response...",
    "✨ Finalizing your answer...",
];

/// Index into [`LOADING_MESSAGES`], wrapping at the end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingStage {
    index: usize,
}

impl LoadingStage {
    #[allow(dead_code)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn message(&self) -> &'static str {
        LOADING_MESSAGES[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % LOADING_MESSAGES.len();
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_message() {
        let stage = LoadingStage::default();
        assert_eq!(stage.index(), 0);
        assert_eq!(stage.message(), "🧠 Thinking hard...");
    }

    #[test]
    fn wraps_after_last_message() {
        let mut stage = LoadingStage::default();
        for _ in 0..LOADING_MESSAGES.len() - 1 {
            stage.advance();
        }
        assert_eq!(stage.message(), "✨ Finalizing your answer...");

        stage.advance();
        assert_eq!(stage.index(), 0);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut stage = LoadingStage::default();
        stage.advance();
        stage.advance();
        stage.reset();
        assert_eq!(stage, LoadingStage::default());
    }
}
