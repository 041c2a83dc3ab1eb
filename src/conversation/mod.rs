// Conversation module - the client-side interaction core
//
// Everything the chat screen needs that isn't drawing or networking lives here:
// - Exchange: one question/answer pair as returned by the remote API
// - Store: draft, transcript, submit phase and loading stage
// - Loading stages and the ticker that advances them
// - Session: sequential driver used by headless commands and tests
//
// The Store is a reducer: the TUI and the headless commands both feed it
// `Outcome`s produced by the gateway and render whatever `Notification`s it
// hands back.

pub mod loading;
pub mod session;
pub mod store;
pub mod ticker;

pub use loading::LoadingStage;
pub use session::Session;
pub use store::{Outcome, Request, Store, SubmitPhase, SubmitRejection};
pub use ticker::LoadingTicker;

use serde::{Deserialize, Serialize};

/// One question/answer pair in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

impl Exchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A message the user should see (rendered as a toast or printed to stderr)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: &'static str,
}

impl Notification {
    pub const fn success(message: &'static str) -> Self {
        Self {
            level: NotificationLevel::Success,
            message,
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            level: NotificationLevel::Error,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Everything that can go wrong from the user's point of view
///
/// Network failures carry no detail here: the cause is logged where it is
/// observed and the user only ever sees the fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Empty or whitespace-only draft (never reaches the gateway)
    Validation,
    Fetch,
    Submit,
    Clear,
}

impl Failure {
    pub fn notification(self) -> Notification {
        match self {
            Failure::Validation => Notification::error("Please enter a question"),
            Failure::Fetch => Notification::error("Failed to load conversations"),
            Failure::Submit => Notification::error("Something went wrong"),
            Failure::Clear => Notification::error("Failed to clear"),
        }
    }
}

/// Shown after a submit cycle completes
pub const ANSWER_RECEIVED: Notification = Notification::success("Answer received!");

/// Shown after the remote transcript was wiped
pub const CONVERSATIONS_CLEARED: Notification = Notification::success("Conversations cleared!");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_are_fixed() {
        assert_eq!(
            Failure::Validation.notification().message,
            "Please enter a question"
        );
        assert_eq!(
            Failure::Fetch.notification().message,
            "Failed to load conversations"
        );
        assert_eq!(Failure::Submit.notification().message, "Something went wrong");
        assert_eq!(Failure::Clear.notification().message, "Failed to clear");
        assert!(Failure::Clear.notification().is_error());
        assert!(!CONVERSATIONS_CLEARED.is_error());
    }

    #[test]
    fn exchange_deserializes_from_api_shape() {
        let exchanges: Vec<Exchange> =
            serde_json::from_str(r#"[{"question":"A","answer":"1","extra":true}]"#).unwrap();
        assert_eq!(exchanges, vec![Exchange::new("A", "1")]);
    }
}
