// Conversation state store and submit-cycle state machine
//
// The Store holds the only mutable chat state: draft, transcript, submit phase
// and loading stage. Network results never touch it directly. They arrive as
// `Outcome`s and `apply()` decides what changes and what the user is told.
//
// Submit cycle:
//
//   [Idle] ──begin_submit (draft non-empty)──▶ [Submitting]
//     ▲                                             │
//     │◀────────Submitted(Err): keep draft──────────┤
//     │                                             │ Submitted(Ok)
//     │                                             ▼
//     └──────Answered: clear draft, notify──── [Refreshing]
//
// Empty drafts are rejected before any request exists. Clear and Refresh do not
// touch the phase, so they may interleave with a submit cycle; whichever
// transcript arrives last wins.

use super::{
    Exchange, Failure, LoadingStage, Notification, ANSWER_RECEIVED, CONVERSATIONS_CLEARED,
};
use crate::gateway::GatewayError;

/// Where the current submit cycle is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Question is being posted
    Submitting,
    /// Question accepted, re-fetching the transcript
    Refreshing,
}

/// Work for the gateway, produced by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Refresh,
    Submit(String),
    Clear,
}

/// Result of gateway work, fed back into [`Store::apply`]
#[derive(Debug)]
pub enum Outcome {
    /// Plain transcript fetch (mount, manual refresh)
    Loaded(Result<Vec<Exchange>, GatewayError>),
    /// The question POST finished
    Submitted(Result<(), GatewayError>),
    /// The fetch that follows an accepted question
    Answered(Result<Vec<Exchange>, GatewayError>),
    Cleared(Result<(), GatewayError>),
}

/// Why a submit was refused without touching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    EmptyDraft,
    /// A submit cycle is already running (the action is disabled)
    InFlight,
}

impl SubmitRejection {
    pub fn notification(self) -> Option<Notification> {
        match self {
            SubmitRejection::EmptyDraft => Some(Failure::Validation.notification()),
            SubmitRejection::InFlight => None,
        }
    }
}

/// Chat state shared by every front-end
#[derive(Debug, Default)]
pub struct Store {
    draft: String,
    /// Newest first, exactly as returned by the gateway
    exchanges: Vec<Exchange>,
    phase: SubmitPhase,
    loading: LoadingStage,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }

    pub fn loading_stage(&self) -> LoadingStage {
        self.loading
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Edit the draft in place (typing, paste) without copying it
    pub fn edit_draft<R>(&mut self, f: impl FnOnce(&mut String) -> R) -> R {
        f(&mut self.draft)
    }

    pub fn set_exchanges(&mut self, exchanges: Vec<Exchange>) {
        self.exchanges = exchanges;
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.set_phase(if busy {
            SubmitPhase::Submitting
        } else {
            SubmitPhase::Idle
        });
    }

    fn set_phase(&mut self, phase: SubmitPhase) {
        self.phase = phase;
    }

    /// Advance the loading message; only moves while a submit cycle is running.
    /// Returns true if the stage changed.
    pub fn advance_loading_stage(&mut self) -> bool {
        if !self.is_busy() {
            return false;
        }
        self.loading.advance();
        true
    }

    /// Validate the draft and start a submit cycle
    pub fn begin_submit(&mut self) -> Result<Request, SubmitRejection> {
        if self.is_busy() {
            return Err(SubmitRejection::InFlight);
        }
        if self.draft.trim().is_empty() {
            return Err(SubmitRejection::EmptyDraft);
        }

        self.set_busy(true);
        self.loading.reset();
        tracing::debug!(chars = self.draft.chars().count(), "Submitting question");
        Ok(Request::Submit(self.draft.clone()))
    }

    /// Fold a gateway outcome into the state
    pub fn apply(&mut self, outcome: Outcome) -> Vec<Notification> {
        let mut notifications = Vec::new();

        match outcome {
            Outcome::Loaded(result) => {
                if let Some(note) = self.replace_transcript(result) {
                    notifications.push(note);
                }
            }
            Outcome::Submitted(Ok(())) => {
                self.set_phase(SubmitPhase::Refreshing);
            }
            Outcome::Submitted(Err(e)) => {
                tracing::warn!("Submit failed: {}", e);
                self.set_busy(false);
                notifications.push(Failure::Submit.notification());
            }
            Outcome::Answered(result) => {
                if let Some(note) = self.replace_transcript(result) {
                    notifications.push(note);
                }
                notifications.push(ANSWER_RECEIVED);
                self.set_draft(String::new());
                self.set_busy(false);
            }
            Outcome::Cleared(Ok(())) => {
                self.set_exchanges(Vec::new());
                notifications.push(CONVERSATIONS_CLEARED);
            }
            Outcome::Cleared(Err(e)) => {
                tracing::warn!("Clear failed: {}", e);
                notifications.push(Failure::Clear.notification());
            }
        }

        notifications
    }

    fn replace_transcript(
        &mut self,
        result: Result<Vec<Exchange>, GatewayError>,
    ) -> Option<Notification> {
        match result {
            Ok(exchanges) => {
                tracing::debug!(count = exchanges.len(), "Transcript replaced");
                self.set_exchanges(exchanges);
                None
            }
            Err(e) => {
                tracing::warn!("Fetch failed: {}", e);
                Some(Failure::Fetch.notification())
            }
        }
    }
}
