//! Sequential conversation driver
//!
//! Owns a [`Store`] and a gateway and runs each operation to completion before
//! returning. Headless subcommands use it directly; the TUI runs the same
//! `dispatch` on a spawned task instead so drawing never waits on the network.

use super::{Exchange, Notification, Request, Store};
use crate::gateway::{dispatch, Gateway};
use std::sync::Arc;

pub struct Session {
    store: Store,
    gateway: Arc<dyn Gateway>,
}

impl Session {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            store: Store::new(),
            gateway,
        }
    }

    #[allow(dead_code)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn exchanges(&self) -> &[Exchange] {
        self.store.exchanges()
    }

    /// Re-fetch the transcript
    pub async fn refresh(&mut self) -> Vec<Notification> {
        self.run(Request::Refresh).await
    }

    /// Submit the current draft (validated first)
    pub async fn submit(&mut self) -> Vec<Notification> {
        match self.store.begin_submit() {
            Ok(request) => self.run(request).await,
            Err(rejection) => rejection.notification().into_iter().collect(),
        }
    }

    /// Set the draft and submit it
    pub async fn ask(&mut self, question: impl Into<String>) -> Vec<Notification> {
        self.store.set_draft(question);
        self.submit().await
    }

    /// Wipe the remote transcript
    pub async fn clear(&mut self) -> Vec<Notification> {
        self.run(Request::Clear).await
    }

    async fn run(&mut self, request: Request) -> Vec<Notification> {
        tracing::debug!(gateway = self.gateway.name(), ?request, "Running request");
        let mut notifications = Vec::new();
        let store = &mut self.store;
        dispatch(self.gateway.as_ref(), request, |outcome| {
            notifications.extend(store.apply(outcome));
        })
        .await;
        notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{Failure, ANSWER_RECEIVED, CONVERSATIONS_CLEARED};
    use crate::gateway::testing::{Call, ScriptedGateway};

    fn remote_ab() -> Vec<Exchange> {
        vec![Exchange::new("A", "1"), Exchange::new("B", "2")]
    }

    fn session_with(gateway: &Arc<ScriptedGateway>) -> Session {
        Session::new(gateway.clone() as Arc<dyn Gateway>)
    }

    #[tokio::test]
    async fn displays_newest_first() {
        let gateway = Arc::new(ScriptedGateway::with_remote(remote_ab()));
        let mut session = session_with(&gateway);

        assert!(session.refresh().await.is_empty());
        assert_eq!(
            session.exchanges(),
            &[Exchange::new("B", "2"), Exchange::new("A", "1")]
        );
    }

    #[tokio::test]
    async fn refresh_is_idempotent() {
        let gateway = Arc::new(ScriptedGateway::with_remote(remote_ab()));
        let mut session = session_with(&gateway);

        session.refresh().await;
        let first = session.exchanges().to_vec();
        session.refresh().await;
        assert_eq!(session.exchanges(), first.as_slice());
    }

    #[tokio::test]
    async fn submit_cycle_ends_idle_with_fresh_transcript() {
        let gateway = Arc::new(ScriptedGateway::with_remote(remote_ab()));
        let mut session = session_with(&gateway);

        let notes = session.ask("C").await;
        assert_eq!(notes, vec![ANSWER_RECEIVED]);
        assert!(!session.store().is_busy());
        assert_eq!(session.store().draft(), "");
        assert_eq!(session.exchanges()[0], Exchange::new("C", "answer to C"));
        assert_eq!(session.exchanges().len(), 3);
        assert_eq!(
            gateway.calls(),
            vec![Call::Submit("C".to_string()), Call::Fetch]
        );
    }

    #[tokio::test]
    async fn blank_drafts_never_reach_the_gateway() {
        let gateway = Arc::new(ScriptedGateway::with_remote(remote_ab()));
        let mut session = session_with(&gateway);

        for draft in ["", "  ", "\n\t "] {
            let notes = session.ask(draft).await;
            assert_eq!(notes.len(), 1);
            assert_eq!(notes[0].message, "Please enter a question");
            assert!(!session.store().is_busy());
        }
        assert!(gateway.calls().is_empty());
        assert!(session.exchanges().is_empty());
    }

    #[tokio::test]
    async fn failed_submit_keeps_draft_for_retry() {
        let gateway = Arc::new(ScriptedGateway::with_remote(remote_ab()));
        let mut session = session_with(&gateway);
        session.refresh().await;

        gateway.fail_next_submit();
        let notes = session.ask("C").await;
        assert_eq!(notes, vec![Failure::Submit.notification()]);
        assert_eq!(session.store().draft(), "C");
        assert!(!session.store().is_busy());
        assert_eq!(session.exchanges().len(), 2);

        // Retry with the retained draft
        assert_eq!(session.submit().await, vec![ANSWER_RECEIVED]);
        assert_eq!(session.exchanges().len(), 3);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_transcript_unchanged() {
        let gateway = Arc::new(ScriptedGateway::with_remote(remote_ab()));
        let mut session = session_with(&gateway);
        session.refresh().await;
        let before = session.exchanges().to_vec();

        gateway.fail_next_fetch();
        let notes = session.refresh().await;
        assert_eq!(notes, vec![Failure::Fetch.notification()]);
        assert_eq!(session.exchanges(), before.as_slice());
    }

    #[tokio::test]
    async fn clear_success_and_failure() {
        let gateway = Arc::new(ScriptedGateway::with_remote(remote_ab()));
        let mut session = session_with(&gateway);
        session.refresh().await;

        gateway.fail_next_clear();
        assert_eq!(session.clear().await, vec![Failure::Clear.notification()]);
        assert_eq!(session.exchanges().len(), 2);

        assert_eq!(session.clear().await, vec![CONVERSATIONS_CLEARED]);
        assert!(session.exchanges().is_empty());

        // Clear does not re-fetch
        assert_eq!(
            gateway.calls(),
            vec![Call::Fetch, Call::Clear, Call::Clear]
        );
    }
}
