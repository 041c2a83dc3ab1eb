//! Remote gateway - the boundary to the question-answering API
//!
//! The rest of the crate depends only on the [`Gateway`] trait:
//!
//! ```text
//! Store ──Request──▶ dispatch() ──▶ dyn Gateway ──▶ HTTP / mock
//!   ▲                    │
//!   └──────Outcome───────┘
//! ```
//!
//! Gateways return the transcript newest-first. The remote API stores
//! oldest-first, so [`HttpGateway`] reverses what it receives.

mod http;

pub use http::HttpGateway;

use crate::conversation::{Exchange, Outcome, Request};
use async_trait::async_trait;
use std::fmt;

/// Errors from the remote API
#[derive(Debug)]
pub enum GatewayError {
    /// Connection, timeout or other transport failure
    Network(String),
    /// Non-2xx response
    Status { status: u16, body: String },
    /// Response body was not the expected JSON
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "API error ({})", status)
                } else {
                    write!(f, "API error ({}): {}", status, body)
                }
            }
            Self::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Capability set of the remote conversation API
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    /// Full transcript, newest first
    async fn fetch_exchanges(&self) -> Result<Vec<Exchange>, GatewayError>;

    /// Post a question. The answer is observed by fetching again.
    async fn submit_question(&self, question: &str) -> Result<(), GatewayError>;

    /// Delete every exchange on the remote side
    async fn clear_exchanges(&self) -> Result<(), GatewayError>;
}

/// Run one request against the gateway, emitting each outcome as it lands
///
/// A submit emits two outcomes when the question is accepted: `Submitted`
/// and then `Answered` with the refreshed transcript.
pub async fn dispatch<F>(gateway: &dyn Gateway, request: Request, mut emit: F)
where
    F: FnMut(Outcome),
{
    match request {
        Request::Refresh => emit(Outcome::Loaded(gateway.fetch_exchanges().await)),
        Request::Submit(question) => {
            let submitted = gateway.submit_question(&question).await;
            let accepted = submitted.is_ok();
            emit(Outcome::Submitted(submitted));
            if accepted {
                emit(Outcome::Answered(gateway.fetch_exchanges().await));
            }
        }
        Request::Clear => emit(Outcome::Cleared(gateway.clear_exchanges().await)),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Call, ScriptedGateway};
    use super::*;

    #[tokio::test]
    async fn submit_emits_submitted_then_answered() {
        let gateway = ScriptedGateway::default();
        let mut outcomes = Vec::new();
        dispatch(&gateway, Request::Submit("A".to_string()), |o| outcomes.push(o)).await;

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], Outcome::Submitted(Ok(()))));
        match &outcomes[1] {
            Outcome::Answered(Ok(list)) => assert_eq!(list, &vec![Exchange::new("A", "answer to A")]),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(gateway.calls(), vec![Call::Submit("A".to_string()), Call::Fetch]);
    }

    #[tokio::test]
    async fn rejected_submit_skips_refresh() {
        let gateway = ScriptedGateway::default();
        gateway.fail_next_submit();
        let mut outcomes = Vec::new();
        dispatch(&gateway, Request::Submit("A".to_string()), |o| outcomes.push(o)).await;

        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], Outcome::Submitted(Err(_))));
        assert_eq!(gateway.calls(), vec![Call::Submit("A".to_string())]);
    }

    #[test]
    fn error_display() {
        let err = GatewayError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "API error (500)");

        let err = GatewayError::Network("timed out".to_string());
        assert_eq!(err.to_string(), "Network error: timed out");
    }
}
