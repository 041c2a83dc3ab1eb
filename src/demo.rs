// Demo mode: an in-process stand-in for the question-answering API
//
// Serves the same three routes as the real backend on a random localhost port
// so the client can be shown off (and tested) without network access. Answers
// are canned and delayed by a configurable latency, which gives the loading
// messages time to cycle.
//
// Run with: ASKME_DEMO=1 cargo run --release   (or `askme --demo`)

use crate::conversation::Exchange;
use anyhow::{Context, Result};
use axum::{extract::State, routing::{get, post}, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Canned answers, picked by question length so repeats stay stable
const ANSWERS: &[&str] = &[
    "Short answer: yes, as long as the inputs stay within range.",
    "It depends on the context, but the common approach is to measure first.",
    "Rust guarantees memory safety through ownership and borrowing.",
    "The quickest route is usually the simplest one that still works.",
    "Forty-two. Everything else is commentary.",
];

#[derive(Clone)]
struct BackendState {
    /// Oldest first, like the real API
    exchanges: Arc<Mutex<Vec<Exchange>>>,
    latency: Duration,
}

#[derive(Deserialize)]
struct Query {
    question: String,
}

/// Running mock backend. Shuts down when dropped.
pub struct MockBackend {
    base_url: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl MockBackend {
    /// Bind to a random localhost port and start serving
    pub async fn spawn(latency: Duration) -> Result<Self> {
        let state = BackendState {
            exchanges: Arc::new(Mutex::new(Vec::new())),
            latency,
        };

        let app = Router::new()
            .route(
                "/conversations",
                get(list_conversations).delete(delete_conversations),
            )
            .route("/query", post(ask_question))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind demo backend")?;
        let addr = listener
            .local_addr()
            .context("Failed to read demo backend address")?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = server.await {
                tracing::error!("Demo backend failed: {}", e);
            }
        });

        let base_url = format!("http://{}", addr);
        tracing::info!("Demo backend listening on {}", base_url);

        Ok(Self {
            base_url,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop serving and wait for in-flight requests to finish
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        tracing::debug!("Demo backend stopped");
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn canned_answer(question: &str) -> String {
    let question = question.trim();
    let pick = ANSWERS[question.chars().count() % ANSWERS.len()];
    format!("{} (you asked: \"{}\")", pick, question)
}

async fn list_conversations(State(state): State<BackendState>) -> Json<Vec<Exchange>> {
    let exchanges = state
        .exchanges
        .lock()
        .map(|list| list.clone())
        .unwrap_or_default();
    Json(exchanges)
}

async fn ask_question(State(state): State<BackendState>, Json(query): Json<Query>) -> Json<Value> {
    if !state.latency.is_zero() {
        tokio::time::sleep(state.latency).await;
    }

    let answer = canned_answer(&query.question);
    if let Ok(mut list) = state.exchanges.lock() {
        list.push(Exchange::new(query.question, answer.clone()));
    }
    Json(json!({ "answer": answer }))
}

async fn delete_conversations(State(state): State<BackendState>) -> Json<Value> {
    let deleted = state
        .exchanges
        .lock()
        .map(|mut list| list.drain(..).count())
        .unwrap_or(0);
    Json(json!({ "deleted_count": deleted }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_answers_echo_the_question() {
        let answer = canned_answer("  what is rust?  ");
        assert!(answer.ends_with("(you asked: \"what is rust?\")"));
        assert_eq!(answer, canned_answer("what is rust?"));
    }

    #[tokio::test]
    async fn serves_oldest_first() {
        let backend = MockBackend::spawn(Duration::ZERO).await.unwrap();
        let client = reqwest::Client::new();
        let base = backend.base_url().to_string();

        for q in ["first", "second"] {
            let response = client
                .post(format!("{}/query", base))
                .json(&json!({ "question": q }))
                .send()
                .await
                .unwrap();
            assert!(response.status().is_success());
        }

        let list: Vec<Exchange> = client
            .get(format!("{}/conversations", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(list[0].question, "first");
        assert_eq!(list[1].question, "second");

        let deleted: Value = client
            .delete(format!("{}/conversations", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(deleted["deleted_count"], 2);

        backend.shutdown().await;
    }
}
