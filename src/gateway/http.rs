//! HTTP gateway over reqwest
//!
//! Endpoints (relative to the configured base URL):
//! - `GET /conversations` → `[{question, answer}]`, oldest first
//! - `POST /query` with `{question}` → body ignored
//! - `DELETE /conversations` → body ignored

use super::{Gateway, GatewayError};
use crate::conversation::Exchange;
use async_trait::async_trait;
use std::time::Duration;

pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway for `base_url`. A zero timeout means requests never time out.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            GatewayError::Network(format!("Failed to create HTTP client: {}", e))
        })?;

        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::info!("HTTP gateway ready: {} (timeout: {:?})", base_url, timeout);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn transport errors and non-2xx statuses into `GatewayError`
    async fn check(
        result: reqwest::Result<reqwest::Response>,
    ) -> Result<reqwest::Response, GatewayError> {
        let response = result.map_err(|e| GatewayError::Network(e.to_string()))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_exchanges(&self) -> Result<Vec<Exchange>, GatewayError> {
        tracing::debug!("GET {}/conversations", self.base_url);
        let response = Self::check(self.client.get(self.url("/conversations")).send().await).await?;

        let mut exchanges: Vec<Exchange> = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        exchanges.reverse();

        tracing::debug!(count = exchanges.len(), "Fetched conversations");
        Ok(exchanges)
    }

    async fn submit_question(&self, question: &str) -> Result<(), GatewayError> {
        tracing::debug!("POST {}/query", self.base_url);
        Self::check(
            self.client
                .post(self.url("/query"))
                .json(&serde_json::json!({ "question": question }))
                .send()
                .await,
        )
        .await?;
        Ok(())
    }

    async fn clear_exchanges(&self) -> Result<(), GatewayError> {
        tracing::debug!("DELETE {}/conversations", self.base_url);
        Self::check(self.client.delete(self.url("/conversations")).send().await).await?;
        Ok(())
    }
}
