use async_trait::async_trait;
use flowboard_types::GraphSnapshot;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

use crate::builder::GatewayBuilder;
use crate::config::GatewayConfig;
use crate::error::{PersistError, Result};
use crate::gateway::PersistenceGateway;
use crate::models::{FlowKey, FlowSummary, SaveReceipt};

/// HTTP client for a flows backend
///
/// Speaks `POST /flows`, `GET /flows/{key}`, `GET /flows` and
/// `DELETE /flows/{key}` against the configured base URL.
pub struct HttpFlowGateway {
    client: Client,
    base_url: Url,
    max_retries: u32,
    retry_backoff: Duration,
}

impl HttpFlowGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| PersistError::Config(format!("Invalid base url '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(PersistError::Config(format!(
                "Base url '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PersistError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    /// Gateway configured from `FLOWBOARD_API_URL` or the local default
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env())
    }

    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `{base}/flows` or `{base}/flows/{key}`, with the key percent-encoded
    fn flows_url(&self, key: Option<&FlowKey>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("flows");
            if let Some(key) = key {
                segments.push(key.as_str());
            }
        }
        url
    }

    /// Send a request, retrying transport failures up to `retries` times
    async fn send<F>(&self, build: F, retries: u32) -> Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            match build().send().await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < retries && (e.is_connect() || e.is_timeout()) => {
                    attempt += 1;
                    tracing::warn!(attempt, error = %e, "Flow request failed, retrying");
                    tokio::time::sleep(self.retry_backoff * attempt).await;
                }
                Err(e) => return Err(PersistError::Transport(e.to_string())),
            }
        }
    }

    /// Map non-success statuses onto the error taxonomy
    async fn check(response: Response, key: Option<&FlowKey>) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());

        if status == StatusCode::NOT_FOUND {
            if let Some(key) = key {
                return Err(PersistError::NotFound(key.to_string()));
            }
        }

        tracing::error!(status = %status, body = %body, "Flows backend rejected request");
        Err(PersistError::Server {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Pull a human readable message out of an error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["error", "detail", "message"]
                .iter()
                .find_map(|field| v.get(*field).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}

/// `GET /flows/{key}` body: a stored record `{id, data, ...}`, or a bare
/// snapshot from older backends. A record whose `data` does not decode is an
/// error, never a bare snapshot.
fn snapshot_from_body(mut body: Value) -> Result<GraphSnapshot> {
    let value = match body.get_mut("data") {
        Some(data) => data.take(),
        None => body,
    };
    serde_json::from_value(value).map_err(|e| PersistError::InvalidResponse(e.to_string()))
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| PersistError::Transport(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| PersistError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl PersistenceGateway for HttpFlowGateway {
    async fn save(&self, snapshot: &GraphSnapshot) -> Result<SaveReceipt> {
        let url = self.flows_url(None);
        // A retried POST could store the flow twice
        let response = self
            .send(|| self.client.post(url.clone()).json(snapshot), 0)
            .await?;
        let response = Self::check(response, None).await?;
        let receipt: SaveReceipt = decode(response).await?;

        tracing::info!(flow_id = %receipt.id, "Flow saved");
        Ok(receipt)
    }

    async fn load(&self, key: &FlowKey) -> Result<GraphSnapshot> {
        let url = self.flows_url(Some(key));
        let response = self
            .send(|| self.client.get(url.clone()), self.max_retries)
            .await?;
        let response = Self::check(response, Some(key)).await?;

        let snapshot = snapshot_from_body(decode(response).await?)?;
        tracing::debug!(key = %key, nodes = snapshot.node_count(), "Flow loaded");
        Ok(snapshot)
    }

    async fn list(&self) -> Result<Vec<FlowSummary>> {
        let url = self.flows_url(None);
        let response = self
            .send(|| self.client.get(url.clone()), self.max_retries)
            .await?;
        let response = Self::check(response, None).await?;
        decode(response).await
    }

    async fn delete(&self, key: &FlowKey) -> Result<()> {
        let url = self.flows_url(Some(key));
        let response = self
            .send(|| self.client.delete(url.clone()), self.max_retries)
            .await?;
        Self::check(response, Some(key)).await?;

        tracing::info!(key = %key, "Flow deleted");
        Ok(())
    }
}
