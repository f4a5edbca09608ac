//! Courier relay client

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use courier::{auth::basic_header, Credentials};

/// API client for a deployed relay
pub struct RelayClient {
    client: Client,
    base_url: String,
}

/// JSON body returned by `/webhook`
#[derive(Debug, Deserialize)]
pub struct RelayReply {
    pub status: String,
    pub message: String,
}

impl RelayClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to relay")?;
        Ok(resp.status().is_success())
    }

    /// Post a raw event body with Basic credentials
    pub async fn send_event(
        &self,
        credentials: &Credentials,
        body: String,
    ) -> Result<(StatusCode, RelayReply)> {
        let url = format!("{}/webhook", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, basic_header(credentials))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .context("Failed to connect to relay")?;

        let status = resp.status();
        let reply: RelayReply = resp
            .json()
            .await
            .with_context(|| format!("Unexpected response from relay ({})", status))?;

        Ok((status, reply))
    }
}
