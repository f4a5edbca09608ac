//! Google Chat webhook delivery
//!
//! Posts a card to the incoming webhook with reqwest. One attempt per call.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use courier::{ChatDelivery, ChatMessage, ChatNotifier, DomainError};

use crate::config::GoogleChatConfig;

const CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Google Chat implementation of ChatNotifier
pub struct GoogleChatNotifier {
    client: Client,
    config: GoogleChatConfig,
}

impl GoogleChatNotifier {
    pub fn new(config: GoogleChatConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                DomainError::ExternalService(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ChatNotifier for GoogleChatNotifier {
    async fn deliver(&self, message: &ChatMessage) -> ChatDelivery {
        let delivery = ChatDelivery::new(message.card_id().map(str::to_string));

        let Some(url) = self.config.webhook_url.as_deref() else {
            error!("Google Chat webhook URL is not set, cannot send message");
            return delivery.failed(None, "Google Chat webhook URL is not configured");
        };

        let body = match serde_json::to_vec(message) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to serialize chat message");
                return delivery.failed(None, format!("Failed to serialize message: {e}"));
            }
        };

        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(body)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                let status = resp.status().as_u16();
                info!(
                    delivery_id = %delivery.id,
                    status,
                    "Successfully sent message to Google Chat"
                );
                delivery.success(status)
            }
            Ok(resp) => {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                error!(
                    delivery_id = %delivery.id,
                    status,
                    body = %body,
                    "Google Chat rejected message"
                );
                delivery.failed(Some(status), format!("HTTP {status}: {body}"))
            }
            Err(e) => {
                error!(
                    delivery_id = %delivery.id,
                    timeout = e.is_timeout(),
                    error = %e,
                    "Failed to send message to Google Chat"
                );
                delivery.failed(None, e.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "google_chat"
    }
}
