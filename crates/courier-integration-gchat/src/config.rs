//! Google Chat configuration

use std::time::Duration;

use courier::RelayConfig;
use serde::{Deserialize, Serialize};

/// Configuration for Google Chat delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleChatConfig {
    /// Incoming webhook URL (including its `key`/`token` query)
    pub webhook_url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl GoogleChatConfig {
    /// Create a configuration for a webhook URL
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(webhook_url.into()),
            ..Self::default()
        }
    }

    /// Derive from the relay configuration
    pub fn from_relay(config: &RelayConfig) -> Self {
        Self {
            webhook_url: config.chat_webhook_url.clone(),
            timeout_secs: config.chat_timeout.as_secs(),
            ..Self::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GoogleChatConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: courier::config::DEFAULT_CHAT_TIMEOUT.as_secs(),
            user_agent: format!("Courier-Relay/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
