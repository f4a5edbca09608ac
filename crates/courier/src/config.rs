//! Relay configuration
//!
//! Built once at startup from a key/value source (Shuttle secrets on the
//! server, the process environment in the CLI) and passed around immutably.

use std::time::Duration;

use crate::domain::Credentials;

pub const ENV_CHAT_WEBHOOK_URL: &str = "GOOGLE_CHAT_WEBHOOK_URL";
pub const ENV_WEBHOOK_USER: &str = "ADO_WEBHOOK_USER";
pub const ENV_WEBHOOK_PASS: &str = "ADO_WEBHOOK_PASS";
pub const ENV_MENTION_TAG: &str = "ADO_MENTION_TAG";
pub const ENV_CHAT_TIMEOUT_SECS: &str = "CHAT_TIMEOUT_SECS";

/// Mention that lets a work item comment through to chat
pub const DEFAULT_MENTION_TAG: &str = "@Francisco Aliss";

/// Outbound chat delivery timeout
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Google Chat incoming webhook URL
    pub chat_webhook_url: Option<String>,
    /// Expected Basic auth username
    pub webhook_user: Option<String>,
    /// Expected Basic auth password
    pub webhook_pass: Option<String>,
    /// Substring a comment must contain to be relayed
    pub mention_tag: String,
    pub chat_timeout: Duration,
}

impl RelayConfig {
    /// Build from a lookup function; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let chat_timeout = match get(ENV_CHAT_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "Invalid {}, using default",
                        ENV_CHAT_TIMEOUT_SECS
                    );
                    DEFAULT_CHAT_TIMEOUT
                }
            },
            None => DEFAULT_CHAT_TIMEOUT,
        };

        Self {
            chat_webhook_url: get(ENV_CHAT_WEBHOOK_URL),
            webhook_user: get(ENV_WEBHOOK_USER),
            webhook_pass: get(ENV_WEBHOOK_PASS),
            mention_tag: get(ENV_MENTION_TAG).unwrap_or_else(|| DEFAULT_MENTION_TAG.to_string()),
            chat_timeout,
        }
    }

    /// Build from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Expected credentials, only when both halves are configured
    pub fn expected_credentials(&self) -> Option<Credentials> {
        match (&self.webhook_user, &self.webhook_pass) {
            (Some(user), Some(pass)) => Some(Credentials::new(user.clone(), pass.clone())),
            _ => None,
        }
    }

    pub fn with_chat_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.chat_webhook_url = Some(url.into());
        self
    }

    pub fn with_credentials(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.webhook_user = Some(user.into());
        self.webhook_pass = Some(pass.into());
        self
    }

    pub fn with_mention_tag(mut self, tag: impl Into<String>) -> Self {
        self.mention_tag = tag.into();
        self
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            chat_webhook_url: None,
            webhook_user: None,
            webhook_pass: None,
            mention_tag: DEFAULT_MENTION_TAG.to_string(),
            chat_timeout: DEFAULT_CHAT_TIMEOUT,
        }
    }
}
