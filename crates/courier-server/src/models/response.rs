//! Relay response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MSG_NOTIFICATION_SENT: &str = "Webhook received and notification sent";
pub const MSG_NO_NOTIFICATION: &str = "Webhook received, no notification required";

/// Body of every `/webhook` response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelayResponse {
    pub status: ResponseStatus,
    /// Human-readable outcome
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl RelayResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
}
