//! ChatDelivery - Outcome of a chat webhook delivery
//!
//! Exactly one attempt is made per inbound event; the record exists so the
//! caller can log what happened and collapse it to a pass/fail signal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatDelivery {
    pub id: Uuid,
    /// Card identifier of the delivered message
    pub card_id: Option<String>,
    pub status: DeliveryStatus,
    pub status_code: Option<u16>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    Success,
    Failed,
}

impl ChatDelivery {
    /// Create a new pending delivery
    pub fn new(card_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id,
            status: DeliveryStatus::Pending,
            status_code: None,
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Mark as successful
    pub fn success(mut self, status_code: u16) -> Self {
        self.status = DeliveryStatus::Success;
        self.status_code = Some(status_code);
        self.completed_at = Some(Utc::now());
        self
    }

    /// Mark as failed
    pub fn failed(mut self, status_code: Option<u16>, error: impl Into<String>) -> Self {
        self.status = DeliveryStatus::Failed;
        self.status_code = status_code;
        self.error = Some(error.into());
        self.completed_at = Some(Utc::now());
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == DeliveryStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_lifecycle() {
        let pending = ChatDelivery::new(Some("pr-1".to_string()));
        assert_eq!(pending.status, DeliveryStatus::Pending);
        assert!(!pending.is_success());

        let ok = pending.clone().success(200);
        assert!(ok.is_success());
        assert_eq!(ok.status_code, Some(200));
        assert!(ok.completed_at.is_some());

        let failed = pending.failed(Some(503), "Service Unavailable");
        assert!(!failed.is_success());
        assert_eq!(failed.error.as_deref(), Some("Service Unavailable"));
    }
}
