//! InboundEvent - Azure DevOps service hook payload
//!
//! Service hook bodies are large and vary per event type, so the payload is
//! kept as a loose JSON tree and read through [`crate::fields`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event type discriminators the relay knows how to format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// `workitem.commented`
    WorkItemCommented,
    /// `git.pullrequest.created`
    PullRequestCreated,
    /// Anything else; carries the raw discriminator for logging
    Other(String),
}

impl EventKind {
    pub const WORK_ITEM_COMMENTED: &'static str = "workitem.commented";
    pub const PULL_REQUEST_CREATED: &'static str = "git.pullrequest.created";

    /// Map an `eventType` value to a kind (exact, case-sensitive match)
    pub fn from_discriminator(event_type: &str) -> Self {
        match event_type {
            Self::WORK_ITEM_COMMENTED => Self::WorkItemCommented,
            Self::PULL_REQUEST_CREATED => Self::PullRequestCreated,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkItemCommented => write!(f, "{}", Self::WORK_ITEM_COMMENTED),
            Self::PullRequestCreated => write!(f, "{}", Self::PULL_REQUEST_CREATED),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A parsed service hook body
///
/// Any JSON value is accepted. Non-object bodies behave like an event with no
/// fields at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InboundEvent {
    payload: Value,
}

impl InboundEvent {
    /// Placeholder used when `eventType` is missing
    pub const UNKNOWN_EVENT_TYPE: &'static str = "unknown";

    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// Parse a raw request body; an empty body is not valid JSON
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Self::new)
    }

    /// Raw `eventType` text, or `unknown`
    pub fn event_type(&self) -> &str {
        self.payload
            .get("eventType")
            .and_then(Value::as_str)
            .unwrap_or(Self::UNKNOWN_EVENT_TYPE)
    }

    pub fn kind(&self) -> EventKind {
        EventKind::from_discriminator(self.event_type())
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_discriminator() {
        assert_eq!(
            EventKind::from_discriminator("workitem.commented"),
            EventKind::WorkItemCommented
        );
        assert_eq!(
            EventKind::from_discriminator("git.pullrequest.created"),
            EventKind::PullRequestCreated
        );
        assert_eq!(
            EventKind::from_discriminator("Git.PullRequest.Created"),
            EventKind::Other("Git.PullRequest.Created".to_string())
        );
    }

    #[test]
    fn test_missing_event_type_is_unknown() {
        let event = InboundEvent::new(json!({"resource": {}}));
        assert_eq!(event.event_type(), "unknown");
        assert!(!event.kind().is_recognized());
    }

    #[test]
    fn test_empty_body_is_rejected() {
        assert!(InboundEvent::from_slice(b"").is_err());
        assert!(InboundEvent::from_slice(b"   \n").is_err());
    }

    #[test]
    fn test_invalid_body_is_rejected() {
        assert!(InboundEvent::from_slice(b"{not json").is_err());
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        let event = InboundEvent::from_slice(b"[1, 2, 3]").unwrap();
        assert_eq!(event.event_type(), "unknown");
        assert_eq!(event.payload(), &json!([1, 2, 3]));
    }
}
