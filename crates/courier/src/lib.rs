//! Courier Domain Library
//!
//! Core types for relaying Azure DevOps service hooks to Google Chat.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): events, chat cards, delivery records, errors
//! - **Field access** (`fields`): defaulted reads over loosely-typed JSON
//! - **Formatter** (`formatter/`): event → optional chat card
//! - **Authentication** (`auth`): Basic credential checks
//! - **Configuration** (`config`): immutable relay settings
//! - **Ports** (`ports/`): the chat notifier interface
//!
//! # Usage
//!
//! ```rust
//! use courier::{EventFormatter, InboundEvent};
//! use serde_json::json;
//!
//! let event = InboundEvent::new(json!({
//!     "eventType": "git.pullrequest.created",
//!     "resource": {"pullRequestId": 7, "sourceRefName": "refs/heads/topic"}
//! }));
//! let card = EventFormatter::new("@Reviewer").format(&event);
//! assert_eq!(card.unwrap().card_id(), Some("pr-7"));
//! ```

pub mod auth;
pub mod config;
pub mod domain;
pub mod fields;
pub mod formatter;
pub mod ports;

// Re-export commonly used types
pub use auth::{authenticate, AuthOutcome};
pub use config::RelayConfig;
pub use domain::{
    CardHeader, ChatDelivery, ChatMessage, Credentials, DeliveryStatus, DomainError, EventKind,
    InboundEvent, Widget,
};
pub use formatter::EventFormatter;
pub use ports::ChatNotifier;
