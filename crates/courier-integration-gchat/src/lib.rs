//! Google Chat Integration for Courier
//!
//! Delivers Cards V2 messages to a Google Chat incoming webhook.
//!
//! # Usage
//!
//! ```rust,ignore
//! use courier_integration_gchat::{GoogleChatConfig, GoogleChatNotifier};
//!
//! let config = GoogleChatConfig::new("https://chat.googleapis.com/v1/spaces/.../messages?key=...");
//! let notifier = GoogleChatNotifier::new(config)?;
//! let delivery = notifier.deliver(&message).await;
//! ```

mod config;
mod notifier;

pub use config::GoogleChatConfig;
pub use notifier::GoogleChatNotifier;
