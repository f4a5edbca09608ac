//! Chat Notifier Port
//!
//! Abstract interface for delivering a formatted card to a chat platform.

use async_trait::async_trait;

use crate::domain::entities::{ChatDelivery, ChatMessage};

/// Chat delivery interface
///
/// Implementations make at most one attempt per call and never return an
/// error: every failure (missing configuration, transport error, non-2xx
/// response) is folded into a failed [`ChatDelivery`].
///
/// # Example
///
/// ```rust,ignore
/// use courier::ports::ChatNotifier;
///
/// struct GoogleChatNotifier { /* reqwest client */ }
///
/// #[async_trait]
/// impl ChatNotifier for GoogleChatNotifier {
///     async fn deliver(&self, message: &ChatMessage) -> ChatDelivery {
///         // POST the card JSON to the webhook URL
///     }
///
///     fn name(&self) -> &str {
///         "google_chat"
///     }
/// }
/// ```
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    /// Deliver a message to the chat webhook
    async fn deliver(&self, message: &ChatMessage) -> ChatDelivery;

    /// Get the platform name (e.g., "google_chat")
    fn name(&self) -> &str;
}
