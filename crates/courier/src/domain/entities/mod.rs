//! Domain Entities
//!
//! - InboundEvent: Azure DevOps service hook payload
//! - ChatMessage: Google Chat Cards V2 message
//! - ChatDelivery: outcome of a single delivery attempt
//! - Credentials: Basic authentication pair

mod card;
mod credentials;
mod delivery;
mod event;

pub use card::*;
pub use credentials::*;
pub use delivery::*;
pub use event::*;
