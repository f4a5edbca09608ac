//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems.
//!
//! Implementations live in integration crates
//! (e.g. courier-integration-gchat).

pub mod notifier;

// Re-exports
pub use notifier::*;
