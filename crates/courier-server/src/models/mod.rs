//! API Models (DTOs)
//!
//! Response bodies returned by the relay.

mod response;

pub use response::*;
