//! Courier API Routes
//!
//! - /health - Liveness probe
//! - /webhook - Azure DevOps service hook receiver
//! - /swagger-ui - API documentation

pub mod health;
pub mod swagger;
pub mod webhook;
