//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{HealthCheck, RelayResponse, ResponseStatus};

#[derive(OpenApi)]
#[openapi(
    paths(super::health::health_check, super::webhook::receive_event),
    components(schemas(RelayResponse, ResponseStatus, HealthCheck)),
    tags(
        (name = "Webhook", description = "Azure DevOps service hook receiver"),
        (name = "Health", description = "Liveness")
    ),
    info(
        title = "Courier API",
        description = "Relays Azure DevOps service hooks to Google Chat"
    )
)]
pub struct ApiDoc;
