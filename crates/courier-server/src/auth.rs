//! Inbound request gate
//!
//! Runs before the webhook handler: non-POST requests get 405, requests
//! without matching Basic credentials get 401.

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::AppState;

/// Authentication middleware
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if request.method() != Method::POST {
        tracing::warn!(method = %request.method(), "Received non-POST request");
        return Err(ApiError::MethodNotAllowed);
    }

    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if !courier::authenticate(&state.config, authorization).is_authenticated() {
        tracing::error!("Webhook authentication failed");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
