//! Webhook Route - Azure DevOps service hook receiver
//!
//! Authentication and the method check run in [`crate::auth`] before this
//! handler sees the request.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    routing::any,
    Json, Router,
};

use courier::InboundEvent;

use crate::error::ApiError;
use crate::models::{RelayResponse, MSG_NOTIFICATION_SENT, MSG_NO_NOTIFICATION};
use crate::AppState;

/// Receive a service hook event and relay it to Google Chat if warranted
#[utoipa::path(
    post,
    path = "/webhook",
    request_body(
        content = Object,
        description = "Azure DevOps service hook payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Processed; notification sent or not required", body = RelayResponse),
        (status = 400, description = "Body is not valid JSON", body = RelayResponse),
        (status = 401, description = "Missing or invalid Basic credentials", body = RelayResponse),
        (status = 405, description = "Method other than POST", body = RelayResponse),
        (status = 413, description = "Body exceeds the size limit", body = RelayResponse),
        (status = 500, description = "Chat delivery failed or relay not configured", body = RelayResponse)
    ),
    tag = "Webhook"
)]
pub async fn receive_event(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RelayResponse>, ApiError> {
    let body = body.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to read request body");
    })?;

    let event = InboundEvent::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Failed to decode JSON payload");
        ApiError::InvalidPayload(e)
    })?;

    tracing::info!(event_type = %event.event_type(), "Webhook received");

    if state.config.chat_webhook_url.is_none() {
        tracing::error!("Google Chat webhook URL is not configured, cannot send notification");
        return Err(ApiError::NotConfigured);
    }

    let Some(message) = state.formatter.format(&event) else {
        tracing::info!(
            event_type = %event.event_type(),
            "No notification required for this event"
        );
        return Ok(Json(RelayResponse::success(MSG_NO_NOTIFICATION)));
    };

    tracing::info!(
        card_id = message.card_id().unwrap_or_default(),
        notifier = state.notifier.name(),
        "Sending notification"
    );

    let delivery = state.notifier.deliver(&message).await;
    if delivery.is_success() {
        Ok(Json(RelayResponse::success(MSG_NOTIFICATION_SENT)))
    } else {
        tracing::error!(
            delivery_id = %delivery.id,
            status_code = ?delivery.status_code,
            error = ?delivery.error,
            "Notification delivery failed"
        );
        Err(ApiError::DeliveryFailed)
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", any(receive_event))
}
