//! API errors
//!
//! Every failure the relay reports maps to one status code and one JSON body.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::RelayResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Authentication Required")]
    Unauthorized,

    #[error("{}", .0.body_text())]
    UnreadableBody(#[from] BytesRejection),

    #[error("Invalid JSON payload")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Webhook processor configuration error")]
    NotConfigured,

    #[error("Webhook received but failed to send notification to Google Chat")]
    DeliveryFailed,

    #[error("Internal Server Error processing webhook")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::UnreadableBody(rejection) => rejection.status(),
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::DeliveryFailed | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(RelayResponse::error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ApiError::InvalidPayload(parse_error).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DeliveryFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
