use std::any::Any;
use std::sync::Arc;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use courier::{ChatNotifier, EventFormatter, RelayConfig};
use courier_integration_gchat::{GoogleChatConfig, GoogleChatNotifier};

mod auth;
mod error;
mod models;
mod routes;

use error::ApiError;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub formatter: Arc<EventFormatter>,
    pub notifier: Arc<dyn ChatNotifier>,
}

impl AppState {
    pub fn new(config: RelayConfig, notifier: Arc<dyn ChatNotifier>) -> Self {
        Self {
            formatter: Arc::new(EventFormatter::from_config(&config)),
            config: Arc::new(config),
            notifier,
        }
    }
}

/// Build the relay router
pub fn app(state: AppState) -> Router {
    // Service hook route (POST + Basic auth)
    let webhook_routes = routes::webhook::router().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_basic_auth,
    ));

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(webhook_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Error processing webhook payload");
    ApiError::Internal.into_response()
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📮 Courier relay initializing...");

    let config = RelayConfig::from_lookup(|key| secrets.get(key));

    if config.expected_credentials().is_some() {
        tracing::info!("🔐 Basic authentication enabled");
    } else {
        tracing::error!(
            "⚠️  {} / {} not set - every webhook call will be rejected",
            courier::config::ENV_WEBHOOK_USER,
            courier::config::ENV_WEBHOOK_PASS
        );
    }

    if config.chat_webhook_url.is_some() {
        tracing::info!(
            timeout_secs = config.chat_timeout.as_secs(),
            "💬 Google Chat delivery enabled"
        );
    } else {
        tracing::error!(
            "⚠️  No {} set - webhook calls will fail with a configuration error",
            courier::config::ENV_CHAT_WEBHOOK_URL
        );
    }

    tracing::info!(mention = %config.mention_tag, "🏷️  Comment notifications gated on mention");

    let notifier = GoogleChatNotifier::new(GoogleChatConfig::from_relay(&config))
        .map_err(anyhow::Error::from)?;

    let router = app(AppState::new(config, Arc::new(notifier)));

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Courier ready - POST service hooks to /webhook");

    Ok(router.into())
}
