use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::handlers::{
    datadog_event_webhook, datadog_webhook, health_check, service_info, test_webhook,
};
use crate::models::{ApiResponse, ProcessingResult};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Webhook routes get their own panic responders so an unexpected failure
    // still answers with the enveloped 500 each endpoint documents.
    let monitor_webhook = Router::new()
        .route("/api/datadog/webhook", post(datadog_webhook))
        .layer(CatchPanicLayer::custom(monitor_webhook_panic));
    let event_webhook = Router::new()
        .route("/api/datadog/webhook/events", post(datadog_event_webhook))
        .layer(CatchPanicLayer::custom(event_webhook_panic));

    Router::new()
        .merge(monitor_webhook)
        .merge(event_webhook)
        .route("/api/datadog/test", get(test_webhook).post(test_webhook))
        .route("/api/health", get(health_check))
        .route("/api/info", get(service_info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn monitor_webhook_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(detail = panic_detail(&*err), "webhook handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<ProcessingResult>::error("Internal server error")),
    )
        .into_response()
}

fn event_webhook_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(detail = panic_detail(&*err), "event webhook handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<ProcessingResult>::error(
            "Failed to process event webhook",
        )),
    )
        .into_response()
}

fn panic_detail(err: &(dyn Any + Send)) -> &str {
    if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else if let Some(message) = err.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
