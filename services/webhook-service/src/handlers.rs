use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::models::{
    ApiResponse, EndpointCatalog, HealthStatus, ProcessingResult, ServiceInfo, TestInfo,
};
use crate::payload::parse_payload;
use crate::service;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "Datadog Webhook Receiver";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const ENDPOINTS: [&str; 5] = [
    "POST /api/datadog/webhook",
    "POST /api/datadog/webhook/events",
    "GET|POST /api/datadog/test",
    "GET /api/health",
    "GET /api/info",
];

pub async fn datadog_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    tracing::info!("received datadog webhook");

    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(reason = err.message(), "rejected webhook payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<ProcessingResult>::error(err.message())),
            )
                .into_response();
        }
    };

    let signature = headers
        .get("x-webhook-signature")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !service::validate_signature(&body, signature) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<ProcessingResult>::error("Invalid signature")),
        )
            .into_response();
    }

    let result = service::process(&state, &payload);
    (
        StatusCode::OK,
        Json(ApiResponse::ok(result, "Webhook processed successfully")),
    )
        .into_response()
}

pub async fn datadog_event_webhook(
    State(state): State<AppState>,
    body: String,
) -> impl IntoResponse {
    tracing::info!("received datadog event webhook");

    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(reason = err.message(), "rejected event webhook payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<ProcessingResult>::error(err.message())),
            )
                .into_response();
        }
    };

    tracing::info!(
        event_type = payload.event_type.as_deref().unwrap_or_default(),
        event_title = payload.event_title.as_deref().unwrap_or_default(),
        "processing datadog event"
    );

    let result = service::process(&state, &payload);
    (
        StatusCode::OK,
        Json(ApiResponse::ok(result, "Event webhook processed successfully")),
    )
        .into_response()
}

pub async fn test_webhook(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("test endpoint called");

    let info = TestInfo {
        message: "Datadog webhook receiver is up",
        timestamp: crate::models::now_rfc3339(),
        environment: state.config.environment.clone(),
        version: VERSION,
        endpoints: ENDPOINTS.to_vec(),
    };
    Json(ApiResponse::ok(info, "Test successful"))
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthStatus {
        status: "Healthy",
        service: SERVICE_NAME,
        version: VERSION,
        timestamp: crate::models::now_rfc3339(),
        environment: state.config.environment.clone(),
        site_name: state.config.site_name.clone(),
        region: state.config.region.clone(),
    };
    Json(ApiResponse::ok(health, "Health check passed"))
}

pub async fn service_info() -> impl IntoResponse {
    // Deliberately unenveloped; this is the one descriptive endpoint.
    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: VERSION,
        status: "Running",
        endpoints: EndpointCatalog {
            webhooks: vec![
                "POST /api/datadog/webhook - Main webhook endpoint",
                "POST /api/datadog/webhook/events - Event-specific webhook",
                "GET|POST /api/datadog/test - Test endpoint",
            ],
            utility: vec![
                "GET /api/health - Health check",
                "GET /api/info - This endpoint",
            ],
        },
        timestamp: crate::models::now_rfc3339(),
    })
}
