mod alerts;
mod app;
mod handlers;
mod models;
mod notify;
mod payload;
mod service;
mod state;

use std::sync::Arc;

use webhook_common::{bind_listener, env_or, init_tracing, shutdown_signal};

use crate::notify::LogNotifier;
use crate::state::{AppState, ServiceConfig};

#[tokio::main]
async fn main() {
    let _guards = init_tracing("webhook-service");

    let port = env_or("PORT", 8080u16);
    // Deployment metadata is read once here and injected into the handlers.
    let config = ServiceConfig {
        environment: env_or("DEPLOY_ENVIRONMENT", "Development".to_string()),
        site_name: env_or("SITE_NAME", "Local".to_string()),
        region: env_or("REGION_NAME", "Unknown".to_string()),
    };

    let state = AppState::new(config, Arc::new(LogNotifier));
    let app = app::build_router(state);
    let listener = bind_listener(port).await;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("serve");
}
