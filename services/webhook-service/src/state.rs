use std::sync::Arc;

use crate::notify::AlertNotifier;

/// Deployment metadata surfaced by the health and test endpoints.
#[derive(Clone)]
pub struct ServiceConfig {
    pub environment: String,
    pub site_name: String,
    pub region: String,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub notifier: Arc<dyn AlertNotifier + Send + Sync>,
}

impl AppState {
    pub fn new(config: ServiceConfig, notifier: Arc<dyn AlertNotifier + Send + Sync>) -> Self {
        Self {
            config: Arc::new(config),
            notifier,
        }
    }
}
