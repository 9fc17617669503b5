use crate::alerts::{AlertTransition, AlertType};
use crate::models::DatadogWebhookPayload;

/// Extension point for per-category alert handling. The default wiring only
/// logs; paging, ticketing or chat integrations implement this trait and get
/// registered in `AppState` instead of being patched into the dispatch.
pub trait AlertNotifier {
    fn on_transition(
        &self,
        transition: &AlertTransition,
        payload: &DatadogWebhookPayload,
        processing_id: &str,
    );

    fn on_alert_type(
        &self,
        alert_type: &AlertType,
        payload: &DatadogWebhookPayload,
        processing_id: &str,
    );
}

pub struct LogNotifier;

impl AlertNotifier for LogNotifier {
    fn on_transition(
        &self,
        transition: &AlertTransition,
        payload: &DatadogWebhookPayload,
        processing_id: &str,
    ) {
        let title = payload.title.as_deref().unwrap_or_default();
        let hostname = payload.hostname.as_deref().unwrap_or_default();
        match transition {
            AlertTransition::Triggered => {
                tracing::warn!(processing_id, title, hostname, "alert triggered");
            }
            AlertTransition::Recovered => {
                tracing::info!(processing_id, title, hostname, "alert recovered");
            }
            AlertTransition::NoData => {
                tracing::warn!(processing_id, title, hostname, "monitor reporting no data");
            }
            AlertTransition::Warn => {
                tracing::warn!(processing_id, title, hostname, "alert entered warn state");
            }
            AlertTransition::Unknown => {}
        }
    }

    fn on_alert_type(
        &self,
        alert_type: &AlertType,
        payload: &DatadogWebhookPayload,
        processing_id: &str,
    ) {
        let title = payload.title.as_deref().unwrap_or_default();
        let hostname = payload.hostname.as_deref().unwrap_or_default();
        match alert_type {
            AlertType::Error => {
                tracing::error!(processing_id, title, hostname, "error alert");
            }
            AlertType::Warning => {
                tracing::warn!(processing_id, title, hostname, "warning alert");
            }
            AlertType::Info => {
                tracing::info!(processing_id, title, hostname, "info alert");
            }
            AlertType::Success => {
                tracing::info!(processing_id, title, hostname, "success alert");
            }
            AlertType::Unknown => {}
        }
    }
}
