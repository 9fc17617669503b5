use uuid::Uuid;

use crate::alerts::{AlertTransition, AlertType};
use crate::models::{now_rfc3339, DatadogWebhookPayload, ProcessingResult};
use crate::state::AppState;

/// Process a parsed webhook. Infallible by construction: every payload field
/// is optional and the dispatches below are side effects that never feed back
/// into the returned result.
pub fn process(state: &AppState, payload: &DatadogWebhookPayload) -> ProcessingResult {
    let processing_id = new_processing_id();

    tracing::info!(
        %processing_id,
        alert_id = payload.alert_id.as_deref().unwrap_or_default(),
        alert_type = payload.alert_type.as_deref().unwrap_or_default(),
        alert_transition = payload.alert_transition.as_deref().unwrap_or_default(),
        "processing datadog webhook"
    );
    log_alert_details(payload, &processing_id);

    // Transition and type dispatch both run every time; neither is exclusive
    // of the other and neither can fail the request.
    let transition = AlertTransition::parse(payload.alert_transition.as_deref());
    match &transition {
        AlertTransition::Unknown => {
            tracing::warn!(
                %processing_id,
                transition = payload.alert_transition.as_deref().unwrap_or_default(),
                "unknown alert transition"
            );
        }
        known => state.notifier.on_transition(known, payload, &processing_id),
    }

    let alert_type = AlertType::parse(payload.alert_type.as_deref());
    match &alert_type {
        AlertType::Unknown => {}
        known => state.notifier.on_alert_type(known, payload, &processing_id),
    }

    let summary = processing_summary(payload);
    tracing::info!(
        %processing_id,
        transition = transition.as_str(),
        alert_type = alert_type.as_str(),
        "webhook processed"
    );

    ProcessingResult {
        processing_id,
        alert_type: payload.alert_type.clone(),
        alert_transition: payload.alert_transition.clone(),
        processed_at: now_rfc3339(),
        summary,
    }
}

/// Placeholder for HMAC signature verification; accepts everything until a
/// shared secret scheme is agreed with the Datadog webhook templates.
pub fn validate_signature(_payload: &str, _signature: &str) -> bool {
    true
}

fn new_processing_id() -> String {
    // 8 hex chars is plenty for log correlation within a deployment.
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

fn log_alert_details(payload: &DatadogWebhookPayload, processing_id: &str) {
    let tags = payload
        .tags
        .as_deref()
        .map(|tags| tags.join(", "))
        .unwrap_or_default();
    tracing::info!(
        %processing_id,
        title = payload.title.as_deref().unwrap_or_default(),
        hostname = payload.hostname.as_deref().unwrap_or_default(),
        priority = payload.priority.as_deref().unwrap_or_default(),
        %tags,
        "alert details"
    );
}

fn processing_summary(payload: &DatadogWebhookPayload) -> String {
    // Absent fields render as empty strings, by contract.
    format!(
        "Processed {} alert '{}' - {}",
        payload.alert_type.as_deref().unwrap_or_default(),
        payload.title.as_deref().unwrap_or_default(),
        payload.alert_transition.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{process, validate_signature};
    use crate::models::DatadogWebhookPayload;
    use crate::notify::LogNotifier;
    use crate::state::{AppState, ServiceConfig};

    fn test_state() -> AppState {
        AppState::new(
            ServiceConfig {
                environment: "Development".to_string(),
                site_name: "Local".to_string(),
                region: "Unknown".to_string(),
            },
            Arc::new(LogNotifier),
        )
    }

    fn sample_payload() -> DatadogWebhookPayload {
        DatadogWebhookPayload {
            alert_transition: Some("Triggered".to_string()),
            alert_type: Some("error".to_string()),
            title: Some("CPU High".to_string()),
            hostname: Some("web-1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn summary_interpolates_fields_verbatim() {
        let result = process(&test_state(), &sample_payload());
        assert_eq!(result.summary, "Processed error alert 'CPU High' - Triggered");
        assert_eq!(result.alert_type.as_deref(), Some("error"));
        assert_eq!(result.alert_transition.as_deref(), Some("Triggered"));
    }

    #[test]
    fn absent_fields_render_empty_in_summary() {
        let result = process(&test_state(), &DatadogWebhookPayload::default());
        assert_eq!(result.summary, "Processed  alert '' - ");
        assert!(result.alert_type.is_none());
        assert!(result.alert_transition.is_none());
    }

    #[test]
    fn processing_ids_are_eight_hex_chars_and_fresh() {
        let state = test_state();
        let payload = sample_payload();
        let first = process(&state, &payload);
        let second = process(&state, &payload);
        assert_eq!(first.processing_id.len(), 8);
        assert!(first
            .processing_id
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(first.processing_id, second.processing_id);
    }

    #[test]
    fn unknown_transition_and_type_still_succeed() {
        let payload = DatadogWebhookPayload {
            alert_transition: Some("escalated".to_string()),
            alert_type: Some("fatal".to_string()),
            ..Default::default()
        };
        let result = process(&test_state(), &payload);
        assert_eq!(result.alert_transition.as_deref(), Some("escalated"));
        assert_eq!(result.alert_type.as_deref(), Some("fatal"));
    }

    #[test]
    fn signature_stub_accepts_anything() {
        assert!(validate_signature("{}", ""));
        assert!(validate_signature("body", "sig"));
    }
}
