use serde::{Deserialize, Serialize};

/// Superset of the fields Datadog sends for monitor and event webhooks.
/// Everything is optional; payload shape validation lives in `payload`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatadogWebhookPayload {
    pub alert_id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub alert_type: Option<String>,
    pub alert_transition: Option<String>,
    pub hostname: Option<String>,
    pub org: Option<DatadogOrganization>,
    pub priority: Option<String>,
    pub snapshot: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "aggreg_key")]
    pub aggregation_key: Option<String>,
    pub date: Option<i64>,
    #[serde(rename = "event_msg")]
    pub event_message: Option<String>,
    pub event_title: Option<String>,
    pub event_type: Option<String>,
    pub id: Option<String>,
    pub last_updated: Option<i64>,
    pub url: Option<String>,
    pub source_type_name: Option<String>,
    pub alert_status: Option<String>,
    pub alert_scope: Option<Vec<String>>,
    pub alert_cycle_key: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatadogOrganization {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Uniform envelope for API responses; `data` is null on errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            timestamp: now_rfc3339(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            timestamp: now_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub processing_id: String,
    pub alert_type: Option<String>,
    pub alert_transition: Option<String>,
    pub processed_at: String,
    pub summary: String,
}

#[derive(Serialize)]
pub struct TestInfo {
    pub message: &'static str,
    pub timestamp: String,
    pub environment: String,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub environment: String,
    pub site_name: String,
    pub region: String,
}

/// `/api/info` body; the one response that skips the envelope.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: EndpointCatalog,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct EndpointCatalog {
    pub webhooks: Vec<&'static str>,
    pub utility: Vec<&'static str>,
}

pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
