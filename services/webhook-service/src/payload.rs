use serde_json::{Map, Value};

use crate::models::DatadogWebhookPayload;

/// Why a request body failed to produce a payload. Messages are part of the
/// wire contract surfaced in 400 responses.
#[derive(Debug, PartialEq, Eq)]
pub enum PayloadError {
    Empty,
    InvalidJson,
    InvalidFormat,
}

impl PayloadError {
    pub fn message(&self) -> &'static str {
        match self {
            PayloadError::Empty => "Empty payload",
            PayloadError::InvalidJson => "Invalid JSON format",
            PayloadError::InvalidFormat => "Invalid payload format",
        }
    }
}

pub fn parse_payload(body: &str) -> Result<DatadogWebhookPayload, PayloadError> {
    if body.trim().is_empty() {
        return Err(PayloadError::Empty);
    }

    let value: Value = serde_json::from_str(body).map_err(|_| PayloadError::InvalidJson)?;
    let Value::Object(fields) = value else {
        // Arrays, scalars and null are syntactically valid JSON but not a webhook.
        return Err(PayloadError::InvalidFormat);
    };

    // Datadog templates and manual senders disagree on key casing; normalize
    // object keys to lowercase before the typed decode.
    let normalized = Value::Object(lowercase_keys(fields));
    serde_json::from_value(normalized).map_err(|_| PayloadError::InvalidFormat)
}

fn lowercase_keys(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Object(inner) => Value::Object(lowercase_keys(inner)),
                other => other,
            };
            (key.to_ascii_lowercase(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_payload, PayloadError};

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(parse_payload("").unwrap_err(), PayloadError::Empty);
        assert_eq!(parse_payload("   \n").unwrap_err(), PayloadError::Empty);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert_eq!(
            parse_payload("{not json").unwrap_err(),
            PayloadError::InvalidJson
        );
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert_eq!(
            parse_payload("[1, 2, 3]").unwrap_err(),
            PayloadError::InvalidFormat
        );
        assert_eq!(parse_payload("null").unwrap_err(), PayloadError::InvalidFormat);
        assert_eq!(parse_payload("42").unwrap_err(), PayloadError::InvalidFormat);
    }

    #[test]
    fn empty_object_parses_with_all_fields_absent() {
        let payload = parse_payload("{}").unwrap();
        assert!(payload.alert_type.is_none());
        assert!(payload.title.is_none());
        assert!(payload.org.is_none());
    }

    #[test]
    fn field_names_match_case_insensitively() {
        let upper = parse_payload(r#"{"ALERT_TYPE": "INFO"}"#).unwrap();
        let lower = parse_payload(r#"{"alert_type": "INFO"}"#).unwrap();
        assert_eq!(upper.alert_type.as_deref(), Some("INFO"));
        assert_eq!(upper.alert_type, lower.alert_type);
    }

    #[test]
    fn nested_org_and_lists_decode() {
        let payload = parse_payload(
            r#"{
                "alert_id": "123",
                "title": "CPU High",
                "Org": {"ID": "42", "name": "acme"},
                "tags": ["env:prod", "team:core"],
                "alert_scope": ["host:web-1"],
                "date": 1700000000,
                "last_updated": 1700000100
            }"#,
        )
        .unwrap();
        let org = payload.org.unwrap();
        assert_eq!(org.id.as_deref(), Some("42"));
        assert_eq!(org.name.as_deref(), Some("acme"));
        assert_eq!(payload.tags.unwrap(), ["env:prod", "team:core"]);
        assert_eq!(payload.date, Some(1700000000));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload =
            parse_payload(r#"{"title": "ok", "something_new": {"nested": true}}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("ok"));
    }

    #[test]
    fn mistyped_field_is_a_format_error() {
        assert_eq!(
            parse_payload(r#"{"tags": "not-a-list"}"#).unwrap_err(),
            PayloadError::InvalidFormat
        );
    }
}
