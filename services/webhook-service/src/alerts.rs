/// Monitor lifecycle transitions Datadog includes in webhook payloads.
#[derive(Debug, PartialEq, Eq)]
pub enum AlertTransition {
    Triggered,
    Recovered,
    NoData,
    Warn,
    Unknown,
}

impl AlertTransition {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("triggered") => AlertTransition::Triggered,
            Some("recovered") => AlertTransition::Recovered,
            Some("no data") => AlertTransition::NoData,
            Some("warn") => AlertTransition::Warn,
            _ => AlertTransition::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertTransition::Triggered => "triggered",
            AlertTransition::Recovered => "recovered",
            AlertTransition::NoData => "no data",
            AlertTransition::Warn => "warn",
            AlertTransition::Unknown => "unknown",
        }
    }
}

/// Monitor severity classification.
#[derive(Debug, PartialEq, Eq)]
pub enum AlertType {
    Error,
    Warning,
    Info,
    Success,
    Unknown,
}

impl AlertType {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("error") => AlertType::Error,
            Some("warning") => AlertType::Warning,
            Some("info") => AlertType::Info,
            Some("success") => AlertType::Success,
            _ => AlertType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Error => "error",
            AlertType::Warning => "warning",
            AlertType::Info => "info",
            AlertType::Success => "success",
            AlertType::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertTransition, AlertType};

    #[test]
    fn transition_matches_case_insensitively() {
        assert_eq!(
            AlertTransition::parse(Some("Triggered")),
            AlertTransition::Triggered
        );
        assert_eq!(
            AlertTransition::parse(Some("NO DATA")),
            AlertTransition::NoData
        );
        assert_eq!(AlertTransition::parse(Some("warn")), AlertTransition::Warn);
    }

    #[test]
    fn unrecognized_transition_is_unknown() {
        assert_eq!(
            AlertTransition::parse(Some("escalated")),
            AlertTransition::Unknown
        );
        assert_eq!(AlertTransition::parse(None), AlertTransition::Unknown);
    }

    #[test]
    fn alert_type_matches_case_insensitively() {
        assert_eq!(AlertType::parse(Some("INFO")), AlertType::Info);
        assert_eq!(AlertType::parse(Some("error")), AlertType::Error);
        assert_eq!(AlertType::parse(Some("Success")), AlertType::Success);
        assert_eq!(AlertType::parse(Some("fatal")), AlertType::Unknown);
    }
}
