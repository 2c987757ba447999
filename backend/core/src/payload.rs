use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Severity attached to a shipped log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One log line sent to the ingestion endpoint.
///
/// Event data travels as pre-encoded JSON strings in `fields`. The shipper
/// fills `environment` and `railway_service_name` just before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogPayload {
    pub message: String,
    pub level: LogLevel,
    #[serde(flatten)]
    pub fields: IndexMap<String, String>,
    pub environment: Option<String>,
    #[serde(rename = "railwayServiceName")]
    pub railway_service_name: Option<String>,
}

impl LogPayload {
    pub fn new(message: impl Into<String>, level: LogLevel) -> Self {
        Self {
            message: message.into(),
            level,
            fields: IndexMap::new(),
            environment: None,
            railway_service_name: None,
        }
    }

    /// Attach a JSON-encoded event field.
    pub fn with_field(mut self, key: impl Into<String>, json: impl Into<String>) -> Self {
        self.fields.insert(key.into(), json.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_with_null_environment() {
        let payload = LogPayload::new("Successful API Call", LogLevel::Info)
            .with_field("kwargs", r#"{"model":"gpt-4o"}"#);
        let v = serde_json::to_value(&payload).unwrap();

        assert_eq!(v["message"], "Successful API Call");
        assert_eq!(v["level"], "info");
        assert_eq!(v["kwargs"], r#"{"model":"gpt-4o"}"#);
        assert!(v["environment"].is_null());
        assert!(v["railwayServiceName"].is_null());
    }

    #[test]
    fn event_fields_keep_attach_order() {
        let payload = LogPayload::new("Failed API Call", LogLevel::Error)
            .with_field("request_data", "{}")
            .with_field("original_exception", "{}");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"message":"Failed API Call","level":"error","request_data":"{}","original_exception":"{}","environment":null,"railwayServiceName":null}"#
        );
    }

    #[test]
    fn level_display_matches_wire_name() {
        assert_eq!(LogLevel::Error.to_string(), "error");
        assert_eq!(serde_json::to_string(&LogLevel::Info).unwrap(), "\"info\"");
    }
}
