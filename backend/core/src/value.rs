//! Closed value model for event metadata.
//!
//! Call arguments, request data, and response objects arrive from the host as
//! nested mappings of loosely typed values. They are carried here as a
//! `MetadataValue` tree so redaction and serialization can match on a known
//! set of variants.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::{Number, Value};

/// A nested mapping of string keys to metadata values, in insertion order.
pub type Metadata = IndexMap<String, MetadataValue>;

/// A single value inside event metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Not representable in JSON without a fallback conversion.
    Timestamp(DateTime<Utc>),
    List(Vec<MetadataValue>),
    Map(Metadata),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Metadata> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Short type label used in diagnostics and unsupported-type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<Value> for MetadataValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(arr) => Self::List(arr.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for MetadataValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<f64> for MetadataValue {
    /// Non-finite floats have no JSON form and become `Null`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map(Self::Number).unwrap_or(Self::Null)
    }
}

impl From<DateTime<Utc>> for MetadataValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Metadata> for MetadataValue {
    fn from(m: Metadata) -> Self {
        Self::Map(m)
    }
}

impl<T: Into<MetadataValue>> From<Vec<T>> for MetadataValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Convert a JSON object into a metadata mapping.
///
/// Non-object values are wrapped under a single `"value"` key.
pub fn metadata_from_json(value: Value) -> Metadata {
    match MetadataValue::from(value) {
        MetadataValue::Map(m) => m,
        other => Metadata::from([("value".to_string(), other)]),
    }
}

/// Conversion of a host response object into a plain mapping.
pub trait ToMetadata: Send + Sync {
    fn to_metadata(&self) -> Metadata;
}

impl ToMetadata for Metadata {
    fn to_metadata(&self) -> Metadata {
        self.clone()
    }
}

impl ToMetadata for Value {
    fn to_metadata(&self) -> Metadata {
        metadata_from_json(self.clone())
    }
}
