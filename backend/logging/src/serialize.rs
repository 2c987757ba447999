//! JSON encoding for event metadata.
//!
//! JSON-native variants encode directly. Anything else is handed to a
//! fallback converter; when there is no fallback, or the fallback declines
//! the value, encoding fails with an unsupported-type error.

use chrono::SecondsFormat;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use tailhook_core::{LogShipError, Metadata, MetadataValue};

/// Converter for values JSON cannot represent natively.
pub type Fallback = fn(&MetadataValue) -> Option<String>;

/// Encode timestamps as ISO-8601 (`2024-05-01T12:30:00+00:00`, with
/// microseconds when present). Returns `None` for every other value.
pub fn serialize_datetime(value: &MetadataValue) -> Option<String> {
    match value {
        MetadataValue::Timestamp(ts) => {
            let precision = if ts.timestamp_subsec_micros() == 0 {
                SecondsFormat::Secs
            } else {
                SecondsFormat::Micros
            };
            Some(ts.to_rfc3339_opts(precision, false))
        }
        _ => None,
    }
}

/// Encode a mapping, converting timestamps to ISO-8601 strings.
pub fn to_json(metadata: &Metadata) -> Result<String, LogShipError> {
    map_to_json_with(metadata, Some(serialize_datetime))
}

/// Encode a mapping with no fallback; timestamps are rejected.
pub fn to_json_strict(metadata: &Metadata) -> Result<String, LogShipError> {
    map_to_json_with(metadata, None)
}

pub fn map_to_json_with(
    metadata: &Metadata,
    fallback: Option<Fallback>,
) -> Result<String, LogShipError> {
    Ok(serde_json::to_string(&EncodeMap { map: metadata, fallback })?)
}

pub fn to_json_with(value: &MetadataValue, fallback: Option<Fallback>) -> Result<String, LogShipError> {
    Ok(serde_json::to_string(&Encode { value, fallback })?)
}

struct Encode<'a> {
    value: &'a MetadataValue,
    fallback: Option<Fallback>,
}

struct EncodeMap<'a> {
    map: &'a Metadata,
    fallback: Option<Fallback>,
}

impl Serialize for Encode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            MetadataValue::Null => serializer.serialize_unit(),
            MetadataValue::Bool(b) => serializer.serialize_bool(*b),
            MetadataValue::Number(n) => n.serialize(serializer),
            MetadataValue::String(s) => serializer.serialize_str(s),
            MetadataValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Encode { value: item, fallback: self.fallback })?;
                }
                seq.end()
            }
            MetadataValue::Map(map) => EncodeMap { map, fallback: self.fallback }.serialize(serializer),
            other => match self.fallback.and_then(|f| f(other)) {
                Some(converted) => serializer.serialize_str(&converted),
                None => Err(S::Error::custom(format!(
                    "Object of type {} is not JSON serializable",
                    other.type_name()
                ))),
            },
        }
    }
}

impl Serialize for EncodeMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.map.len()))?;
        for (k, v) in self.map {
            out.serialize_entry(k, &Encode { value: v, fallback: self.fallback })?;
        }
        out.end()
    }
}
