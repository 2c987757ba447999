//! API Key Redaction
//!
//! Masks API keys in event metadata before it leaves the process.

use tailhook_core::{Metadata, MetadataValue};

/// Prefix that replaces the hidden part of a masked key.
pub const MASK_PREFIX: &str = "****";

/// Number of trailing characters left visible after masking.
pub const VISIBLE_SUFFIX_LEN: usize = 3;

/// Key suffix that marks a value as an API key.
pub const API_KEY_SUFFIX: &str = "api_key";

/// Return a copy of `metadata` with API key values masked.
///
/// Any key ending in `api_key` whose value is a string longer than three
/// characters becomes `****` plus its last three characters. Nested maps are
/// redacted recursively whatever their own key is. Lists and scalars are
/// copied as-is and never descended into.
pub fn redact_api_key_info(metadata: &Metadata) -> Metadata {
    metadata
        .iter()
        .map(|(k, v)| (k.clone(), redact_entry(k, v)))
        .collect()
}

fn redact_entry(key: &str, value: &MetadataValue) -> MetadataValue {
    match value {
        MetadataValue::String(s) if key.ends_with(API_KEY_SUFFIX) => match mask(s) {
            Some(masked) => MetadataValue::String(masked),
            None => value.clone(),
        },
        MetadataValue::Map(nested) => MetadataValue::Map(redact_api_key_info(nested)),
        other => other.clone(),
    }
}

/// Mask a secret, keeping its last three characters. Values of three
/// characters or fewer are too short to mask and yield `None`.
pub fn mask(secret: &str) -> Option<String> {
    let len = secret.chars().count();
    if len <= VISIBLE_SUFFIX_LEN {
        return None;
    }
    let tail: String = secret.chars().skip(len - VISIBLE_SUFFIX_LEN).collect();
    Some(format!("{MASK_PREFIX}{tail}"))
}
