//! Redaction, JSON encoding, and local tracing for tailhook.
//!
//! Masks API keys in event metadata, encodes metadata to JSON with a
//! timestamp fallback, and sets up the process-local trace logger.

pub mod logger;
pub mod redact;
pub mod serialize;

pub use logger::{init_logger, DEFAULT_LOG_LEVEL};
pub use redact::{mask, redact_api_key_info, MASK_PREFIX};
pub use serialize::{serialize_datetime, to_json, to_json_strict, to_json_with, Fallback};
