pub mod error;
pub mod exception;
pub mod payload;
pub mod value;

pub use error::LogShipError;
pub use exception::{CallerIdentity, ExceptionDescriptor, ProxyException};
pub use payload::{LogLevel, LogPayload};
pub use value::{metadata_from_json, Metadata, MetadataValue, ToMetadata};
