//! Failed-call context handed to the failure hook.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::{Metadata, MetadataValue};

/// An error raised while the proxy handled a call, as seen by callbacks.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProxyException {
    /// Type name of the original error (e.g. `RateLimitError`).
    pub kind: String,
    pub message: String,
    /// Constructor arguments of the original error.
    pub args: Vec<MetadataValue>,
}

impl ProxyException {
    /// Build an exception whose only argument is its message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: kind.into(),
            args: vec![MetadataValue::String(message.clone())],
            message,
        }
    }

    pub fn with_args(mut self, args: Vec<MetadataValue>) -> Self {
        self.args = args;
        self
    }

    /// Capture a Rust error, using the last segment of its type path as the kind.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        Self::new(short_type_name::<E>(), err.to_string())
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    // Strip generic parameters before taking the last path segment.
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Serializable description of a [`ProxyException`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionDescriptor {
    pub error_type: String,
    pub error_message: String,
    pub error_args: Vec<MetadataValue>,
}

impl ExceptionDescriptor {
    pub fn to_metadata(&self) -> Metadata {
        Metadata::from([
            ("error_type".to_string(), MetadataValue::String(self.error_type.clone())),
            ("error_message".to_string(), MetadataValue::String(self.error_message.clone())),
            ("error_args".to_string(), MetadataValue::List(self.error_args.clone())),
        ])
    }
}

impl From<&ProxyException> for ExceptionDescriptor {
    fn from(exc: &ProxyException) -> Self {
        Self {
            error_type: exc.kind.clone(),
            error_message: exc.message.clone(),
            error_args: exc.args.clone(),
        }
    }
}

/// Identity of the caller whose request failed. Not included in shipped payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub api_key: Option<String>,
    pub user_id: Option<String>,
    pub team_id: Option<String>,
}
