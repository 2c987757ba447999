use thiserror::Error;

/// Top-level error type for building and shipping log payloads.
#[derive(Debug, Error)]
pub enum LogShipError {
    /// The ingestion token is not configured. Raised before any request is built.
    #[error("configuration error: LOGTAIL_SOURCE_TOKEN environment variable is not set")]
    MissingSourceToken,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("transport error: {0:#}")]
    Transport(anyhow::Error),
}

impl LogShipError {
    /// True for errors caused by missing or invalid configuration rather than I/O.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingSourceToken)
    }
}
