/// Built-in callback implementations.
///
/// `LogShipperCallback` is the handler proxy hosts register to forward call
/// outcomes to Better Stack. `TracingCallback` records the same events
/// through the local `tracing` subscriber only.
use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use tailhook_core::{ExceptionDescriptor, LogLevel, LogPayload, LogShipError};
use tailhook_logging::{redact_api_key_info, to_json, to_json_strict};
use tailhook_shipper::LogShipper;

use crate::registry::CallbackHandler;
use crate::types::{FailureEvent, SuccessEvent};

pub const SUCCESS_MESSAGE: &str = "Successful API Call";
pub const FAILURE_MESSAGE: &str = "Failed API Call";

// ---------------------------------------------------------------------------
// Log shipper callback: redacts, encodes, and ships every event
// ---------------------------------------------------------------------------

pub struct LogShipperCallback {
    shipper: LogShipper,
}

impl LogShipperCallback {
    pub fn new(shipper: LogShipper) -> Self {
        Self { shipper }
    }

    /// Payload for a successful call. Call arguments are redacted; the
    /// response object is encoded as-is.
    pub fn success_payload(event: &SuccessEvent<'_>) -> Result<LogPayload, LogShipError> {
        let kwargs = to_json(&redact_api_key_info(event.kwargs))?;
        let response = to_json(&event.response.to_metadata())?;
        Ok(LogPayload::new(SUCCESS_MESSAGE, LogLevel::Info)
            .with_field("kwargs", kwargs)
            .with_field("response_obj", response))
    }

    /// Payload for a failed call. The exception descriptor is encoded
    /// without the timestamp fallback.
    pub fn failure_payload(event: &FailureEvent<'_>) -> Result<LogPayload, LogShipError> {
        let request_data = to_json(&redact_api_key_info(event.request_data))?;
        let descriptor = ExceptionDescriptor::from(event.exception);
        let exception = to_json_strict(&descriptor.to_metadata())?;
        Ok(LogPayload::new(FAILURE_MESSAGE, LogLevel::Error)
            .with_field("request_data", request_data)
            .with_field("original_exception", exception))
    }
}

#[async_trait]
impl CallbackHandler for LogShipperCallback {
    fn name(&self) -> &str { "log_shipper_callback" }

    async fn on_success(&self, event: &SuccessEvent<'_>) -> Result<()> {
        let payload = Self::success_payload(event)?;
        self.shipper.ship(payload).await?;
        Ok(())
    }

    async fn on_failure(&self, event: &FailureEvent<'_>) -> Result<()> {
        let payload = Self::failure_payload(event)?;
        self.shipper.ship(payload).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tracing callback: local trace lines only
// ---------------------------------------------------------------------------

pub struct TracingCallback {
    pub prefix: String,
}

impl TracingCallback {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

#[async_trait]
impl CallbackHandler for TracingCallback {
    fn name(&self) -> &str { "tracing_callback" }

    async fn on_success(&self, event: &SuccessEvent<'_>) -> Result<()> {
        info!(
            latency_ms = event.latency_ms(),
            arg_count = event.kwargs.len(),
            "[{}] {}", self.prefix, SUCCESS_MESSAGE
        );
        Ok(())
    }

    async fn on_failure(&self, event: &FailureEvent<'_>) -> Result<()> {
        warn!(
            error_type = %event.exception.kind,
            error_message = %event.exception.message,
            "[{}] {}", self.prefix, FAILURE_MESSAGE
        );
        Ok(())
    }
}
