use std::sync::Arc;

use tailhook_config::ShipperConfig;
use tailhook_core::{LogPayload, LogShipError};
use tracing::{debug, info, warn};

use crate::transport::{HttpsTransport, LogRequest, LogTransport, TransportResponse};

/// Outcome of a single shipment. Non-2xx statuses are still receipts.
pub type ShipReceipt = TransportResponse;

/// Attaches deployment metadata to payloads and POSTs them to the ingestion endpoint.
#[derive(Clone)]
pub struct LogShipper {
    config: ShipperConfig,
    transport: Arc<dyn LogTransport>,
}

impl LogShipper {
    pub fn new(config: ShipperConfig, transport: Arc<dyn LogTransport>) -> Self {
        if config.source_token.is_none() {
            warn!(
                var = tailhook_config::SOURCE_TOKEN_VAR,
                transport = transport.name(),
                "Log source token not set; shipping will fail"
            );
        }
        Self { config, transport }
    }

    /// Shipper using the real HTTPS transport.
    pub fn https(config: ShipperConfig) -> Self {
        Self::new(config, Arc::new(HttpsTransport::new()))
    }

    pub fn config(&self) -> &ShipperConfig {
        &self.config
    }

    /// Build the POST for `payload`. Fails before doing anything else when no
    /// source token is configured.
    pub fn build_request(&self, mut payload: LogPayload) -> Result<LogRequest, LogShipError> {
        payload.environment = self.config.environment.clone();
        payload.railway_service_name = self.config.service_name.clone();

        let token = self
            .config
            .source_token
            .as_deref()
            .ok_or(LogShipError::MissingSourceToken)?;

        let body = serde_json::to_string(&payload)?;
        debug!(level = %payload.level, message = %payload.message, "Built log request");

        Ok(LogRequest {
            url: self.config.endpoint.clone(),
            headers: vec![
                ("Authorization".to_string(), format!("Bearer {token}")),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        })
    }

    /// Send one payload and wait for the full response.
    ///
    /// The response status is logged, not checked.
    pub async fn ship(&self, payload: LogPayload) -> Result<ShipReceipt, LogShipError> {
        let request = self.build_request(payload)?;

        let response = self
            .transport
            .send(request)
            .await
            .map_err(LogShipError::Transport)?;

        info!(
            transport = self.transport.name(),
            status = response.status,
            body = %response.body,
            "Sent log to betterstack"
        );
        Ok(response)
    }
}
