pub mod builtin;
pub mod registry;
pub mod types;

use std::sync::Arc;

use tailhook_config::ShipperConfig;
use tailhook_logging::{DEFAULT_LOG_LEVEL, init_logger};
use tailhook_shipper::LogShipper;

pub use builtin::{LogShipperCallback, TracingCallback};
pub use registry::{CallbackHandler, CallbackRegistry};
pub use types::{CallbackPhase, FailureEvent, SuccessEvent};

/// The handler a proxy host loads: ships every call outcome using settings
/// from the process environment.
///
/// Also installs the local trace logger unless the host already set up a
/// subscriber.
pub fn proxy_handler() -> Arc<dyn CallbackHandler> {
    let config = ShipperConfig::from_env();
    if init_logger(config.log_dir.as_deref(), DEFAULT_LOG_LEVEL) {
        tracing::debug!(log_dir = ?config.log_dir, "Installed tailhook trace logger");
    }
    Arc::new(LogShipperCallback::new(LogShipper::https(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn proxy_handler_registers() {
        let registry = CallbackRegistry::new();
        let handler = proxy_handler();
        assert_eq!(handler.name(), "log_shipper_callback");
        registry.register(handler).await;
        assert_eq!(registry.len().await, 1);

        // The logger is already installed, so a later init leaves it alone.
        assert!(!init_logger(None::<&std::path::Path>, DEFAULT_LOG_LEVEL));
    }
}
