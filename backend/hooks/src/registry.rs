/// Callback trait and registry.
///
/// The host registers handlers once at startup and dispatches every success
/// or failure event to all of them, in registration order.
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::types::{CallbackPhase, FailureEvent, SuccessEvent};

// ---------------------------------------------------------------------------
// Callback trait
// ---------------------------------------------------------------------------

/// The two hooks a proxy host invokes on its callbacks.
#[async_trait]
pub trait CallbackHandler: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Called after an upstream API call succeeds.
    async fn on_success(&self, event: &SuccessEvent<'_>) -> Result<()>;

    /// Called after a call fails.
    async fn on_failure(&self, event: &FailureEvent<'_>) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

type HandlerBox = Arc<dyn CallbackHandler>;

/// Thread-safe, ordered list of registered callbacks.
#[derive(Default, Clone)]
pub struct CallbackRegistry {
    handlers: Arc<RwLock<Vec<HandlerBox>>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, handler: Arc<dyn CallbackHandler>) {
        self.handlers.write().await.push(handler);
    }

    pub async fn len(&self) -> usize {
        self.handlers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.handlers.read().await.is_empty()
    }

    /// Run every handler's success hook. All handlers run; the first error is returned.
    pub async fn dispatch_success(&self, event: &SuccessEvent<'_>) -> Result<()> {
        let handlers = self.handlers.read().await;
        let mut first_err = None;
        for handler in handlers.iter() {
            debug!("[Callbacks] Running {} for phase {}", handler.name(), CallbackPhase::Success);
            if let Err(e) = handler.on_success(event).await {
                warn!("[Callbacks] {} returned error: {:#}", handler.name(), e);
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Run every handler's failure hook. All handlers run; the first error is returned.
    pub async fn dispatch_failure(&self, event: &FailureEvent<'_>) -> Result<()> {
        let handlers = self.handlers.read().await;
        let mut first_err = None;
        for handler in handlers.iter() {
            debug!("[Callbacks] Running {} for phase {}", handler.name(), CallbackPhase::Failure);
            if let Err(e) = handler.on_failure(event).await {
                warn!("[Callbacks] {} returned error: {:#}", handler.name(), e);
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
