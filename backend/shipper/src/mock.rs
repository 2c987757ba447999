use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::transport::{LogRequest, LogTransport, TransportResponse};

/// A transport that records every request and answers with a canned response.
pub struct RecordingTransport {
    response: TransportResponse,
    fail_with: Option<String>,
    requests: Mutex<Vec<LogRequest>>,
}

impl RecordingTransport {
    /// Answers `202` with an empty body, like the real ingestion endpoint.
    pub fn new() -> Self {
        Self {
            response: TransportResponse { status: 202, body: String::new() },
            fail_with: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, status: u16, body: impl Into<String>) -> Self {
        self.response = TransportResponse { status, body: body.into() };
        self
    }

    /// Fail every send with the given message (after recording the request).
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    pub fn requests(&self) -> Vec<LogRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, request: LogRequest) -> Result<TransportResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        if let Some(message) = &self.fail_with {
            bail!("{message}");
        }
        Ok(self.response.clone())
    }
}
