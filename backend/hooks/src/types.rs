/// Callback events delivered by the proxy host.
///
/// Events borrow the host's data for the duration of one callback; handlers
/// copy whatever they keep.
use chrono::{DateTime, Utc};
use tailhook_core::{CallerIdentity, Metadata, ProxyException, ToMetadata};

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// The lifecycle point at which a callback fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackPhase {
    /// An upstream API call completed successfully.
    Success,
    /// A call failed after the proxy accepted it.
    Failure,
}

impl std::fmt::Display for CallbackPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// Event payloads
// ---------------------------------------------------------------------------

/// A completed call: the original call arguments and the response object.
pub struct SuccessEvent<'a> {
    pub kwargs: &'a Metadata,
    pub response: &'a dyn ToMetadata,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl<'a> SuccessEvent<'a> {
    pub fn new(
        kwargs: &'a Metadata,
        response: &'a dyn ToMetadata,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self { kwargs, response, start_time, end_time }
    }

    pub fn latency_ms(&self) -> i64 {
        (self.end_time - self.start_time).num_milliseconds()
    }
}

/// A failed call: the request data, the raised exception, and who called.
pub struct FailureEvent<'a> {
    pub request_data: &'a Metadata,
    pub exception: &'a ProxyException,
    /// Supplied by the host; never shipped.
    pub caller: &'a CallerIdentity,
}

impl<'a> FailureEvent<'a> {
    pub fn new(
        request_data: &'a Metadata,
        exception: &'a ProxyException,
        caller: &'a CallerIdentity,
    ) -> Self {
        Self { request_data, exception, caller }
    }
}
