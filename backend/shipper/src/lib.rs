//! `tailhook-shipper`: POSTs log payloads to the ingestion endpoint.

pub mod mock;
pub mod shipper;
pub mod transport;

pub use mock::RecordingTransport;
pub use shipper::{LogShipper, ShipReceipt};
pub use transport::{HttpsTransport, LogRequest, LogTransport, TransportResponse};
