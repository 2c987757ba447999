//! `tailhook-config`: shipper configuration.
//!
//! Provides:
//! - Environment variable names and the default ingestion endpoint
//! - `ShipperConfig`, read once from the environment and held by the shipper

pub mod defaults;
pub mod env;

pub use defaults::{DEFAULT_ENDPOINT, ENVIRONMENT_VAR, LOG_DIR_VAR, SERVICE_NAME_VAR, SOURCE_TOKEN_VAR};
pub use env::ShipperConfig;
