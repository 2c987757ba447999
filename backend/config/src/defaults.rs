//! Config defaults: environment variable names and the ingestion endpoint.

/// Source token for the log-ingestion service. Required at ship time.
pub const SOURCE_TOKEN_VAR: &str = "LOGTAIL_SOURCE_TOKEN";

/// Deployment environment name attached to every payload.
pub const ENVIRONMENT_VAR: &str = "RAILWAY_ENVIRONMENT_NAME";

/// Service name attached to every payload.
pub const SERVICE_NAME_VAR: &str = "RAILWAY_SERVICE_NAME";

/// Directory for the callback's own rolling log file. Console only when unset.
pub const LOG_DIR_VAR: &str = "TAILHOOK_LOG_DIR";

/// Better Stack ingestion URL. Logs are POSTed to the root path.
pub const DEFAULT_ENDPOINT: &str = "https://in.logs.betterstack.com/";
