//! Shipper configuration loaded from environment variables.
//!
//! Variables are read once, when the config is built; handlers never touch
//! the process environment afterwards.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use tailhook_logging::mask;

use crate::defaults::{DEFAULT_ENDPOINT, ENVIRONMENT_VAR, LOG_DIR_VAR, SERVICE_NAME_VAR, SOURCE_TOKEN_VAR};

/// Settings for the log shipper.
#[derive(Clone)]
pub struct ShipperConfig {
    /// Bearer token for the ingestion endpoint. `None` makes every ship fail.
    pub source_token: Option<String>,
    pub environment: Option<String>,
    pub service_name: Option<String>,
    pub endpoint: String,
    /// Where the callback writes its own diagnostics file, if anywhere.
    pub log_dir: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl ShipperConfig {
    /// Read the config from the process environment.
    ///
    /// Only the variables this crate uses are read. A value that is not valid
    /// UTF-8 is treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name)?.into_string().ok())
    }

    /// Read the config from a provided map (useful for testing).
    pub fn from_env_map(env: &HashMap<String, String>) -> Self {
        Self::from_lookup(|name| env.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config = Self {
            source_token: lookup(SOURCE_TOKEN_VAR).filter(|t| !t.is_empty()),
            environment: lookup(ENVIRONMENT_VAR),
            service_name: lookup(SERVICE_NAME_VAR),
            endpoint: default_endpoint(),
            log_dir: lookup(LOG_DIR_VAR).filter(|d| !d.is_empty()).map(PathBuf::from),
        };
        tracing::debug!(config = ?config, "Loaded shipper config");
        config
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub fn with_source_token(mut self, token: impl Into<String>) -> Self {
        self.source_token = Some(token.into());
        self
    }
}

impl fmt::Debug for ShipperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self
            .source_token
            .as_deref()
            .map(|t| mask(t).unwrap_or_else(|| "****".to_string()));
        f.debug_struct("ShipperConfig")
            .field("source_token", &token)
            .field("environment", &self.environment)
            .field("service_name", &self.service_name)
            .field("endpoint", &self.endpoint)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn reads_all_vars() {
        let cfg = ShipperConfig::from_env_map(&env(&[
            ("LOGTAIL_SOURCE_TOKEN", "tok-abc123"),
            ("RAILWAY_ENVIRONMENT_NAME", "production"),
            ("RAILWAY_SERVICE_NAME", "litellm-proxy"),
        ]));
        assert_eq!(cfg.source_token.as_deref(), Some("tok-abc123"));
        assert_eq!(cfg.environment.as_deref(), Some("production"));
        assert_eq!(cfg.service_name.as_deref(), Some("litellm-proxy"));
        assert_eq!(cfg.endpoint, "https://in.logs.betterstack.com/");
    }

    #[test]
    fn optional_vars_may_be_missing() {
        let cfg = ShipperConfig::from_env_map(&env(&[("LOGTAIL_SOURCE_TOKEN", "tok")]));
        assert!(cfg.environment.is_none());
        assert!(cfg.service_name.is_none());
    }

    #[test]
    fn log_dir_is_optional() {
        let cfg = ShipperConfig::from_env_map(&env(&[("TAILHOOK_LOG_DIR", "/var/log/tailhook")]));
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/tailhook")));

        let cfg = ShipperConfig::from_env_map(&env(&[("TAILHOOK_LOG_DIR", "")]));
        assert!(cfg.log_dir.is_none());
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let cfg = ShipperConfig::from_env_map(&env(&[("LOGTAIL_SOURCE_TOKEN", "")]));
        assert!(cfg.source_token.is_none());
    }

    #[test]
    fn empty_environment_is_kept() {
        let cfg = ShipperConfig::from_env_map(&env(&[("RAILWAY_ENVIRONMENT_NAME", "")]));
        assert_eq!(cfg.environment.as_deref(), Some(""));
    }

    #[test]
    fn debug_hides_token() {
        let cfg = ShipperConfig::from_env_map(&env(&[("LOGTAIL_SOURCE_TOKEN", "super-secret-xyz")]));
        let out = format!("{cfg:?}");
        assert!(!out.contains("super-secret"));
        assert!(out.contains("****xyz"));
    }

    // The only test in this crate that touches the process environment.
    #[cfg(unix)]
    #[test]
    fn process_env_tolerates_non_utf8_values() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let garbage = OsStr::from_bytes(b"\xff\xfe");
        std::env::set_var("TAILHOOK_TEST_UNRELATED_VAR", garbage);
        std::env::set_var(SOURCE_TOKEN_VAR, garbage);
        std::env::set_var(ENVIRONMENT_VAR, "preview");
        std::env::remove_var(SERVICE_NAME_VAR);

        let cfg = ShipperConfig::from_env();
        assert!(cfg.source_token.is_none());
        assert_eq!(cfg.environment.as_deref(), Some("preview"));
        assert!(cfg.service_name.is_none());

        std::env::set_var(SOURCE_TOKEN_VAR, "tok-from-env");
        let cfg = ShipperConfig::from_env();
        assert_eq!(cfg.source_token.as_deref(), Some("tok-from-env"));

        std::env::remove_var("TAILHOOK_TEST_UNRELATED_VAR");
        std::env::remove_var(SOURCE_TOKEN_VAR);
        std::env::remove_var(ENVIRONMENT_VAR);
    }

    #[test]
    fn endpoint_override() {
        let cfg = ShipperConfig::from_env_map(&HashMap::new())
            .with_endpoint("http://127.0.0.1:9000/")
            .with_source_token("t");
        assert_eq!(cfg.endpoint, "http://127.0.0.1:9000/");
        assert_eq!(cfg.source_token.as_deref(), Some("t"));
    }
}
