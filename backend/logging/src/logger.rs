//! Local Trace Logger
//!
//! Wraps `tracing` for the callback's own diagnostics: console output plus an
//! optional daily-rolling NDJSON file, with environment-based level control.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix for rolled log files (`tailhook.log.YYYY-MM-DD`).
pub const LOG_FILE_PREFIX: &str = "tailhook.log";

/// Level used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Initialize the global subscriber. `RUST_LOG` wins over `level` when set.
///
/// Returns `false` if a subscriber was already installed (by the host or an
/// earlier call); the existing one is left in place.
pub fn init_logger<P: AsRef<Path>>(log_dir: Option<P>, level: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = log_dir.map(|dir| {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
        fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_ansi(false)
    });

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_noop() {
        let _ = init_logger(None::<&Path>, "debug");
        assert!(!init_logger(None::<&Path>, "info"));
    }
}
