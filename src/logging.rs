//! Diagnostic logging for the calculator binary.
//!
//! The binary's stdout contract is a single `Result:`, `Error:`, usage or
//! `unknown operation` line, so every diagnostic goes to stderr. The default
//! level is `warn` and a normal run emits nothing.
//!
//! Two targets carry events:
//! - `calculator`: each operation with its operands (`debug`)
//! - `cli`: operands that fell back to zero, rejected operation names
//!   (`debug`) and failed operations (`info`)
//!
//! # Configuration
//!
//! Levels come from the `[logging]` table of the file passed with `--config`,
//! or from `CALCULATOR_LOGGING__*` variables:
//!
//! ```toml
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! cli = "debug"   # report operands that were not numbers
//! ```
//!
//! `RUST_LOG` takes precedence over both:
//! ```bash
//! RUST_LOG=calculator=debug calculator multiply 4 5
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Initialize logging with configuration.
///
/// Call once at startup. Safe to call multiple times (only first call takes effect).
///
/// The `RUST_LOG` environment variable takes precedence over config settings.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.filter_directives())
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        // A subscriber installed elsewhere (tests) wins; ignore the conflict.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}

/// Initialize logging with default configuration (`warn`).
pub fn init() {
    init_with_config(&LoggingConfig::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_config(&LoggingConfig {
            default: "trace".to_string(),
            ..LoggingConfig::default()
        });
        assert!(INIT.is_completed());
    }
}
