//! Structured logging infrastructure for Signet.
//!
//! Log lines are written to stderr so that stdout carries nothing but the
//! signed artifact.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Builds the filter: `RUST_LOG` wins, otherwise `default_level`.
fn build_filter(default_level: &str) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_or_default(env.as_deref(), default_level)
}

/// Unparseable directives fall back to `default_level`.
fn filter_or_default(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Initialize the logging system with human-readable output.
///
/// # Example
/// ```no_run
/// use signet_core::logging;
///
/// logging::init("warn");
/// tracing::info!("Application started");
/// ```
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

/// Initialize the logging system with JSON output for log aggregation.
pub fn init_json(default_level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Initialize from the `[logging]` section of the configuration.
pub fn init_from_config(config: &LoggingConfig) {
    if config.json {
        init_json(&config.level);
    } else {
        init(&config.level);
    }
}
