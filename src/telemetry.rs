//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LoggingConfig, DEFAULT_LOG_FILTER};

/// Resolve the log filter with priority: CLI > RUST_LOG > default.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber in text or JSON format.
pub fn init(filter: &str, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
