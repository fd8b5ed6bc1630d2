//! Structured logging.
//!
//! Uses `tracing-subscriber` with an `EnvFilter`. `RUST_LOG` wins over the
//! configured level.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    let level = config.log_level.to_ascii_lowercase();
    format!("catrace_client={level},catrace_connect={level}")
}

/// Install the global subscriber. Call once, from the binary.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
