//! Tracing initialization and subscriber setup.
//!
//! Events and spans are filtered by the configured level and written to the
//! browser console through `tracing-wasm`.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Default filter when no `trace_level` is configured.
pub const DEFAULT_LEVEL: &str = "info";

/// Resolves the filter directive for `config`.
#[must_use]
pub fn filter_directive(config: &Config) -> &str {
    config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL)
}

/// Initializes the tracing subscriber with console output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// Idempotent: only the first call installs a subscriber.
///
/// # Example
///
/// ```no_run
/// use bliss_catering::observability::init_tracing;
/// use bliss_catering::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let console = WASMLayer::new(
        WASMLayerConfigBuilder::new()
            .set_report_logs_in_timings(false)
            .build(),
    );

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(config)))
        .with(console);

    let _ = subscriber.try_init();
}
