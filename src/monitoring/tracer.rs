/*!
 * Structured Tracing
 * Subscriber setup for simulation logs using the tracing crate
 *
 * Features:
 * - RUST_LOG filtering with an info default
 * - JSON-formatted logs for structured parsing
 * - Span close events carrying run timings
 */

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment switch for JSON log output
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";

/// True when `value` turns JSON output on
#[inline]
pub fn json_requested(value: &str) -> bool {
    matches!(value.trim(), "1" | "true")
}

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false); `json` forces it on
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = json
        || std::env::var(TRACE_JSON_ENV)
            .map(|v| json_requested(&v))
            .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}
