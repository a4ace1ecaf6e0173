//! Metrics for `embedpage`.
//!
//! Counters and histograms are recorded through the `metrics` facade.
//! Without an installed recorder the macros are no-ops, so `render` pays
//! nothing; `serve --metrics-port` installs the Prometheus exporter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::ServeError;

/// Guard to prevent double-initialization of the metrics recorder.
static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Failure kinds accepted as label values.
const KNOWN_FAILURE_KINDS: [&str; 4] = ["not_found", "invalid_utf8", "unreadable", "unresolved"];

/// Buckets unexpected failure kinds as `"__unknown__"`.
#[must_use]
pub fn sanitize_kind_label(kind: &str) -> &str {
    if KNOWN_FAILURE_KINDS.contains(&kind) {
        kind
    } else {
        "__unknown__"
    }
}

/// Installs the Prometheus recorder.
///
/// With `Some(port)` an HTTP listener serves `/metrics` on
/// `127.0.0.1:<port>`. With `None` the recorder is installed without an
/// endpoint.
///
/// # Errors
///
/// Returns [`ServeError::Metrics`] if the recorder or listener cannot be
/// installed.
pub fn init_metrics(port: Option<u16>) -> Result<(), ServeError> {
    init_once(&METRICS_INITIALIZED, || {
        port.map_or_else(
            || PrometheusBuilder::new().install_recorder().map(|_| ()),
            |p| {
                PrometheusBuilder::new()
                    .with_http_listener(([127, 0, 0, 1], p))
                    .install()
            },
        )
        .map_err(|e| e.to_string())
    })?;
    describe_metrics();
    Ok(())
}

/// Runs `install` unless `flag` is already set. The flag is only set once
/// `install` succeeds, so a failed attempt can be retried.
fn init_once(
    flag: &AtomicBool,
    install: impl FnOnce() -> Result<(), String>,
) -> Result<(), ServeError> {
    if flag.load(Ordering::SeqCst) {
        tracing::debug!("metrics already initialized, skipping");
        return Ok(());
    }
    install().map_err(ServeError::Metrics)?;
    flag.store(true, Ordering::SeqCst);
    Ok(())
}

fn describe_metrics() {
    describe_counter!("embedpage_page_loads_total", "Host pages rendered");
    describe_histogram!(
        "embedpage_page_load_duration_ms",
        "Time to load the frontend and render the host page"
    );
    describe_counter!(
        "embedpage_content_load_failures_total",
        "Frontend loads that fell back to the placeholder"
    );
    describe_histogram!("embedpage_content_bytes", "Size of the loaded frontend");
}

/// Records one rendered page.
pub fn record_page_load(duration: Duration) {
    counter!("embedpage_page_loads_total").increment(1);
    histogram!("embedpage_page_load_duration_ms").record(duration.as_secs_f64() * 1000.0);
}

/// Records a successful frontend read of `bytes` bytes.
#[allow(clippy::cast_precision_loss)]
pub fn record_content_loaded(bytes: usize) {
    histogram!("embedpage_content_bytes").record(bytes as f64);
}

/// Records a frontend load that fell back to the placeholder.
pub fn record_content_failure(kind: &str) {
    let kind = sanitize_kind_label(kind).to_string();
    counter!("embedpage_content_load_failures_total", "kind" => kind).increment(1);
}
