//! Observability module
//!
//! Structured logging and Prometheus-compatible metrics.

pub mod logging;
pub mod metrics;

pub use logging::{LogFormat, init_logging};
pub use metrics::init_metrics;
