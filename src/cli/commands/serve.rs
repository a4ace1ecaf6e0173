//! `serve` command: HTTP host for the embedded page.

use tokio_util::sync::CancellationToken;

use crate::cli::args::ServeArgs;
use crate::cli::commands::load_settings;
use crate::error::EmbedPageError;
use crate::observability::init_metrics;
use crate::server::{parse_bind_addr, serve};

/// Start the HTTP host and run until `cancel` fires.
///
/// # Errors
///
/// Returns a configuration error for invalid settings, or a serve error
/// if the address is invalid, the listener cannot bind, or the metrics
/// exporter cannot be installed.
pub async fn run(args: &ServeArgs, cancel: CancellationToken) -> Result<(), EmbedPageError> {
    let settings = load_settings(&args.page)?;
    let addr = parse_bind_addr(&args.bind)?;

    if let Some(port) = args.metrics_port {
        init_metrics(Some(port))?;
        tracing::info!(port, "Prometheus metrics endpoint started");
    }

    serve(addr, settings, cancel).await?;
    Ok(())
}
