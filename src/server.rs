//! HTTP host for the embedded page.
//!
//! `GET /` runs one complete page load per request (resolve, read or fall
//! back, render) on a blocking worker, so edits to `index.html` show up on
//! the next reload. `GET /healthz` answers `ok`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::app;
use crate::config::Settings;
use crate::error::ServeError;

/// Normalizes a bind address given as `PORT`, `:PORT` or `HOST:PORT`.
///
/// Bare ports bind on loopback only; give a host such as `0.0.0.0:PORT`
/// to listen on other interfaces.
///
/// # Errors
///
/// Returns [`ServeError::InvalidAddress`] if the result is not a socket
/// address.
pub fn parse_bind_addr(input: &str) -> Result<SocketAddr, ServeError> {
    let addr = if input.starts_with(':') {
        format!("127.0.0.1{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("127.0.0.1:{input}")
    } else {
        input.to_string()
    };
    addr.parse::<SocketAddr>().map_err(|e| ServeError::InvalidAddress {
        input: input.to_string(),
        message: e.to_string(),
    })
}

/// Builds the router serving the host page.
pub fn build_router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/", get(handle_page))
        .route("/healthz", get(handle_health))
        .with_state(settings)
}

async fn handle_page(State(settings): State<Arc<Settings>>) -> Response {
    match tokio::task::spawn_blocking(move || app::render_page(&settings)).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!(error = %e, "page render task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "page render failed").into_response()
        }
    }
}

async fn handle_health() -> &'static str {
    "ok"
}

/// Binds `addr` and serves until `cancel` fires.
///
/// # Errors
///
/// Returns [`ServeError::BindFailed`] if the listener cannot bind, or
/// [`ServeError::Server`] if the server loop fails.
pub async fn serve(
    addr: SocketAddr,
    settings: Settings,
    cancel: CancellationToken,
) -> Result<(), ServeError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::BindFailed {
            addr: addr.to_string(),
            source,
        })?;
    let bound_addr = listener.local_addr().map_err(ServeError::Server)?;

    info!(%bound_addr, "HTTP server listening on {bound_addr}");

    let router = build_router(Arc::new(settings));
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(ServeError::Server)?;

    debug!("HTTP server shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use crate::config::{EmbedConfig, Preset};

    fn settings_for(dir: &std::path::Path, preset: Preset) -> Arc<Settings> {
        Arc::new(Settings {
            embed: EmbedConfig::from_preset(preset),
            base_dir: Some(dir.to_path_buf()),
        })
    }

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn parse_bind_addr_colon_port() {
        assert_eq!(
            parse_bind_addr(":8080").unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn parse_bind_addr_port_only() {
        assert_eq!(
            parse_bind_addr("8501").unwrap(),
            "127.0.0.1:8501".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn parse_bind_addr_full() {
        assert_eq!(
            parse_bind_addr("127.0.0.1:3000").unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn bare_ports_stay_on_loopback() {
        for input in ["8501", ":8501"] {
            assert!(parse_bind_addr(input).unwrap().ip().is_loopback(), "{input}");
        }
    }

    #[test]
    fn parse_bind_addr_explicit_all_interfaces() {
        assert!(parse_bind_addr("0.0.0.0:8501").unwrap().ip().is_unspecified());
    }

    #[test]
    fn parse_bind_addr_invalid() {
        assert!(parse_bind_addr("not-an-address").is_err());
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(settings_for(dir.path(), Preset::Standard));

        let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "ok");
    }

    #[tokio::test]
    async fn page_with_missing_frontend_is_still_200() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(settings_for(dir.path(), Preset::Standard));

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );

        let page = body_text(resp).await;
        assert!(page.contains("role=\"alert\""));
        assert!(page.contains("File not found"));
    }

    #[tokio::test]
    async fn page_reflects_file_changes_between_requests() {
        let dir = tempfile::tempdir().unwrap();
        let frontend = dir.path().join("frontend");
        std::fs::create_dir(&frontend).unwrap();
        std::fs::write(frontend.join("index.html"), "<p>v1</p>").unwrap();
        let app = build_router(settings_for(dir.path(), Preset::Wide));

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let first = body_text(app.clone().oneshot(req).await.unwrap()).await;
        assert!(first.contains("&lt;p&gt;v1&lt;/p&gt;"));
        assert!(first.contains("height=\"1200\""));

        std::fs::write(frontend.join("index.html"), "<p>v2</p>").unwrap();
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let second = body_text(app.oneshot(req).await.unwrap()).await;
        assert!(second.contains("&lt;p&gt;v2&lt;/p&gt;"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(settings_for(dir.path(), Preset::Standard));

        let req = Request::builder()
            .uri("/frontend/index.html")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serve_stops_on_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            embed: EmbedConfig::default(),
            base_dir: Some(dir.path().to_path_buf()),
        };
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(serve(
            "127.0.0.1:0".parse().unwrap(),
            settings,
            cancel.clone(),
        ));

        cancel.cancel();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
