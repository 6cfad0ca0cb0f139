//! HTTP front-end: one page at `/`, static assets under `/static`.

mod handlers;
mod render;


use anyhow::Context;
use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::info;
use waproxy_core::config::ServerConfig;
use waproxy_gateway::Gateway;

/// Shared state for handlers. Read-only; nothing per-user lives here.
#[derive(Clone)]
pub struct AppState {
    gateway: Arc<dyn Gateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }
}

/// Build the axum router with shared state.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::home).post(handlers::home))
        .route("/favicon.ico", any(handlers::not_found))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Bind and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state, &config.static_dir);
    let addr = config.bind_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Starting server on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
