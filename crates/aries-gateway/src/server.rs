//! Router and listener.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::state::AppState;

/// Build the HTTP router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/favicon.ico", get(handlers::favicon))
        .route("/version", get(handlers::version))
        .route("/healthcheck", get(handlers::healthcheck))
        .route("/api/aries", get(handlers::ping))
        .route("/api/aries/:id", get(handlers::lookup))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on every interface at `port` until the process exits.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Listening");
    axum::serve(listener, build_router(state))
        .await
        .context("Server error")
}
