//! REST API routes (Axum)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::HolidayService;

pub mod error;
mod handlers;

pub use error::ErrorBody;

/// Service shared across handlers
pub type SharedService = Arc<HolidayService>;

/// Create the REST API router
pub fn create_router(service: SharedService) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/holidays", holiday_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

fn holiday_routes() -> Router<SharedService> {
    Router::new()
        .route("/last", get(handlers::last_celebrated))
        .route("/non-weekends", get(handlers::non_weekends))
        .route("/common", get(handlers::common))
}

/// Run the server until Ctrl-C
pub async fn run_server(addr: SocketAddr, service: SharedService) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available: run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
