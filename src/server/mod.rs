pub mod dto;
pub mod routes;
pub mod structured_error;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::cors::build_cors_layer;
use crate::http_logging::HttpLoggingLayer;
use crate::service::ItemService;

pub use structured_error::{ApiError, StructuredError};

/// HTTP-level knobs applied around the routes.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub max_body_bytes: usize,
    pub cors_origins: Vec<String>,
}

/// Build the application router with body limit, CORS and request logging.
#[must_use]
pub fn build_router(service: Arc<ItemService>, config: RouterConfig) -> Router {
    Router::new()
        .route("/api/items", get(routes::list_items))
        .route("/api/selected", post(routes::set_selected))
        .route("/api/sort", post(routes::set_sort_order))
        .route("/api/state", get(routes::get_state))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(build_cors_layer(config.cors_origins))
        .layer(HttpLoggingLayer)
        .with_state(service)
}

/// Resolve once Ctrl-C or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, stopping server..."),
        () = terminate => info!("Received SIGTERM, stopping server..."),
    }
}
