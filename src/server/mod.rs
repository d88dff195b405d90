//! HTTP service boundary
//!
//! Exposes the search pipeline as `GET /search` through axum and maps
//! search failures onto status codes.

mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::crawler::SearchService;
use crate::{ConfigError, HarvestError};

pub use error::{ApiError, ApiResult, FETCH_FAILED_DETAIL, NOT_FOUND_MESSAGE};
pub use handlers::SearchParams;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
}

impl AppState {
    pub fn new(search: SearchService) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}

/// Builds the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the search API until Ctrl+C
pub async fn run_server(config: Config) -> Result<(), HarvestError> {
    let addr: SocketAddr = config.server.bind.parse().map_err(|e| {
        ConfigError::Validation(format!("Invalid bind address '{}': {}", config.server.bind, e))
    })?;

    let service = SearchService::new(config.site)?;
    tracing::info!("Searching {}", service.config().base_url);

    let app = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
