//! HTTP API server for weather-insights.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use weather_insights_service::WeatherService;

pub use api_error::{ApiError, ApiErrorKind, ErrorBody};
pub use query_types::HistoryParams;
pub use response_types::{PaginatedResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub weather: Arc<WeatherService>,
}

impl AppState {
    #[must_use]
    pub fn new(weather: Arc<WeatherService>) -> Self {
        Self { weather }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/weather/summary/{city}", get(handlers::weekly_summary))
        .route("/weather/history/{city}", get(handlers::history))
        .route("/weather/{city}", get(handlers::current_weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process receives Ctrl-C.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Weather API listening");
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Weather API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
