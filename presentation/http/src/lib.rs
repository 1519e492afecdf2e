//! HTTP presentation layer for IPChecker
//!
//! Serves the classification endpoint, the country endpoint and a health
//! check over axum. Every response carries permissive CORS headers.

use async_trait::async_trait;
use axum::{middleware::from_fn, middleware::from_fn_with_state, routing::get, Router};
use ipcheck_core::prelude::*;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod handlers;
mod middleware;
mod models;

pub use models::*;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<IpCheckService>,
    pub config: HttpServerConfig,
}

/// Build the axum router with all routes and layers
pub fn build_router(service: Arc<IpCheckService>, config: HttpServerConfig) -> Router {
    let app_state = AppState { service, config };

    Router::new()
        // Classification
        .route("/", get(handlers::classify::classify_items))
        .route("/v1/classify", get(handlers::classify::classify_items))

        // Country hints
        .route("/country", get(handlers::country::country_lookup))
        .route("/v1/country", get(handlers::country::country_lookup))

        // Health check
        .route("/health", get(handlers::health::health_check))
        .route("/v1/health", get(handlers::health::health_check))

        .layer(from_fn_with_state(app_state.clone(), middleware::request_timeout))
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(middleware::request_logging))
                .layer(CorsLayer::permissive()),
        )
}

/// HTTP presentation adapter
///
/// Stopping is sticky: a stop requested before `start` has bound its
/// listener makes `start` return without serving.
pub struct HttpServer {
    config: HttpServerConfig,
    stop_requested: watch::Sender<bool>,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: HttpServerConfig) -> Self {
        let (stop_requested, _) = watch::channel(false);
        Self {
            config,
            stop_requested,
        }
    }

    pub fn config(&self) -> &HttpServerConfig {
        &self.config
    }
}

#[async_trait]
impl PresentationAdapter for HttpServer {
    async fn start(&self, service: Arc<IpCheckService>) -> Result<(), PresentationError> {
        let mut stop_rx = self.stop_requested.subscribe();
        if *stop_rx.borrow_and_update() {
            info!("Stop already requested, not starting HTTP server");
            return Ok(());
        }

        info!("Starting HTTP server on {}", self.config.bind_address);

        let router = build_router(service, self.config.clone());

        let listener = tokio::net::TcpListener::bind(&self.config.bind_address)
            .await
            .map_err(|e| PresentationError::StartupFailed(format!("Failed to bind to {}: {}", self.config.bind_address, e)))?;

        info!("IPChecker listening on {}", self.config.bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.wait_for(|stopped| *stopped).await;
            })
            .await
            .map_err(|e| PresentationError::StartupFailed(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    async fn stop(&self) -> Result<(), PresentationError> {
        info!("Stopping HTTP server");
        if self.stop_requested.send_replace(true) {
            warn!("Stop already requested");
        }
        Ok(())
    }
}
