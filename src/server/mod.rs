//! HTTP server setup and routing.

mod extractors;
mod mood;
mod routes;

pub use extractors::{Decoded, Encoded, WireFormat};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::mood::MoodFusionEngine;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Fusion engine with its static matchers, built once at startup
    pub engine: Arc<MoodFusionEngine>,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    /// Build the application state, constructing the mood engine once.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let engine = MoodFusionEngine::new(&config.engine)?;
        Ok(Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            started_at: Instant::now(),
        })
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Mood analysis endpoints
        .route("/mood/analyze", post(mood::analyze_playlist))
        .route("/mood/list", get(mood::list_moods));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
