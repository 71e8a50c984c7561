//! Health and configuration route handlers.

use axum::extract::State;

use crate::types::{ConfigResponse, EngineInfo, HealthResponse, HealthStatus, ServerInfo};

use super::extractors::Encoded;
use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Encoded<HealthResponse> {
    let sentiment_ready = state.engine.lyrics_available();

    // Degraded when the lyrics sentiment backend failed to initialize;
    // genre-metadata analysis still works in that state.
    let status = if sentiment_ready {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    Encoded::msgpack(HealthResponse {
        status,
        version: VERSION.to_string(),
        sentiment_ready,
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Configuration endpoint
///
/// GET /api/v1/config
pub async fn config(State(state): State<AppState>) -> Encoded<ConfigResponse> {
    let config = &state.config;

    Encoded::msgpack(ConfigResponse {
        engine: EngineInfo {
            version: state.engine.version().to_string(),
            genre_weight: config.engine.genre_weight,
            keyword_weight: config.engine.keyword_weight,
            coverage_threshold: config.engine.fusion.coverage_threshold,
            sentiment_ready: state.engine.lyrics_available(),
        },
        server: ServerInfo {
            host: config.server.host.clone(),
            port: config.server.port,
        },
    })
}
