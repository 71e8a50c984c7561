//! Shared types for the mood sidecar API.
//!
//! These types are used across the application for request/response handling
//! and internal data representation.

pub mod mood;

use serde::{Deserialize, Serialize};

pub use mood::*;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Whether the lyrics sentiment backend initialized
    #[serde(default)]
    pub sentiment_ready: bool,
    #[serde(default)]
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Configuration response (subset of config safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub engine: EngineInfo,
    pub server: ServerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineInfo {
    pub version: String,
    pub genre_weight: f64,
    pub keyword_weight: f64,
    pub coverage_threshold: f64,
    pub sentiment_ready: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
}
