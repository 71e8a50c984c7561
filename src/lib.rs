//! Playlist Mood Insight Sidecar
//!
//! A lightweight sidecar that classifies the mood of a playlist from
//! already-fetched track signals (genres, metadata, names) and optional
//! lyrics text, producing a normalized distribution over eight canonical
//! moods with a confidence score.

pub mod config;
pub mod error;
pub mod mood;
pub mod server;
pub mod types;

pub use config::{AppConfig, EngineConfig};
pub use error::{AppError, Result};

pub use mood::{
    AnalysisMethod, GenreMetadataScorer, LyricsSentimentScorer, MoodDistribution, MoodFusionEngine,
    MoodLabel, MoodResult, MoodVector, TrackSignal,
};
