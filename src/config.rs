use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the `MOOD_`
/// prefix. For example: `MOOD_SERVER__PORT=8097`,
/// `MOOD_ENGINE__FUSION__COVERAGE_THRESHOLD=0.25`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Weights and thresholds of the mood engine.
///
/// The defaults reproduce the tuned production behavior; they are exposed as
/// configuration rather than inline literals.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Weight applied to each matched genre's mood sub-vector
    #[serde(default = "default_genre_weight")]
    pub genre_weight: f64,

    /// Weight applied per keyword hit in track/artist/album names
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,

    /// Metadata nudge thresholds and amounts
    #[serde(default)]
    pub nudges: NudgeConfig,

    /// Fusion weighting between genre-metadata and lyrics analysis
    #[serde(default)]
    pub fusion: FusionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            genre_weight: default_genre_weight(),
            keyword_weight: default_keyword_weight(),
            nudges: NudgeConfig::default(),
            fusion: FusionConfig::default(),
        }
    }
}

fn default_genre_weight() -> f64 {
    0.7
}

fn default_keyword_weight() -> f64 {
    0.3
}

/// Small additive adjustments derived from track metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct NudgeConfig {
    /// Tracks shorter than this lean energetic/upbeat
    #[serde(default = "default_short_track_ms")]
    pub short_track_ms: i64,

    /// Tracks longer than this lean calm/melancholic
    #[serde(default = "default_long_track_ms")]
    pub long_track_ms: i64,

    /// Bonus for short tracks
    #[serde(default = "default_short_track_bonus")]
    pub short_track_bonus: f64,

    /// Bonus for long tracks
    #[serde(default = "default_long_track_bonus")]
    pub long_track_bonus: f64,

    /// Popularity above this leans happy/upbeat
    #[serde(default = "default_high_popularity")]
    pub high_popularity: i64,

    /// Popularity below this leans melancholic
    #[serde(default = "default_low_popularity")]
    pub low_popularity: i64,

    /// Bonus applied by the popularity rules
    #[serde(default = "default_popularity_bonus")]
    pub popularity_bonus: f64,

    /// Bonus applied to angry/energetic for explicit tracks
    #[serde(default = "default_explicit_bonus")]
    pub explicit_bonus: f64,
}

impl Default for NudgeConfig {
    fn default() -> Self {
        Self {
            short_track_ms: default_short_track_ms(),
            long_track_ms: default_long_track_ms(),
            short_track_bonus: default_short_track_bonus(),
            long_track_bonus: default_long_track_bonus(),
            high_popularity: default_high_popularity(),
            low_popularity: default_low_popularity(),
            popularity_bonus: default_popularity_bonus(),
            explicit_bonus: default_explicit_bonus(),
        }
    }
}

fn default_short_track_ms() -> i64 {
    150_000
}

fn default_long_track_ms() -> i64 {
    360_000
}

fn default_short_track_bonus() -> f64 {
    0.2
}

fn default_long_track_bonus() -> f64 {
    0.1
}

fn default_high_popularity() -> i64 {
    80
}

fn default_low_popularity() -> i64 {
    30
}

fn default_popularity_bonus() -> f64 {
    0.1
}

fn default_explicit_bonus() -> f64 {
    0.1
}

/// Coverage-adaptive fusion weights.
#[derive(Debug, Clone, Deserialize)]
pub struct FusionConfig {
    /// Below this lyrics coverage the sparse weights apply
    #[serde(default = "default_coverage_threshold")]
    pub coverage_threshold: f64,

    /// Genre-metadata weight at adequate lyrics coverage
    #[serde(default = "default_fusion_genre_weight")]
    pub genre_weight: f64,

    /// Lyrics weight at adequate lyrics coverage
    #[serde(default = "default_fusion_lyrics_weight")]
    pub lyrics_weight: f64,

    /// Genre-metadata weight at sparse lyrics coverage
    #[serde(default = "default_sparse_genre_weight")]
    pub sparse_genre_weight: f64,

    /// Lyrics weight at sparse lyrics coverage
    #[serde(default = "default_sparse_lyrics_weight")]
    pub sparse_lyrics_weight: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            coverage_threshold: default_coverage_threshold(),
            genre_weight: default_fusion_genre_weight(),
            lyrics_weight: default_fusion_lyrics_weight(),
            sparse_genre_weight: default_sparse_genre_weight(),
            sparse_lyrics_weight: default_sparse_lyrics_weight(),
        }
    }
}

fn default_coverage_threshold() -> f64 {
    0.3
}

fn default_fusion_genre_weight() -> f64 {
    0.6
}

fn default_fusion_lyrics_weight() -> f64 {
    0.4
}

fn default_sparse_genre_weight() -> f64 {
    0.8
}

fn default_sparse_lyrics_weight() -> f64 {
    0.2
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8097
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `MOOD_` and use double
    /// underscores for nested values:
    /// - `MOOD_SERVER__PORT` -> server.port
    /// - `MOOD_ENGINE__GENRE_WEIGHT` -> engine.genre_weight
    /// - `MOOD_ENGINE__FUSION__COVERAGE_THRESHOLD` -> engine.fusion.coverage_threshold
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOOD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.engine.genre_weight, 0.7);
        assert_eq!(config.engine.keyword_weight, 0.3);
        assert_eq!(config.engine.nudges.short_track_ms, 150_000);
        assert_eq!(config.engine.nudges.long_track_ms, 360_000);
        assert_eq!(config.engine.fusion.coverage_threshold, 0.3);
        assert_eq!(config.engine.fusion.sparse_genre_weight, 0.8);
        assert_eq!(config.server.port, 8097);
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        let addr = server.socket_addr();
        assert_eq!(addr.port(), 8097);
    }
}
