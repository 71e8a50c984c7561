//! Playlist mood classification core.
//!
//! Pure, synchronous scoring over caller-supplied track signals and lyrics:
//! the genre-metadata scorer always runs, the lyrics sentiment scorer runs
//! when lyrics are supplied, and the fusion engine combines both into a
//! single [`MoodResult`]. No component here performs I/O or holds locks;
//! everything shared is static configuration, safe for concurrent use.

pub mod fusion;
pub mod genres;
pub mod labels;
pub mod lexicon;
pub mod lyrics;
pub mod metadata;
pub mod sentiment;
pub mod vector;

pub use fusion::MoodFusionEngine;
pub use labels::{Mood, MoodLabel};
pub use lyrics::LyricsSentimentScorer;
pub use metadata::GenreMetadataScorer;
pub use sentiment::{SentimentAnalyzer, SentimentScores};
pub use vector::{MoodDistribution, MoodVector};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary mood reported when a playlist carries no usable signal.
pub const NEUTRAL_MOOD: &str = "neutral";

/// Confidence reported alongside [`NEUTRAL_MOOD`].
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Errors raised while building the engine's static matchers.
///
/// Scoring itself never fails on data quality; construction is the only
/// fallible step.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build keyword matcher: {0}")]
    KeywordMatcher(String),

    #[error("failed to initialize sentiment backend: {0}")]
    Sentiment(#[from] sentiment::SentimentError),
}

/// Normalized per-track input to the classifier.
///
/// Built by the caller from already-fetched catalog data; the classifier
/// never looks anything up itself. Out-of-range numeric values are clamped
/// during scoring, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSignal {
    /// Opaque track identifier, used only to key the lyrics map
    pub id: String,

    /// Track title
    #[serde(default)]
    pub name: String,

    /// Primary artist name
    #[serde(default)]
    pub artist: String,

    /// Album name
    #[serde(default)]
    pub album: String,

    /// Artist genre tags, possibly empty
    #[serde(default)]
    pub genres: Vec<String>,

    /// Popularity 0-100; absent means no popularity signal
    #[serde(default)]
    pub popularity: Option<i64>,

    /// Track duration in milliseconds
    #[serde(default)]
    pub duration_ms: Option<i64>,

    /// Explicit content flag
    #[serde(default)]
    pub explicit: bool,

    /// Release year, carried for callers but not scored
    #[serde(default)]
    pub release_year: Option<i32>,
}

/// Which analysis path produced a [`MoodResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMethod {
    /// Genre-metadata scoring; lyrics were never requested
    GenreMetadataAnalysis,
    /// Genre-metadata and lyrics sentiment combined
    EnhancedLyricsGenreMetadata,
    /// Lyrics were requested but none were usable
    GenreMetadataOnly,
    /// Empty input
    Default,
}

impl AnalysisMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisMethod::GenreMetadataAnalysis => "genre-metadata-analysis",
            AnalysisMethod::EnhancedLyricsGenreMetadata => "enhanced-lyrics-genre-metadata",
            AnalysisMethod::GenreMetadataOnly => "genre-metadata-only",
            AnalysisMethod::Default => "default",
        }
    }
}

impl std::fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighting breakdown of an enhanced analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisComponents {
    /// Weight given to the genre-metadata distribution
    pub genre_metadata_weight: f64,
    /// Weight given to the lyrics score vector
    pub lyrics_weight: f64,
    /// Number of tracks with usable lyrics
    pub lyrics_tracks: usize,
    /// Total number of tracks analyzed
    pub total_tracks: usize,
}

/// Result of classifying one playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodResult {
    /// Dominant mood label
    pub primary_mood: String,

    /// Normalized score of the primary mood, capped at 1.0
    pub confidence: f64,

    /// Normalized distribution over all scored moods; the eight canonical
    /// labels are always present
    pub mood_distribution: MoodDistribution,

    /// Number of input tracks, regardless of how many carried signal
    pub tracks_analyzed: usize,

    /// Analysis path taken
    pub method: AnalysisMethod,

    /// Fraction of tracks with usable lyrics (0.0 when lyrics were unused)
    #[serde(default)]
    pub lyrics_coverage: f64,

    /// Weighting breakdown, present on the enhanced path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_components: Option<AnalysisComponents>,
}

impl MoodResult {
    /// The default result for empty input: neutral, half confidence,
    /// uniform distribution.
    pub fn neutral() -> Self {
        MoodResult {
            primary_mood: NEUTRAL_MOOD.to_string(),
            confidence: NEUTRAL_CONFIDENCE,
            mood_distribution: MoodDistribution::uniform(),
            tracks_analyzed: 0,
            method: AnalysisMethod::Default,
            lyrics_coverage: 0.0,
            analysis_components: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_result() {
        let result = MoodResult::neutral();
        assert_eq!(result.primary_mood, "neutral");
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.tracks_analyzed, 0);
        assert_eq!(result.method, AnalysisMethod::Default);
        assert_eq!(result.mood_distribution.len(), MoodLabel::COUNT);
        assert!((result.mood_distribution.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&AnalysisMethod::GenreMetadataAnalysis).unwrap(),
            "\"genre-metadata-analysis\""
        );
        assert_eq!(
            serde_json::to_string(&AnalysisMethod::EnhancedLyricsGenreMetadata).unwrap(),
            "\"enhanced-lyrics-genre-metadata\""
        );
        assert_eq!(
            serde_json::to_string(&AnalysisMethod::GenreMetadataOnly).unwrap(),
            "\"genre-metadata-only\""
        );
        assert_eq!(
            serde_json::to_string(&AnalysisMethod::Default).unwrap(),
            "\"default\""
        );
    }

    #[test]
    fn test_track_signal_deserializes_with_defaults() {
        let json = r#"{"id": "track_1", "name": "Test Song"}"#;
        let track: TrackSignal = serde_json::from_str(json).unwrap();

        assert_eq!(track.id, "track_1");
        assert_eq!(track.name, "Test Song");
        assert!(track.genres.is_empty());
        assert!(track.popularity.is_none());
        assert!(track.duration_ms.is_none());
        assert!(!track.explicit);
        assert!(track.release_year.is_none());
    }

    #[test]
    fn test_mood_result_serialization() {
        let result = MoodResult::neutral();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"primary_mood\":\"neutral\""));
        assert!(json.contains("\"method\":\"default\""));
        // Components are omitted when absent
        assert!(!json.contains("analysis_components"));

        let decoded: MoodResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.primary_mood, "neutral");
        assert_eq!(decoded.method, AnalysisMethod::Default);
    }
}
