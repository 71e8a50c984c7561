//! API types for playlist mood analysis operations.
//!
//! This module contains request/response types for analyzing playlist moods
//! and listing the mood vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::mood::{
    AnalysisComponents, AnalysisMethod, MoodDistribution, MoodResult, TrackSignal,
};

/// Request to analyze a playlist's mood.
///
/// The caller supplies already-fetched track signals and, optionally, a map
/// of track id to cleaned lyrics text. An absent or empty lyrics map means
/// lyrics analysis was not requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzePlaylistRequest {
    /// Track signals, in playlist order
    #[serde(default)]
    pub tracks: Vec<TrackSignal>,

    /// Track id -> cleaned plain-text lyrics
    #[serde(default)]
    pub lyrics: HashMap<String, String>,
}

/// Response from playlist mood analysis: the classification result fields
/// at the top level, plus input statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzePlaylistResponse {
    /// Dominant mood label
    pub primary_mood: String,

    /// Normalized score of the primary mood, capped at 1.0
    pub confidence: f64,

    /// Normalized distribution over all scored moods
    pub mood_distribution: MoodDistribution,

    /// Number of input tracks
    pub tracks_analyzed: usize,

    /// Analysis path taken
    pub method: AnalysisMethod,

    /// Fraction of tracks with usable lyrics
    #[serde(default)]
    pub lyrics_coverage: f64,

    /// Weighting breakdown, present on the enhanced path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_components: Option<AnalysisComponents>,

    /// Input statistics for display and diagnostics
    pub analysis_summary: AnalysisSummary,
}

impl AnalyzePlaylistResponse {
    /// Assemble the response envelope from a result and its summary.
    pub fn new(result: MoodResult, analysis_summary: AnalysisSummary) -> Self {
        AnalyzePlaylistResponse {
            primary_mood: result.primary_mood,
            confidence: result.confidence,
            mood_distribution: result.mood_distribution,
            tracks_analyzed: result.tracks_analyzed,
            method: result.method,
            lyrics_coverage: result.lyrics_coverage,
            analysis_components: result.analysis_components,
            analysis_summary,
        }
    }
}

/// Input statistics reported alongside an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Total tracks submitted
    pub total_tracks: usize,
    /// Tracks that carried at least one genre tag
    pub tracks_with_genres: usize,
    /// Distinct genre tags across the playlist
    pub unique_genres: usize,
    /// First distinct genres encountered, for display
    pub sample_genres: Vec<String>,
    /// Whether lyrics were supplied with the request
    pub use_lyrics: bool,
    /// Engine version tag for the path taken
    pub engine_version: String,
}

/// Maximum number of genres echoed back in the summary.
const SAMPLE_GENRE_LIMIT: usize = 10;

impl AnalysisSummary {
    /// Build summary statistics from the submitted tracks.
    pub fn from_tracks(tracks: &[TrackSignal], use_lyrics: bool, engine_version: &str) -> Self {
        let tracks_with_genres = tracks.iter().filter(|t| !t.genres.is_empty()).count();

        // Distinct genres in first-seen order, compared case-insensitively
        let mut seen = Vec::new();
        let mut sample_genres = Vec::new();
        for track in tracks {
            for genre in &track.genres {
                let key = genre.trim().to_lowercase();
                if key.is_empty() || seen.contains(&key) {
                    continue;
                }
                seen.push(key);
                if sample_genres.len() < SAMPLE_GENRE_LIMIT {
                    sample_genres.push(genre.trim().to_string());
                }
            }
        }

        AnalysisSummary {
            total_tracks: tracks.len(),
            tracks_with_genres,
            unique_genres: seen.len(),
            sample_genres,
            use_lyrics,
            engine_version: engine_version.to_string(),
        }
    }
}

/// Info about one canonical mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodInfo {
    /// Mood identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Size of the track-name keyword list
    pub metadata_keywords: usize,
    /// Size of the lyrics keyword list
    pub lyrics_keywords: usize,
}

/// Response listing the mood vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMoodsResponse {
    /// The canonical moods
    pub moods: Vec<MoodInfo>,
    /// Number of genres the classifier knows about
    pub genre_count: usize,
}
