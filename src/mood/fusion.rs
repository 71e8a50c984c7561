//! Coverage-adaptive fusion of genre-metadata and lyrics scoring.
//!
//! The genre-metadata scorer always runs; when lyrics are supplied its
//! normalized distribution is blended with the lyrics score vector using
//! weights chosen from the lyrics coverage, then renormalized. Stateless and
//! re-entrant: each call is a pure computation over its inputs.

use std::collections::HashMap;

use tracing::info;

use crate::config::{EngineConfig, FusionConfig};

use super::lyrics::LyricsSentimentScorer;
use super::metadata::GenreMetadataScorer;
use super::vector::MoodVector;
use super::{AnalysisComponents, AnalysisMethod, EngineError, MoodResult, TrackSignal};

/// Version tag recorded with lyrics-enhanced analyses.
pub const ENHANCED_LYRICS_VERSION: &str = "enhanced-lyrics-v1.0";

/// Combines both scorers into a single playlist-level result.
pub struct MoodFusionEngine {
    genre_scorer: GenreMetadataScorer,
    lyrics_scorer: LyricsSentimentScorer,
    fusion: FusionConfig,
}

impl MoodFusionEngine {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            genre_scorer: GenreMetadataScorer::new(config)?,
            lyrics_scorer: LyricsSentimentScorer::new(),
            fusion: config.fusion.clone(),
        })
    }

    pub fn genre_scorer(&self) -> &GenreMetadataScorer {
        &self.genre_scorer
    }

    pub fn lyrics_scorer(&self) -> &LyricsSentimentScorer {
        &self.lyrics_scorer
    }

    /// Whether the lyrics sentiment backend initialized.
    pub fn lyrics_available(&self) -> bool {
        self.lyrics_scorer.is_available()
    }

    pub fn version(&self) -> &'static str {
        ENHANCED_LYRICS_VERSION
    }

    /// Classify a playlist, blending in lyrics analysis when lyrics are
    /// supplied.
    ///
    /// An empty lyrics map means lyrics were never requested; a non-empty
    /// map with no usable entries re-tags the base result as
    /// genre-metadata-only.
    pub fn analyze(
        &self,
        tracks: &[TrackSignal],
        lyrics_by_track: &HashMap<String, String>,
    ) -> MoodResult {
        if tracks.is_empty() {
            return MoodResult::neutral();
        }

        let base = self.genre_scorer.score_playlist(tracks);
        if lyrics_by_track.is_empty() {
            return base;
        }

        let usable = lyrics_by_track
            .values()
            .filter(|text| !text.trim().is_empty())
            .count();
        if usable == 0 {
            let mut result = base;
            result.method = AnalysisMethod::GenreMetadataOnly;
            result.lyrics_coverage = 0.0;
            info!(
                primary_mood = %result.primary_mood,
                "no usable lyrics, falling back to genre-metadata analysis"
            );
            return result;
        }

        let coverage = usable as f64 / tracks.len() as f64;
        let (genre_weight, lyrics_weight) = if coverage < self.fusion.coverage_threshold {
            (
                self.fusion.sparse_genre_weight,
                self.fusion.sparse_lyrics_weight,
            )
        } else {
            (self.fusion.genre_weight, self.fusion.lyrics_weight)
        };

        let lyrics_scores = self.lyrics_scorer.score_lyrics_batch(lyrics_by_track);

        let mut combined = MoodVector::new();
        for (name, value) in base.mood_distribution.iter() {
            combined.add_named(name, value * genre_weight);
        }
        combined.merge_scaled(&lyrics_scores, lyrics_weight);

        let distribution;
        let primary_mood;
        let confidence;
        if combined.total() > 0.0 {
            distribution = combined.to_distribution();
            match distribution.argmax() {
                Some((name, value)) => {
                    primary_mood = name.to_string();
                    confidence = value.min(1.0);
                }
                None => {
                    primary_mood = base.primary_mood.clone();
                    confidence = base.confidence;
                }
            }
        } else {
            distribution = base.mood_distribution.clone();
            primary_mood = base.primary_mood.clone();
            confidence = base.confidence;
        }

        info!(
            primary_mood = %primary_mood,
            confidence,
            lyrics_coverage = coverage,
            lyrics_tracks = usable,
            total_tracks = tracks.len(),
            "enhanced mood analysis completed"
        );

        MoodResult {
            primary_mood,
            confidence,
            mood_distribution: distribution,
            tracks_analyzed: tracks.len(),
            method: AnalysisMethod::EnhancedLyricsGenreMetadata,
            lyrics_coverage: coverage,
            analysis_components: Some(AnalysisComponents {
                genre_metadata_weight: genre_weight,
                lyrics_weight,
                lyrics_tracks: usable,
                total_tracks: tracks.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodLabel;

    fn engine() -> MoodFusionEngine {
        MoodFusionEngine::new(&EngineConfig::default()).expect("engine should build")
    }

    fn track(id: &str, genres: &[&str]) -> TrackSignal {
        TrackSignal {
            id: id.to_string(),
            name: String::new(),
            artist: String::new(),
            album: String::new(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            popularity: None,
            duration_ms: None,
            explicit: false,
            release_year: None,
        }
    }

    fn lyrics_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_input_returns_default() {
        let result = engine().analyze(&[], &lyrics_map(&[("t1", "some lyrics")]));
        assert_eq!(result.primary_mood, "neutral");
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.tracks_analyzed, 0);
        assert_eq!(result.method, AnalysisMethod::Default);
        assert_eq!(result.lyrics_coverage, 0.0);
    }

    #[test]
    fn test_no_lyrics_requested_keeps_base_method() {
        let result = engine().analyze(&[track("t1", &["pop"])], &HashMap::new());
        assert_eq!(result.method, AnalysisMethod::GenreMetadataAnalysis);
        assert_eq!(result.lyrics_coverage, 0.0);
        assert!(result.analysis_components.is_none());
        assert_eq!(result.primary_mood, "upbeat");
    }

    #[test]
    fn test_all_empty_lyrics_tags_genre_metadata_only() {
        let tracks = vec![track("t1", &["pop"]), track("t2", &["rock"])];
        let lyrics = lyrics_map(&[("t1", ""), ("t2", "   ")]);
        let result = engine().analyze(&tracks, &lyrics);

        assert_eq!(result.method, AnalysisMethod::GenreMetadataOnly);
        assert_eq!(result.lyrics_coverage, 0.0);
        assert!(result.analysis_components.is_none());
    }

    #[test]
    fn test_sparse_coverage_weights() {
        let tracks: Vec<TrackSignal> = (0..10)
            .map(|i| track(&format!("t{i}"), &["pop"]))
            .collect();
        let lyrics = lyrics_map(&[("t0", "pumped"), ("t1", "pumped")]);
        let result = engine().analyze(&tracks, &lyrics);

        assert_eq!(result.method, AnalysisMethod::EnhancedLyricsGenreMetadata);
        assert!((result.lyrics_coverage - 0.2).abs() < 1e-9);
        let components = result.analysis_components.expect("components present");
        assert_eq!(components.genre_metadata_weight, 0.8);
        assert_eq!(components.lyrics_weight, 0.2);
        assert_eq!(components.lyrics_tracks, 2);
        assert_eq!(components.total_tracks, 10);
    }

    #[test]
    fn test_adequate_coverage_weights() {
        let tracks: Vec<TrackSignal> = (0..10)
            .map(|i| track(&format!("t{i}"), &["pop"]))
            .collect();
        let lyrics: HashMap<String, String> = (0..5)
            .map(|i| (format!("t{i}"), "pumped".to_string()))
            .collect();
        let result = engine().analyze(&tracks, &lyrics);

        assert!((result.lyrics_coverage - 0.5).abs() < 1e-9);
        let components = result.analysis_components.expect("components present");
        assert_eq!(components.genre_metadata_weight, 0.6);
        assert_eq!(components.lyrics_weight, 0.4);
    }

    #[test]
    fn test_fused_distribution_is_normalized() {
        let tracks = vec![track("t1", &["pop"]), track("t2", &["blues"])];
        let lyrics = lyrics_map(&[("t1", "love joy wonderful"), ("t2", "sorrow and grief")]);
        let result = engine().analyze(&tracks, &lyrics);

        assert!((result.mood_distribution.total() - 1.0).abs() < 1e-6);
        for label in MoodLabel::ALL {
            assert!(result.mood_distribution.contains(label.as_str()));
            assert!(result.mood_distribution.get(label.as_str()) >= 0.0);
        }
        // Confidence equals the primary mood's normalized weight
        let primary_weight = result.mood_distribution.get(&result.primary_mood);
        assert!((result.confidence - primary_weight).abs() < 1e-9);
    }

    #[test]
    fn test_lyrics_shift_the_distribution() {
        let tracks = vec![track("t1", &["pop"])];

        let without = engine().analyze(&tracks, &HashMap::new());
        let with_sad = engine().analyze(
            &tracks,
            &lyrics_map(&[("t1", "sorrow misery despair heartbreak grief")]),
        );

        assert!(with_sad.mood_distribution.get("sad") > without.mood_distribution.get("sad"));
    }

    #[test]
    fn test_transient_labels_survive_fusion() {
        let tracks = vec![track("t1", &["pop"])];
        let lyrics = lyrics_map(&[("t1", "why did it end?\nwhere did it all go wrong?")]);
        let result = engine().analyze(&tracks, &lyrics);

        assert!(result.mood_distribution.contains("contemplative"));
        assert!(result.mood_distribution.get("contemplative") > 0.0);
    }

    #[test]
    fn test_tracks_analyzed_counts_all_tracks() {
        let tracks = vec![track("t1", &["pop"]), track("t2", &[])];
        let lyrics = lyrics_map(&[("t1", "pumped")]);
        let result = engine().analyze(&tracks, &lyrics);
        assert_eq!(result.tracks_analyzed, 2);
    }
}
