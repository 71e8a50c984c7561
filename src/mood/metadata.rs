//! Genre and metadata based mood scoring.
//!
//! The primary classification path: artist genre tags are looked up in the
//! static genre table, track/artist/album names are scanned for mood
//! keywords, and a handful of metadata heuristics nudge the totals. Scores
//! are averaged across the playlist, never per match.

use std::collections::HashMap;

use aho_corasick::AhoCorasick;
use tracing::debug;

use crate::config::EngineConfig;

use super::genres::GENRE_PROFILES;
use super::labels::MoodLabel;
use super::lexicon::METADATA_KEYWORDS;
use super::vector::MoodVector;
use super::{
    AnalysisMethod, EngineError, MoodResult, TrackSignal, NEUTRAL_CONFIDENCE, NEUTRAL_MOOD,
};

/// Version tag recorded with genre-metadata analyses.
pub const GENRE_METADATA_VERSION: &str = "genre-metadata-v1.0";

/// Scorer over genre tags, name keywords and track metadata.
pub struct GenreMetadataScorer {
    config: EngineConfig,
    genre_map: HashMap<&'static str, &'static [(MoodLabel, f64)]>,
    keyword_matcher: AhoCorasick,
    /// Pattern index -> mood credited for that keyword
    keyword_moods: Vec<MoodLabel>,
}

impl GenreMetadataScorer {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let mut genre_map = HashMap::with_capacity(GENRE_PROFILES.len());
        for profile in GENRE_PROFILES {
            genre_map.insert(profile.genre, profile.moods);
        }

        let mut patterns = Vec::new();
        let mut keyword_moods = Vec::new();
        for entry in METADATA_KEYWORDS {
            for word in entry.words {
                patterns.push(*word);
                keyword_moods.push(entry.mood);
            }
        }

        let keyword_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| EngineError::KeywordMatcher(e.to_string()))?;

        Ok(Self {
            config: config.clone(),
            genre_map,
            keyword_matcher,
            keyword_moods,
        })
    }

    pub fn version(&self) -> &'static str {
        GENRE_METADATA_VERSION
    }

    /// Score one track. Tracks with no recognizable signal yield a zero
    /// vector, not an error.
    pub fn score_track(&self, track: &TrackSignal) -> MoodVector {
        let mut scores = MoodVector::new();

        // Genre contribution
        for genre in &track.genres {
            let key = genre.trim().to_lowercase();
            if let Some(moods) = self.genre_map.get(key.as_str()) {
                for (mood, weight) in *moods {
                    scores.add(*mood, weight * self.config.genre_weight);
                }
            }
        }

        // Keyword contribution: one hit per distinct keyword present
        let text = format!("{} {} {}", track.name, track.artist, track.album).to_lowercase();
        let mut seen = vec![false; self.keyword_moods.len()];
        for hit in self.keyword_matcher.find_overlapping_iter(&text) {
            seen[hit.pattern().as_usize()] = true;
        }
        for (pattern, hit) in seen.into_iter().enumerate() {
            if hit {
                scores.add(self.keyword_moods[pattern], self.config.keyword_weight);
            }
        }

        // Metadata nudges
        let nudges = &self.config.nudges;
        if let Some(duration_ms) = track.duration_ms {
            let duration_ms = duration_ms.max(0);
            if duration_ms > 0 {
                if duration_ms < nudges.short_track_ms {
                    scores.add(MoodLabel::Energetic, nudges.short_track_bonus);
                    scores.add(MoodLabel::Upbeat, nudges.short_track_bonus);
                } else if duration_ms > nudges.long_track_ms {
                    scores.add(MoodLabel::Calm, nudges.long_track_bonus);
                    scores.add(MoodLabel::Melancholic, nudges.long_track_bonus);
                }
            }
        }

        if let Some(popularity) = track.popularity {
            let popularity = popularity.clamp(0, 100);
            if popularity > nudges.high_popularity {
                scores.add(MoodLabel::Happy, nudges.popularity_bonus);
                scores.add(MoodLabel::Upbeat, nudges.popularity_bonus);
            } else if popularity < nudges.low_popularity {
                scores.add(MoodLabel::Melancholic, nudges.popularity_bonus);
            }
        }

        if track.explicit {
            scores.add(MoodLabel::Angry, nudges.explicit_bonus);
            scores.add(MoodLabel::Energetic, nudges.explicit_bonus);
        }

        scores
    }

    /// Score a whole playlist: mean of the per-track vectors, finalized into
    /// a normalized distribution. Empty input yields the neutral default.
    pub fn score_playlist(&self, tracks: &[TrackSignal]) -> MoodResult {
        if tracks.is_empty() {
            return MoodResult::neutral();
        }

        let mut averaged = MoodVector::new();
        for track in tracks {
            averaged.merge_scaled(&self.score_track(track), 1.0);
        }
        averaged.scale(1.0 / tracks.len() as f64);

        let (primary_mood, confidence) = match averaged.argmax() {
            Some((name, value)) => (name.to_string(), value.min(1.0)),
            None => (NEUTRAL_MOOD.to_string(), NEUTRAL_CONFIDENCE),
        };

        debug!(
            primary_mood = %primary_mood,
            confidence,
            tracks_analyzed = tracks.len(),
            "genre-metadata classification completed"
        );

        MoodResult {
            primary_mood,
            confidence,
            mood_distribution: averaged.to_distribution(),
            tracks_analyzed: tracks.len(),
            method: AnalysisMethod::GenreMetadataAnalysis,
            lyrics_coverage: 0.0,
            analysis_components: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> GenreMetadataScorer {
        GenreMetadataScorer::new(&EngineConfig::default()).expect("scorer should build")
    }

    fn track(id: &str, name: &str, genres: &[&str]) -> TrackSignal {
        TrackSignal {
            id: id.to_string(),
            name: name.to_string(),
            artist: String::new(),
            album: String::new(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            popularity: None,
            duration_ms: None,
            explicit: false,
            release_year: None,
        }
    }

    #[test]
    fn test_empty_playlist_yields_neutral_default() {
        let result = scorer().score_playlist(&[]);
        assert_eq!(result.primary_mood, "neutral");
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.tracks_analyzed, 0);
        assert_eq!(result.method, AnalysisMethod::Default);
        for (_, value) in result.mood_distribution.iter() {
            assert!((value - 0.125).abs() < 1e-12);
        }
    }

    #[test]
    fn test_genre_contribution_weighted() {
        let scores = scorer().score_track(&track("t1", "", &["pop"]));
        assert!((scores.get(MoodLabel::Happy) - 0.8 * 0.7).abs() < 1e-9);
        assert!((scores.get(MoodLabel::Upbeat) - 0.9 * 0.7).abs() < 1e-9);
        assert!((scores.get(MoodLabel::Energetic) - 0.6 * 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_genre_evidence_is_monotonic() {
        let scorer = scorer();
        let with_genre = scorer.score_track(&track("t1", "Some Song", &["pop"]));
        let without = scorer.score_track(&track("t2", "Some Song", &[]));

        for label in [MoodLabel::Happy, MoodLabel::Upbeat, MoodLabel::Energetic] {
            assert!(
                with_genre.get(label) > without.get(label),
                "{label} did not increase with the pop genre"
            );
        }
    }

    #[test]
    fn test_unknown_genre_is_ignored() {
        let scores = scorer().score_track(&track("t1", "", &["vaporwave", "witch house"]));
        assert!(scores.is_zero());
    }

    #[test]
    fn test_genre_lookup_case_insensitive() {
        let scores = scorer().score_track(&track("t1", "", &["  Pop "]));
        assert!(scores.get(MoodLabel::Happy) > 0.0);
    }

    #[test]
    fn test_keyword_hits_add_per_distinct_keyword() {
        let scorer = scorer();
        let one = scorer.score_track(&track("t1", "Smile", &[]));
        assert!((one.get(MoodLabel::Happy) - 0.3).abs() < 1e-9);

        let two = scorer.score_track(&track("t2", "Sunshine Smile", &[]));
        assert!((two.get(MoodLabel::Happy) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let scores = scorer().score_track(&track("t1", "Happy Happy Happy", &[]));
        assert!((scores.get(MoodLabel::Happy) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_keywords_span_name_artist_album() {
        let mut t = track("t1", "Untitled", &[]);
        t.artist = "The Lonely Ones".to_string();
        t.album = "Dance Forever".to_string();
        let scores = scorer().score_track(&t);

        // "lonely" -> sad, "dance" -> upbeat, "forever" -> romantic
        assert!(scores.get(MoodLabel::Sad) > 0.0);
        assert!(scores.get(MoodLabel::Upbeat) > 0.0);
        assert!(scores.get(MoodLabel::Romantic) > 0.0);
    }

    #[test]
    fn test_duration_nudges() {
        let scorer = scorer();

        let mut short = track("t1", "", &[]);
        short.duration_ms = Some(120_000);
        let scores = scorer.score_track(&short);
        assert!((scores.get(MoodLabel::Energetic) - 0.2).abs() < 1e-9);
        assert!((scores.get(MoodLabel::Upbeat) - 0.2).abs() < 1e-9);

        let mut long = track("t2", "", &[]);
        long.duration_ms = Some(400_000);
        let scores = scorer.score_track(&long);
        assert!((scores.get(MoodLabel::Calm) - 0.1).abs() < 1e-9);
        assert!((scores.get(MoodLabel::Melancholic) - 0.1).abs() < 1e-9);

        let mut zero = track("t3", "", &[]);
        zero.duration_ms = Some(0);
        assert!(scorer.score_track(&zero).is_zero());
    }

    #[test]
    fn test_popularity_nudges_and_clamping() {
        let scorer = scorer();

        let mut popular = track("t1", "", &[]);
        popular.popularity = Some(90);
        let scores = scorer.score_track(&popular);
        assert!((scores.get(MoodLabel::Happy) - 0.1).abs() < 1e-9);
        assert!((scores.get(MoodLabel::Upbeat) - 0.1).abs() < 1e-9);

        let mut obscure = track("t2", "", &[]);
        obscure.popularity = Some(10);
        let scores = scorer.score_track(&obscure);
        assert!((scores.get(MoodLabel::Melancholic) - 0.1).abs() < 1e-9);

        // Out-of-range values clamp into the accepted range
        let mut over = track("t3", "", &[]);
        over.popularity = Some(150);
        assert!(scorer.score_track(&over).get(MoodLabel::Happy) > 0.0);

        let mut negative = track("t4", "", &[]);
        negative.popularity = Some(-5);
        assert!(scorer.score_track(&negative).get(MoodLabel::Melancholic) > 0.0);

        // Absent popularity contributes nothing
        let neutral = track("t5", "", &[]);
        assert!(scorer.score_track(&neutral).is_zero());
    }

    #[test]
    fn test_explicit_nudge() {
        let mut t = track("t1", "", &[]);
        t.explicit = true;
        let scores = scorer().score_track(&t);
        assert!((scores.get(MoodLabel::Angry) - 0.1).abs() < 1e-9);
        assert!((scores.get(MoodLabel::Energetic) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_playlist_averages_over_all_tracks() {
        let result = scorer().score_playlist(&[track("t1", "", &["pop"]), track("t2", "", &[])]);

        // pop's happy component, diluted by the signal-free track
        assert!(result.mood_distribution.get("happy") > 0.0);
        assert_eq!(result.tracks_analyzed, 2);
        assert_eq!(result.primary_mood, "upbeat");
        assert!((result.confidence - 0.9 * 0.7 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_normalized_for_any_nonempty_input() {
        let result = scorer().score_playlist(&[
            track("t1", "Happy Fire", &["metal", "jazz"]),
            track("t2", "", &[]),
        ]);
        assert!((result.mood_distribution.total() - 1.0).abs() < 1e-6);
        for label in MoodLabel::ALL {
            assert!(result.mood_distribution.get(label.as_str()) >= 0.0);
            assert!(result.mood_distribution.contains(label.as_str()));
        }
    }

    #[test]
    fn test_zero_signal_playlist_reports_neutral() {
        let result = scorer().score_playlist(&[track("t1", "", &[])]);
        assert_eq!(result.primary_mood, "neutral");
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.tracks_analyzed, 1);
        assert_eq!(result.method, AnalysisMethod::GenreMetadataAnalysis);
        for (_, value) in result.mood_distribution.iter() {
            assert!((value - 0.125).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let scorer = scorer();
        // "smile" scores happy 0.3, "dance" scores upbeat 0.3: an exact tie
        let tied = track("t1", "Smile Dance", &[]);
        for _ in 0..20 {
            let result = scorer.score_playlist(std::slice::from_ref(&tied));
            assert_eq!(result.primary_mood, "happy");
        }
    }

    #[test]
    fn test_confidence_caps_at_one() {
        let stacked = track("t1", "", &["pop", "dance", "disco", "edm", "salsa", "latin"]);
        let result = scorer().score_playlist(&[stacked]);
        assert_eq!(result.confidence, 1.0);
    }
}
