//! Mood analysis API route handlers.

use axum::extract::State;
use tracing::info;

use crate::error::AppError;
use crate::mood::fusion::ENHANCED_LYRICS_VERSION;
use crate::mood::metadata::GENRE_METADATA_VERSION;
use crate::mood::{genres, lexicon, MoodLabel};
use crate::types::{
    AnalysisSummary, AnalyzePlaylistRequest, AnalyzePlaylistResponse, ListMoodsResponse, MoodInfo,
};

use super::extractors::{Decoded, Encoded};
use super::AppState;

/// POST /api/v1/mood/analyze
///
/// Classify the mood of a playlist from caller-supplied track signals and
/// optional lyrics. Empty input yields the neutral default result rather
/// than an error.
pub async fn analyze_playlist(
    State(state): State<AppState>,
    Decoded { body: req, format }: Decoded<AnalyzePlaylistRequest>,
) -> Result<Encoded<AnalyzePlaylistResponse>, AppError> {
    let use_lyrics = !req.lyrics.is_empty();
    info!(
        total_tracks = req.tracks.len(),
        use_lyrics, "starting playlist mood analysis"
    );

    let result = state.engine.analyze(&req.tracks, &req.lyrics);

    let engine_version = if use_lyrics {
        ENHANCED_LYRICS_VERSION
    } else {
        GENRE_METADATA_VERSION
    };
    let analysis_summary = AnalysisSummary::from_tracks(&req.tracks, use_lyrics, engine_version);

    info!(
        primary_mood = %result.primary_mood,
        confidence = result.confidence,
        method = %result.method,
        "playlist mood analysis completed"
    );

    Ok(Encoded::new(
        AnalyzePlaylistResponse::new(result, analysis_summary),
        format,
    ))
}

/// GET /api/v1/mood/list
///
/// List the canonical mood vocabulary and lexicon sizes.
pub async fn list_moods(State(_state): State<AppState>) -> Encoded<ListMoodsResponse> {
    let moods = MoodLabel::ALL
        .iter()
        .map(|label| MoodInfo {
            id: label.as_str().to_string(),
            name: label.display_name().to_string(),
            metadata_keywords: lexicon::metadata_keywords_for(*label).len(),
            lyrics_keywords: lexicon::lyrics_keywords_for(*label).len(),
        })
        .collect();

    Encoded::msgpack(ListMoodsResponse {
        moods,
        genre_count: genres::genre_count(),
    })
}
