//! Static genre-to-mood weight table.
//!
//! Artist genre tags are the strongest single signal the classifier has.
//! Each known genre contributes a partial mood sub-vector; the scorer scales
//! these by its genre weight before accumulation. Unknown genres contribute
//! nothing.

use super::labels::MoodLabel;

/// A genre's mood sub-vector.
#[derive(Debug, Clone, Copy)]
pub struct GenreProfile {
    /// Lowercase genre tag, matched case-insensitively against input.
    pub genre: &'static str,
    /// Mood components, each in (0.0, 1.0].
    pub moods: &'static [(MoodLabel, f64)],
}

use super::labels::MoodLabel::{Angry, Calm, Energetic, Happy, Melancholic, Romantic, Sad, Upbeat};

// ============================================================================
// Happy / upbeat genres
// ============================================================================

pub const GENRE_PROFILES: &[GenreProfile] = &[
    GenreProfile {
        genre: "pop",
        moods: &[(Happy, 0.8), (Upbeat, 0.9), (Energetic, 0.6)],
    },
    GenreProfile {
        genre: "dance",
        moods: &[(Upbeat, 0.9), (Energetic, 0.8), (Happy, 0.7)],
    },
    GenreProfile {
        genre: "funk",
        moods: &[(Upbeat, 0.8), (Energetic, 0.7), (Happy, 0.6)],
    },
    GenreProfile {
        genre: "disco",
        moods: &[(Upbeat, 0.9), (Happy, 0.8), (Energetic, 0.6)],
    },
    GenreProfile {
        genre: "reggae",
        moods: &[(Calm, 0.7), (Happy, 0.6), (Upbeat, 0.5)],
    },
    GenreProfile {
        genre: "afrobeat",
        moods: &[(Upbeat, 0.8), (Energetic, 0.7), (Happy, 0.8)],
    },
    // ------------------------------------------------------------------
    // Energetic genres
    // ------------------------------------------------------------------
    GenreProfile {
        genre: "rock",
        moods: &[(Energetic, 0.8), (Upbeat, 0.6), (Angry, 0.4)],
    },
    GenreProfile {
        genre: "punk",
        moods: &[(Energetic, 0.9), (Angry, 0.7), (Upbeat, 0.5)],
    },
    GenreProfile {
        genre: "metal",
        moods: &[(Energetic, 0.9), (Angry, 0.8)],
    },
    GenreProfile {
        genre: "hard rock",
        moods: &[(Energetic, 0.8), (Upbeat, 0.6), (Angry, 0.5)],
    },
    GenreProfile {
        genre: "electronic",
        moods: &[(Energetic, 0.7), (Upbeat, 0.8), (Happy, 0.5)],
    },
    GenreProfile {
        genre: "edm",
        moods: &[(Energetic, 0.9), (Upbeat, 0.8), (Happy, 0.6)],
    },
    GenreProfile {
        genre: "dubstep",
        moods: &[(Energetic, 0.9), (Upbeat, 0.6)],
    },
    GenreProfile {
        genre: "techno",
        moods: &[(Energetic, 0.8), (Upbeat, 0.7)],
    },
    GenreProfile {
        genre: "house",
        moods: &[(Upbeat, 0.8), (Energetic, 0.7), (Happy, 0.6)],
    },
    // ------------------------------------------------------------------
    // Calm / chill genres
    // ------------------------------------------------------------------
    GenreProfile {
        genre: "ambient",
        moods: &[(Calm, 0.9)],
    },
    GenreProfile {
        genre: "chillout",
        moods: &[(Calm, 0.8)],
    },
    GenreProfile {
        genre: "lo-fi",
        moods: &[(Calm, 0.8), (Melancholic, 0.5)],
    },
    GenreProfile {
        genre: "new age",
        moods: &[(Calm, 0.9)],
    },
    GenreProfile {
        genre: "meditation",
        moods: &[(Calm, 0.9)],
    },
    // ------------------------------------------------------------------
    // Sad / melancholic genres
    // ------------------------------------------------------------------
    GenreProfile {
        genre: "blues",
        moods: &[(Sad, 0.8), (Melancholic, 0.9)],
    },
    GenreProfile {
        genre: "folk",
        moods: &[(Melancholic, 0.6), (Calm, 0.6)],
    },
    GenreProfile {
        genre: "indie folk",
        moods: &[(Melancholic, 0.7), (Calm, 0.6)],
    },
    GenreProfile {
        genre: "shoegaze",
        moods: &[(Melancholic, 0.8)],
    },
    GenreProfile {
        genre: "emo",
        moods: &[(Sad, 0.8), (Melancholic, 0.8)],
    },
    GenreProfile {
        genre: "gothic",
        moods: &[(Melancholic, 0.8), (Sad, 0.7)],
    },
    // ------------------------------------------------------------------
    // Romantic genres
    // ------------------------------------------------------------------
    GenreProfile {
        genre: "r&b",
        moods: &[(Romantic, 0.8)],
    },
    GenreProfile {
        genre: "soul",
        moods: &[(Romantic, 0.7)],
    },
    GenreProfile {
        genre: "neo soul",
        moods: &[(Romantic, 0.8)],
    },
    GenreProfile {
        genre: "jazz",
        moods: &[(Romantic, 0.6)],
    },
    GenreProfile {
        genre: "smooth jazz",
        moods: &[(Romantic, 0.7), (Calm, 0.7)],
    },
    GenreProfile {
        genre: "bossa nova",
        moods: &[(Romantic, 0.8), (Calm, 0.7)],
    },
    // ------------------------------------------------------------------
    // Aggressive / angry genres
    // ------------------------------------------------------------------
    GenreProfile {
        genre: "hardcore",
        moods: &[(Angry, 0.9), (Energetic, 0.8)],
    },
    GenreProfile {
        genre: "death metal",
        moods: &[(Angry, 0.9)],
    },
    GenreProfile {
        genre: "thrash metal",
        moods: &[(Angry, 0.8), (Energetic, 0.9)],
    },
    GenreProfile {
        genre: "rap",
        moods: &[(Energetic, 0.7), (Upbeat, 0.6)],
    },
    GenreProfile {
        genre: "trap",
        moods: &[(Energetic, 0.8)],
    },
    GenreProfile {
        genre: "drill",
        moods: &[(Energetic, 0.7)],
    },
    // ------------------------------------------------------------------
    // Latin / world genres
    // ------------------------------------------------------------------
    GenreProfile {
        genre: "latin",
        moods: &[(Upbeat, 0.8), (Energetic, 0.7), (Happy, 0.8)],
    },
    GenreProfile {
        genre: "salsa",
        moods: &[(Upbeat, 0.9), (Energetic, 0.8), (Happy, 0.8)],
    },
    GenreProfile {
        genre: "reggaeton",
        moods: &[(Upbeat, 0.8), (Energetic, 0.8)],
    },
    GenreProfile {
        genre: "k-pop",
        moods: &[(Upbeat, 0.8), (Energetic, 0.7), (Happy, 0.8)],
    },
    GenreProfile {
        genre: "bollywood",
        moods: &[(Upbeat, 0.7), (Energetic, 0.6)],
    },
    // ------------------------------------------------------------------
    // Alternative / indie genres
    // ------------------------------------------------------------------
    GenreProfile {
        genre: "indie",
        moods: &[(Melancholic, 0.6)],
    },
    GenreProfile {
        genre: "alternative",
        moods: &[(Melancholic, 0.5), (Energetic, 0.6)],
    },
    GenreProfile {
        genre: "grunge",
        moods: &[(Angry, 0.6), (Melancholic, 0.7)],
    },
];

/// Number of genres the classifier knows about.
pub fn genre_count() -> usize {
    GENRE_PROFILES.len()
}

/// Look up a genre tag, case-insensitively.
pub fn genre_profile(genre: &str) -> Option<&'static GenreProfile> {
    GENRE_PROFILES
        .iter()
        .find(|profile| profile.genre.eq_ignore_ascii_case(genre.trim()))
}
