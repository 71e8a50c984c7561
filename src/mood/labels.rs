//! Mood label vocabulary.
//!
//! The classifier scores playlists against a closed set of eight canonical
//! moods. Sub-analyzers may additionally emit transient labels (such as
//! `contemplative` from the lyrics structure pass); those ride along in
//! score vectors and distributions but are never part of the guaranteed
//! eight-slot completion.

use serde::{Deserialize, Serialize};

/// The canonical mood categories.
///
/// Declaration order is significant: it is the tie-break order used when
/// selecting a primary mood from equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Energetic,
    Calm,
    Angry,
    Romantic,
    Melancholic,
    Upbeat,
}

impl MoodLabel {
    /// Number of canonical moods.
    pub const COUNT: usize = 8;

    /// All canonical moods in tie-break order.
    pub const ALL: [MoodLabel; MoodLabel::COUNT] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Energetic,
        MoodLabel::Calm,
        MoodLabel::Angry,
        MoodLabel::Romantic,
        MoodLabel::Melancholic,
        MoodLabel::Upbeat,
    ];

    /// Lowercase identifier, matching the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Sad => "sad",
            MoodLabel::Energetic => "energetic",
            MoodLabel::Calm => "calm",
            MoodLabel::Angry => "angry",
            MoodLabel::Romantic => "romantic",
            MoodLabel::Melancholic => "melancholic",
            MoodLabel::Upbeat => "upbeat",
        }
    }

    /// Display name for listings.
    pub fn display_name(self) -> &'static str {
        match self {
            MoodLabel::Happy => "Happy",
            MoodLabel::Sad => "Sad",
            MoodLabel::Energetic => "Energetic",
            MoodLabel::Calm => "Calm",
            MoodLabel::Angry => "Angry",
            MoodLabel::Romantic => "Romantic",
            MoodLabel::Melancholic => "Melancholic",
            MoodLabel::Upbeat => "Upbeat",
        }
    }

    /// Parse a lowercase identifier back into a canonical label.
    pub fn parse(s: &str) -> Option<MoodLabel> {
        MoodLabel::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Position in the canonical order.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mood key as it appears in score vectors and distributions: either one
/// of the canonical eight or a transient label emitted by a sub-analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mood {
    Canonical(MoodLabel),
    Extra(String),
}

impl Mood {
    pub fn as_str(&self) -> &str {
        match self {
            Mood::Canonical(label) => label.as_str(),
            Mood::Extra(name) => name,
        }
    }

    /// Interpret a name, folding canonical identifiers into their enum form.
    pub fn from_name(name: &str) -> Mood {
        match MoodLabel::parse(name) {
            Some(label) => Mood::Canonical(label),
            None => Mood::Extra(name.to_string()),
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, Mood::Canonical(_))
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = MoodLabel::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "happy",
                "sad",
                "energetic",
                "calm",
                "angry",
                "romantic",
                "melancholic",
                "upbeat"
            ]
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        for label in MoodLabel::ALL {
            assert_eq!(MoodLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(MoodLabel::parse("contemplative"), None);
        assert_eq!(MoodLabel::parse("Happy"), None);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, label) in MoodLabel::ALL.into_iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn test_mood_from_name() {
        assert_eq!(
            Mood::from_name("happy"),
            Mood::Canonical(MoodLabel::Happy)
        );
        assert_eq!(
            Mood::from_name("contemplative"),
            Mood::Extra("contemplative".to_string())
        );
        assert!(Mood::from_name("upbeat").is_canonical());
        assert!(!Mood::from_name("dreamy").is_canonical());
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&MoodLabel::Melancholic).unwrap();
        assert_eq!(json, "\"melancholic\"");

        let decoded: MoodLabel = serde_json::from_str("\"upbeat\"").unwrap();
        assert_eq!(decoded, MoodLabel::Upbeat);
    }
}
