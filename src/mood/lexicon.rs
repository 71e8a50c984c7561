//! Static keyword vocabulary for text and lyrics analysis.
//!
//! Two keyword tiers exist: the compact lists scanned as substrings over
//! track/artist/album names, and the larger per-word lists used by the
//! lyrics pass. The stopword list is curated so that it never shadows a
//! keyword, a negation or an intensifier.

use super::labels::MoodLabel;

/// A mood's keyword list.
#[derive(Debug, Clone, Copy)]
pub struct MoodKeywords {
    pub mood: MoodLabel,
    pub words: &'static [&'static str],
}

// ============================================================================
// Track/artist/album name keywords (substring presence, one hit per keyword)
// ============================================================================

pub const METADATA_KEYWORDS: &[MoodKeywords] = &[
    MoodKeywords {
        mood: MoodLabel::Happy,
        words: &[
            "happy",
            "joy",
            "celebrate",
            "party",
            "fun",
            "good",
            "sunshine",
            "bright",
            "smile",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Sad,
        words: &[
            "sad", "cry", "tear", "lonely", "hurt", "pain", "goodbye", "miss", "lost", "broken",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Angry,
        words: &[
            "angry", "hate", "rage", "mad", "fight", "war", "destroy", "kill", "revenge",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Romantic,
        words: &[
            "love",
            "heart",
            "baby",
            "kiss",
            "forever",
            "together",
            "beautiful",
            "darling",
            "mine",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Energetic,
        words: &[
            "power", "energy", "fire", "strong", "loud", "fast", "run", "jump", "wild",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Calm,
        words: &[
            "calm", "peace", "quiet", "still", "gentle", "soft", "breathe", "relax", "zen",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Melancholic,
        words: &[
            "blue",
            "grey",
            "rain",
            "alone",
            "empty",
            "shadow",
            "dream",
            "yesterday",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Upbeat,
        words: &[
            "up", "high", "fly", "dance", "move", "groove", "rhythm", "beat", "alive",
        ],
    },
];

// ============================================================================
// Lyrics keywords (token match, with intensifier and negation handling)
// ============================================================================

pub const LYRICS_KEYWORDS: &[MoodKeywords] = &[
    MoodKeywords {
        mood: MoodLabel::Happy,
        words: &[
            "happy",
            "joy",
            "celebrate",
            "party",
            "fun",
            "good",
            "sunshine",
            "bright",
            "smile",
            "laugh",
            "cheer",
            "excited",
            "awesome",
            "amazing",
            "wonderful",
            "fantastic",
            "euphoric",
            "bliss",
            "delight",
            "uplifting",
            "positive",
            "elated",
            "cheerful",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Sad,
        words: &[
            "sad",
            "cry",
            "tear",
            "lonely",
            "hurt",
            "pain",
            "goodbye",
            "miss",
            "lost",
            "broken",
            "depressed",
            "sorrow",
            "grief",
            "mourn",
            "weep",
            "despair",
            "anguish",
            "heartbreak",
            "devastated",
            "miserable",
            "gloomy",
            "melancholy",
            "blue",
            "down",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Angry,
        words: &[
            "angry",
            "hate",
            "rage",
            "mad",
            "fight",
            "war",
            "destroy",
            "kill",
            "revenge",
            "furious",
            "pissed",
            "livid",
            "outraged",
            "hostile",
            "aggressive",
            "violent",
            "wrath",
            "fury",
            "enraged",
            "irritated",
            "annoyed",
            "frustrated",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Romantic,
        words: &[
            "love",
            "heart",
            "baby",
            "kiss",
            "forever",
            "together",
            "beautiful",
            "darling",
            "mine",
            "romantic",
            "passion",
            "affection",
            "adore",
            "cherish",
            "devoted",
            "soulmate",
            "intimate",
            "tender",
            "sweet",
            "loving",
            "desire",
            "romance",
            "valentine",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Energetic,
        words: &[
            "power",
            "energy",
            "fire",
            "strong",
            "loud",
            "fast",
            "run",
            "jump",
            "wild",
            "pumped",
            "intense",
            "explosive",
            "dynamic",
            "vigorous",
            "fierce",
            "powerful",
            "electric",
            "charged",
            "hyped",
            "adrenaline",
            "boost",
            "rush",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Calm,
        words: &[
            "calm",
            "peace",
            "quiet",
            "still",
            "gentle",
            "soft",
            "breathe",
            "relax",
            "zen",
            "serene",
            "tranquil",
            "peaceful",
            "soothing",
            "mellow",
            "chill",
            "smooth",
            "easy",
            "comfortable",
            "restful",
            "meditative",
            "mindful",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Melancholic,
        words: &[
            "grey",
            "rain",
            "alone",
            "empty",
            "shadow",
            "dream",
            "yesterday",
            "nostalgia",
            "bittersweet",
            "wistful",
            "pensive",
            "contemplative",
            "reflective",
            "somber",
            "subdued",
            "thoughtful",
            "introspective",
            "distant",
            "fading",
            "blue",
        ],
    },
    MoodKeywords {
        mood: MoodLabel::Upbeat,
        words: &[
            "up",
            "high",
            "fly",
            "dance",
            "move",
            "groove",
            "rhythm",
            "beat",
            "alive",
            "vibrant",
            "lively",
            "bouncy",
            "peppy",
            "spirited",
            "animated",
            "enthusiastic",
            "zippy",
            "snappy",
            "perky",
            "buoyant",
            "vivacious",
            "zesty",
        ],
    },
];

// ============================================================================
// Modifiers
// ============================================================================

/// Words that amplify an immediately following mood keyword.
pub const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "incredibly",
    "absolutely",
    "totally",
    "completely",
    "utterly",
    "deeply",
    "truly",
    "so",
    "too",
    "quite",
];

/// Words that negate a mood keyword within the following three tokens.
pub const NEGATIONS: &[&str] = &[
    "not",
    "no",
    "never",
    "none",
    "nothing",
    "nobody",
    "nowhere",
    "don't",
    "won't",
    "can't",
    "shouldn't",
    "wouldn't",
    "couldn't",
];

/// Function words dropped before the keyword pass. Deliberately excludes
/// every negation and intensifier, and shadows no keyword.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "than", "because", "as", "of", "at", "by",
    "for", "with", "about", "against", "between", "through", "during", "before", "after", "above",
    "below", "from", "in", "out", "on", "off", "over", "under", "again", "here", "there", "when",
    "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "only", "own", "same", "that", "this", "these", "those", "i", "me", "my", "we", "our",
    "you", "your", "he", "him", "his", "she", "her", "it", "its", "they", "them", "their", "what",
    "which", "who", "whom", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "will", "would", "shall", "should", "can",
    "could", "may", "might", "must", "to", "oh", "yeah", "la", "na", "gonna", "wanna", "got",
    "get", "just", "now",
];

// ============================================================================
// Cross-lingual fallback (reduced vocabulary, English + Spanish)
// ============================================================================

pub const CROSS_LINGUAL_KEYWORDS: &[MoodKeywords] = &[
    MoodKeywords {
        mood: MoodLabel::Happy,
        words: &["happy", "amor", "love", "joy", "feliz"],
    },
    MoodKeywords {
        mood: MoodLabel::Sad,
        words: &["sad", "triste", "cry", "dolor", "pain"],
    },
    MoodKeywords {
        mood: MoodLabel::Energetic,
        words: &["energy", "power", "fuerte", "strong"],
    },
    MoodKeywords {
        mood: MoodLabel::Romantic,
        words: &["love", "amor", "heart", "corazón"],
    },
];

// ============================================================================
// Language detection function words
// ============================================================================

pub const ENGLISH_FUNCTION_WORDS: &[&str] = &[
    "the", "and", "you", "that", "for", "with", "this", "have", "from", "they", "will", "what",
    "your", "when", "there", "been", "were", "because", "about", "would",
];

pub const SPANISH_FUNCTION_WORDS: &[&str] = &[
    "el", "los", "las", "una", "del", "que", "por", "para", "con", "como", "pero", "más", "este",
    "esta", "ese", "esa", "mi", "tu", "te", "es",
];

// ============================================================================
// Tokenization
// ============================================================================

/// Lower-cased word tokens: maximal runs of alphabetic characters, keeping
/// inner apostrophes so contracted negatives ("don't") survive as one token.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in lower.chars() {
        if ch.is_alphabetic() || ch == '\'' {
            current.push(ch);
        } else if ch == '\u{2019}' {
            // typographic apostrophe
            current.push('\'');
        } else if !current.is_empty() {
            flush_token(&mut tokens, &mut current);
        }
    }
    if !current.is_empty() {
        flush_token(&mut tokens, &mut current);
    }
    tokens
}

fn flush_token(tokens: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim_matches('\'');
    if trimmed.chars().any(char::is_alphabetic) {
        tokens.push(trimmed.to_string());
    }
    current.clear();
}

// ============================================================================
// Accessors
// ============================================================================

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

pub fn is_intensifier(word: &str) -> bool {
    INTENSIFIERS.contains(&word)
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

/// Metadata keyword list for one canonical mood.
pub fn metadata_keywords_for(mood: MoodLabel) -> &'static [&'static str] {
    METADATA_KEYWORDS
        .iter()
        .find(|entry| entry.mood == mood)
        .map(|entry| entry.words)
        .unwrap_or(&[])
}

/// Lyrics keyword list for one canonical mood.
pub fn lyrics_keywords_for(mood: MoodLabel) -> &'static [&'static str] {
    LYRICS_KEYWORDS
        .iter()
        .find(|entry| entry.mood == mood)
        .map(|entry| entry.words)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_keyword_lists() {
        for label in MoodLabel::ALL {
            assert!(
                !metadata_keywords_for(label).is_empty(),
                "no metadata keywords for {label}"
            );
            assert!(
                !lyrics_keywords_for(label).is_empty(),
                "no lyrics keywords for {label}"
            );
        }
    }

    #[test]
    fn test_lyrics_lists_extend_metadata_lists() {
        for label in MoodLabel::ALL {
            assert!(
                lyrics_keywords_for(label).len() > metadata_keywords_for(label).len(),
                "lyrics list for {label} is not larger"
            );
        }
    }

    #[test]
    fn test_stopwords_shadow_nothing() {
        for word in STOPWORDS {
            assert!(!is_negation(word), "stopword {word} is a negation");
            assert!(!is_intensifier(word), "stopword {word} is an intensifier");
            for entry in LYRICS_KEYWORDS {
                assert!(
                    !entry.words.contains(word),
                    "stopword {word} shadows a {} keyword",
                    entry.mood
                );
            }
        }
    }

    #[test]
    fn test_modifier_lookups() {
        assert!(is_intensifier("very"));
        assert!(is_intensifier("extremely"));
        assert!(is_negation("not"));
        assert!(is_negation("don't"));
        assert!(!is_negation("very"));
        assert!(is_stopword("the"));
        assert!(!is_stopword("not"));
    }

    #[test]
    fn test_tokenize_keeps_contractions() {
        let tokens = tokenize("I don't feel ALIVE, no...");
        assert_eq!(tokens, vec!["i", "don't", "feel", "alive", "no"]);
    }

    #[test]
    fn test_tokenize_typographic_apostrophe() {
        let tokens = tokenize("don\u{2019}t stop");
        assert_eq!(tokens, vec!["don't", "stop"]);
    }

    #[test]
    fn test_tokenize_strips_edge_apostrophes_and_digits() {
        let tokens = tokenize("'cause 1999 was 'great'");
        assert_eq!(tokens, vec!["cause", "was", "great"]);
    }

    #[test]
    fn test_cross_lingual_covers_both_languages() {
        for entry in CROSS_LINGUAL_KEYWORDS {
            assert!(entry.words.len() >= 4, "{} list too small", entry.mood);
        }
        let happy = CROSS_LINGUAL_KEYWORDS
            .iter()
            .find(|e| e.mood == MoodLabel::Happy)
            .unwrap();
        assert!(happy.words.contains(&"feliz"));
        assert!(happy.words.contains(&"happy"));
    }
}
