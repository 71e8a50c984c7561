//! Lyrics sentiment based mood scoring.
//!
//! Runs only when the caller supplies lyrics text (already cleaned of HTML
//! and section markers). Each track's lyrics pass through a language gate,
//! lexical sentiment, keyword/negation analysis and structural cues; the
//! batch result is averaged over the tracks that actually had lyrics.
//!
//! If the sentiment backend fails to initialize the scorer degrades to
//! returning empty vectors; callers treat that as "no lyrics signal".

use std::collections::{HashMap, HashSet};

use aho_corasick::AhoCorasick;
use tracing::{debug, warn};

use super::labels::MoodLabel;
use super::lexicon::{
    self, CROSS_LINGUAL_KEYWORDS, ENGLISH_FUNCTION_WORDS, LYRICS_KEYWORDS, SPANISH_FUNCTION_WORDS,
};
use super::sentiment::SentimentAnalyzer;
use super::vector::MoodVector;
use super::EngineError;

/// Compound polarity above which positive mood scores apply.
const POSITIVE_COMPOUND: f64 = 0.1;
/// Compound polarity above which the energetic bonus applies.
const STRONG_POSITIVE_COMPOUND: f64 = 0.5;
/// Compound polarity below which negative mood scores apply.
const NEGATIVE_COMPOUND: f64 = -0.1;
/// Compound polarity below which the angry bonus applies.
const STRONG_NEGATIVE_COMPOUND: f64 = -0.5;
/// Neutral fraction above which near-zero polarity reads as calm.
const NEUTRAL_FLOOR: f64 = 0.5;

/// Base score for a lyrics keyword hit.
const KEYWORD_BASE_SCORE: f64 = 1.0;
/// Multiplier for a keyword preceded by an intensifier.
const INTENSIFIER_MULTIPLIER: f64 = 1.5;
/// Scale applied when a negated keyword redirects to its opposite mood.
const NEGATION_REDIRECT_SCALE: f64 = 0.5;
/// How many preceding tokens are searched for a negation.
const NEGATION_WINDOW: usize = 3;

/// Score per distinct cross-lingual keyword hit.
const CROSS_LINGUAL_SCORE: f64 = 0.5;

/// More repeats than this reads as chorus-driven structure.
const REPEATED_LINE_THRESHOLD: usize = 2;
/// More exclamation marks than this reads as high energy.
const EXCLAMATION_THRESHOLD: usize = 2;

/// Transient label emitted by the question-heavy structure cue.
const CONTEMPLATIVE: &str = "contemplative";

/// Lyrics scorer; construction failure leaves it in a degraded state where
/// every call yields an empty vector.
pub struct LyricsSentimentScorer {
    backend: Option<LyricsBackend>,
}

impl LyricsSentimentScorer {
    pub fn new() -> Self {
        match LyricsBackend::build() {
            Ok(backend) => Self {
                backend: Some(backend),
            },
            Err(e) => {
                warn!(error = %e, "sentiment backend unavailable, lyrics analysis disabled");
                Self { backend: None }
            }
        }
    }

    /// Whether the sentiment backend initialized.
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Analyze one lyrics text.
    pub fn score_single(&self, text: &str) -> MoodVector {
        match &self.backend {
            Some(backend) => backend.analyze(text),
            None => MoodVector::new(),
        }
    }

    /// Average mood vector over every track with non-empty lyrics.
    ///
    /// The divisor is the number of tracks that actually had lyrics, not the
    /// playlist size; empty entries are skipped entirely.
    pub fn score_lyrics_batch(&self, lyrics_by_track: &HashMap<String, String>) -> MoodVector {
        let Some(backend) = &self.backend else {
            return MoodVector::new();
        };

        // Deterministic accumulation order
        let mut ids: Vec<&String> = lyrics_by_track.keys().collect();
        ids.sort();

        let mut accumulated = MoodVector::new();
        let mut counted = 0usize;
        for id in ids {
            let text = &lyrics_by_track[id];
            if text.trim().is_empty() {
                continue;
            }
            accumulated.merge_scaled(&backend.analyze(text), 1.0);
            counted += 1;
        }

        if counted > 0 {
            accumulated.scale(1.0 / counted as f64);
        }
        accumulated
    }
}

impl Default for LyricsSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

struct LyricsBackend {
    sentiment: SentimentAnalyzer,
    /// Token -> moods credited for that word
    keyword_moods: HashMap<&'static str, Vec<MoodLabel>>,
    cross_lingual: AhoCorasick,
    /// Pattern index -> mood for the cross-lingual matcher
    cross_lingual_moods: Vec<MoodLabel>,
}

impl LyricsBackend {
    fn build() -> Result<Self, EngineError> {
        let sentiment = SentimentAnalyzer::new()?;

        let mut keyword_moods: HashMap<&'static str, Vec<MoodLabel>> = HashMap::new();
        for entry in LYRICS_KEYWORDS {
            for word in entry.words {
                keyword_moods.entry(word).or_default().push(entry.mood);
            }
        }

        let mut patterns = Vec::new();
        let mut cross_lingual_moods = Vec::new();
        for entry in CROSS_LINGUAL_KEYWORDS {
            for word in entry.words {
                patterns.push(*word);
                cross_lingual_moods.push(entry.mood);
            }
        }
        let cross_lingual = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| EngineError::KeywordMatcher(e.to_string()))?;

        Ok(Self {
            sentiment,
            keyword_moods,
            cross_lingual,
            cross_lingual_moods,
        })
    }

    fn analyze(&self, text: &str) -> MoodVector {
        let mut scores = MoodVector::new();
        if text.trim().is_empty() {
            return scores;
        }

        let tokens = lexicon::tokenize(text);
        if let Some(DetectedLanguage::Other) = detect_language(&tokens) {
            debug!("non-English lyrics detected, using reduced analysis");
            self.cross_lingual_pass(text, &mut scores);
            return scores;
        }

        self.sentiment_pass(&tokens, &mut scores);
        self.keyword_pass(&tokens, &mut scores);
        structure_pass(text, &mut scores);
        scores
    }

    /// Map lexical polarity onto mood scores.
    fn sentiment_pass(&self, tokens: &[String], scores: &mut MoodVector) {
        let polarity = self.sentiment.polarity_scores(tokens);

        if polarity.compound > POSITIVE_COMPOUND {
            scores.add(MoodLabel::Happy, polarity.positive * 0.8);
            scores.add(MoodLabel::Upbeat, polarity.positive * 0.6);
            if polarity.compound > STRONG_POSITIVE_COMPOUND {
                scores.add(MoodLabel::Energetic, polarity.positive * 0.4);
            }
        }

        if polarity.compound < NEGATIVE_COMPOUND {
            scores.add(MoodLabel::Sad, polarity.negative * 0.8);
            scores.add(MoodLabel::Melancholic, polarity.negative * 0.6);
            if polarity.compound < STRONG_NEGATIVE_COMPOUND {
                scores.add(MoodLabel::Angry, polarity.negative * 0.4);
            }
        }

        if (NEGATIVE_COMPOUND..=POSITIVE_COMPOUND).contains(&polarity.compound)
            && polarity.neutral > NEUTRAL_FLOOR
        {
            scores.add(MoodLabel::Calm, polarity.neutral * 0.6);
        }
    }

    /// Keyword hits with intensifier and negation context.
    ///
    /// Negated happy/sad and energetic/calm hits redirect to their opposite
    /// at half magnitude; negated hits on any other mood are dropped.
    fn keyword_pass(&self, tokens: &[String], scores: &mut MoodVector) {
        let words: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !lexicon::is_stopword(t))
            .collect();

        for (i, word) in words.iter().enumerate() {
            let Some(moods) = self.keyword_moods.get(word) else {
                continue;
            };

            for mood in moods {
                let mut score = KEYWORD_BASE_SCORE;
                if i > 0 && lexicon::is_intensifier(words[i - 1]) {
                    score *= INTENSIFIER_MULTIPLIER;
                }

                let window_start = i.saturating_sub(NEGATION_WINDOW);
                let negated = words[window_start..i].iter().any(|t| lexicon::is_negation(t));
                if negated {
                    let redirected = score * NEGATION_REDIRECT_SCALE;
                    match mood {
                        MoodLabel::Happy => scores.add(MoodLabel::Sad, redirected),
                        MoodLabel::Sad => scores.add(MoodLabel::Happy, redirected),
                        MoodLabel::Energetic => scores.add(MoodLabel::Calm, redirected),
                        MoodLabel::Calm => scores.add(MoodLabel::Energetic, redirected),
                        _ => {}
                    }
                } else {
                    scores.add(*mood, score);
                }
            }
        }
    }

    /// Reduced-vocabulary pass for confidently non-English lyrics.
    fn cross_lingual_pass(&self, text: &str, scores: &mut MoodVector) {
        let lower = text.to_lowercase();
        let mut seen = vec![false; self.cross_lingual_moods.len()];
        for hit in self.cross_lingual.find_overlapping_iter(&lower) {
            seen[hit.pattern().as_usize()] = true;
        }
        for (pattern, hit) in seen.into_iter().enumerate() {
            if hit {
                scores.add(self.cross_lingual_moods[pattern], CROSS_LINGUAL_SCORE);
            }
        }
    }
}

/// Structural cues: chorus-like repetition and punctuation patterns.
fn structure_pass(text: &str, scores: &mut MoodVector) {
    let mut unique_lines = HashSet::new();
    let mut repeated_lines = 0usize;
    for line in text.lines() {
        let clean = line.trim().to_lowercase();
        if !clean.is_empty() && unique_lines.contains(&clean) {
            repeated_lines += 1;
        }
        unique_lines.insert(clean);
    }
    if repeated_lines > REPEATED_LINE_THRESHOLD {
        scores.add(MoodLabel::Upbeat, 0.3);
        scores.add(MoodLabel::Energetic, 0.2);
    }

    let exclamations = text.matches('!').count();
    let questions = text.matches('?').count();
    if exclamations > EXCLAMATION_THRESHOLD {
        scores.add(MoodLabel::Energetic, 0.2);
        scores.add(MoodLabel::Happy, 0.1);
    }
    if questions > exclamations {
        scores.add(MoodLabel::Melancholic, 0.1);
        scores.add_named(CONTEMPLATIVE, 0.2);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetectedLanguage {
    English,
    Other,
}

/// Function-word frequency heuristic. `None` means detection failed; the
/// caller then assumes English and runs the full pipeline.
fn detect_language(tokens: &[String]) -> Option<DetectedLanguage> {
    if tokens.len() < 5 {
        return None;
    }
    let english = tokens
        .iter()
        .filter(|t| ENGLISH_FUNCTION_WORDS.contains(&t.as_str()))
        .count();
    let spanish = tokens
        .iter()
        .filter(|t| SPANISH_FUNCTION_WORDS.contains(&t.as_str()))
        .count();

    if english == 0 && spanish == 0 {
        return None;
    }
    if spanish > english && spanish >= 3 {
        Some(DetectedLanguage::Other)
    } else {
        Some(DetectedLanguage::English)
    }
}
