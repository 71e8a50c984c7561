//! Lexicon-based polarity analysis for lyrics text.
//!
//! A small valence lexicon stands in for a full sentiment model: each scored
//! word carries a signed intensity, preceding intensifiers boost it and
//! nearby negations flip it, and the summed valence is squashed into a
//! compound polarity in [-1, 1] together with positive/negative/neutral
//! fractions over the token stream.

use std::collections::HashMap;

use thiserror::Error;

use super::lexicon::{is_intensifier, is_negation};

/// Squashing constant for the compound score: `sum / sqrt(sum^2 + ALPHA)`.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Valence increment applied by a preceding intensifier.
const BOOSTER_INCREMENT: f64 = 0.293;

/// Valence multiplier applied by a preceding negation.
const NEGATION_SCALAR: f64 = -0.74;

/// How many preceding tokens are searched for a negation.
const NEGATION_WINDOW: usize = 3;

/// Maximum magnitude a lexicon valence may carry.
const MAX_VALENCE: f64 = 4.0;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("invalid sentiment lexicon: {0}")]
    InvalidLexicon(String),
}

/// Polarity of one text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentScores {
    /// Overall polarity in [-1.0, 1.0].
    pub compound: f64,
    /// Fraction of sentiment mass that is positive.
    pub positive: f64,
    /// Fraction of sentiment mass that is negative.
    pub negative: f64,
    /// Fraction of tokens carrying no sentiment.
    pub neutral: f64,
}

/// Word-valence analyzer over the embedded lexicon.
pub struct SentimentAnalyzer {
    lexicon: HashMap<&'static str, f64>,
}

impl SentimentAnalyzer {
    /// Build the analyzer, validating the embedded lexicon.
    pub fn new() -> Result<Self, SentimentError> {
        let mut lexicon = HashMap::with_capacity(VALENCE_LEXICON.len());
        for (word, valence) in VALENCE_LEXICON {
            if !valence.is_finite() || valence.abs() > MAX_VALENCE {
                return Err(SentimentError::InvalidLexicon(format!(
                    "valence out of range for {word}: {valence}"
                )));
            }
            if lexicon.insert(*word, *valence).is_some() {
                return Err(SentimentError::InvalidLexicon(format!(
                    "duplicate entry: {word}"
                )));
            }
        }
        if lexicon.is_empty() {
            return Err(SentimentError::InvalidLexicon("empty lexicon".to_string()));
        }
        Ok(Self { lexicon })
    }

    /// Score a tokenized text (tokens as produced by `lexicon::tokenize`,
    /// before stopword removal so modifiers are still present).
    pub fn polarity_scores(&self, tokens: &[String]) -> SentimentScores {
        if tokens.is_empty() {
            return SentimentScores::default();
        }

        let mut valences = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.lexicon.get(token.as_str()) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            if i > 0 && is_intensifier(&tokens[i - 1]) {
                valence += BOOSTER_INCREMENT * valence.signum();
            }
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negation(t)) {
                valence *= NEGATION_SCALAR;
            }
            valences.push(valence);
        }

        let sum: f64 = valences.iter().sum();
        let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

        let mut positive_mass = 0.0;
        let mut negative_mass = 0.0;
        let mut neutral_count = 0usize;
        for &valence in &valences {
            if valence > 0.0 {
                positive_mass += valence + 1.0;
            } else if valence < 0.0 {
                negative_mass += valence.abs() + 1.0;
            } else {
                neutral_count += 1;
            }
        }

        let total = positive_mass + negative_mass + neutral_count as f64;
        if total <= 0.0 {
            return SentimentScores::default();
        }

        SentimentScores {
            compound,
            positive: positive_mass / total,
            negative: negative_mass / total,
            neutral: neutral_count as f64 / total,
        }
    }

    /// Number of scored words in the lexicon.
    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }
}

/// Embedded valence lexicon, word -> signed intensity in [-4.0, 4.0].
const VALENCE_LEXICON: &[(&str, f64)] = &[
    // Positive
    ("happy", 2.7),
    ("happiness", 2.7),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("adore", 2.9),
    ("smile", 2.1),
    ("smiling", 2.3),
    ("laugh", 2.6),
    ("laughing", 2.7),
    ("fun", 2.3),
    ("funny", 1.9),
    ("good", 1.9),
    ("great", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("beautiful", 2.9),
    ("wonderful", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("fantastic", 2.6),
    ("excellent", 2.7),
    ("perfect", 2.7),
    ("paradise", 2.9),
    ("sunshine", 2.2),
    ("bright", 1.9),
    ("shine", 1.6),
    ("shining", 1.8),
    ("alive", 1.6),
    ("free", 1.9),
    ("freedom", 2.3),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("celebrate", 2.7),
    ("celebration", 2.7),
    ("party", 1.7),
    ("dance", 1.4),
    ("dancing", 1.5),
    ("sweet", 2.0),
    ("kiss", 1.8),
    ("heaven", 2.3),
    ("bliss", 2.7),
    ("blessed", 2.9),
    ("delight", 2.9),
    ("glad", 2.0),
    ("cheerful", 2.5),
    ("excited", 2.3),
    ("exciting", 2.2),
    ("win", 2.8),
    ("winner", 2.8),
    ("strong", 2.3),
    ("peace", 2.5),
    ("peaceful", 2.4),
    ("calm", 1.3),
    ("gentle", 1.7),
    ("warm", 1.6),
    ("friend", 2.2),
    ("friends", 2.1),
    ("together", 1.3),
    ("forever", 1.1),
    ("shelter", 0.9),
    ("safe", 1.8),
    // Negative
    ("sad", -2.1),
    ("sadness", -2.3),
    ("cry", -2.0),
    ("crying", -2.2),
    ("tear", -1.4),
    ("tears", -1.6),
    ("lonely", -1.9),
    ("alone", -1.0),
    ("hurt", -2.0),
    ("hurts", -2.1),
    ("pain", -2.3),
    ("painful", -2.4),
    ("broken", -2.0),
    ("goodbye", -0.9),
    ("lost", -1.3),
    ("lose", -1.5),
    ("losing", -1.6),
    ("hate", -2.7),
    ("hated", -2.9),
    ("hating", -2.6),
    ("anger", -2.2),
    ("angry", -2.3),
    ("rage", -2.5),
    ("mad", -2.2),
    ("fear", -2.2),
    ("afraid", -2.0),
    ("scared", -1.9),
    ("dark", -0.9),
    ("darkness", -1.3),
    ("dead", -3.1),
    ("death", -2.9),
    ("die", -2.9),
    ("dying", -2.9),
    ("kill", -3.0),
    ("killing", -3.1),
    ("war", -2.9),
    ("fight", -1.6),
    ("fighting", -1.7),
    ("destroy", -2.6),
    ("destroyed", -2.8),
    ("evil", -3.1),
    ("devil", -2.6),
    ("hell", -2.6),
    ("wrong", -1.6),
    ("regret", -2.0),
    ("grief", -2.4),
    ("sorrow", -2.4),
    ("despair", -2.9),
    ("misery", -2.7),
    ("miserable", -2.6),
    ("depressed", -2.6),
    ("depression", -2.7),
    ("worthless", -2.7),
    ("empty", -1.2),
    ("cold", -0.8),
    ("bad", -2.5),
    ("worse", -2.7),
    ("worst", -3.1),
    ("terrible", -2.4),
    ("horrible", -2.6),
    ("awful", -2.5),
    ("ugly", -2.3),
    ("nightmare", -2.6),
    ("suffer", -2.3),
    ("suffering", -2.5),
    ("ache", -1.8),
    ("bleeding", -1.9),
    ("shame", -2.1),
    ("ashamed", -2.2),
    ("guilty", -1.9),
    ("trouble", -1.8),
    ("weep", -2.0),
    ("mourn", -2.3),
    ("heartbreak", -2.6),
    ("heartbroken", -2.8),
    ("devastated", -2.9),
    ("gloomy", -1.9),
    ("anguish", -2.9),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::lexicon::tokenize;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new().expect("lexicon should validate")
    }

    #[test]
    fn test_lexicon_validates() {
        let analyzer = analyzer();
        assert!(analyzer.lexicon_size() > 100);
    }

    #[test]
    fn test_positive_text() {
        let scores = analyzer().polarity_scores(&tokenize("love joy happy smile wonderful"));
        assert!(scores.compound > 0.5, "compound was {}", scores.compound);
        assert!(scores.positive > scores.negative);
    }

    #[test]
    fn test_negative_text() {
        let scores = analyzer().polarity_scores(&tokenize("pain sorrow broken lonely crying"));
        assert!(scores.compound < -0.5, "compound was {}", scores.compound);
        assert!(scores.negative > scores.positive);
    }

    #[test]
    fn test_neutral_text() {
        let scores = analyzer().polarity_scores(&tokenize("window table street morning walking"));
        assert_eq!(scores.compound, 0.0);
        assert!((scores.neutral - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let scores = analyzer().polarity_scores(&tokenize("love and pain on an empty street"));
        let total = scores.positive + scores.negative + scores.neutral;
        assert!((total - 1.0).abs() < 1e-9, "fractions summed to {total}");
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = analyzer();
        let plain = analyzer.polarity_scores(&tokenize("happy"));
        let negated = analyzer.polarity_scores(&tokenize("not happy"));
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn test_intensifier_boosts_magnitude() {
        let analyzer = analyzer();
        let plain = analyzer.polarity_scores(&tokenize("happy"));
        let boosted = analyzer.polarity_scores(&tokenize("very happy"));
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn test_empty_input() {
        let scores = analyzer().polarity_scores(&[]);
        assert_eq!(scores, SentimentScores::default());
    }
}
