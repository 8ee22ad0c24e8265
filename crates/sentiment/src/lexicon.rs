//! Built-in keyword-lexicon sentiment scorer.
//!
//! A deterministic, zero-infrastructure classifier used when no remote
//! inference endpoint is configured. Scoring is a simple hit count over
//! small polarity lexicons; confidence grows with the margin between
//! positive and negative hits and is capped below 1.

use solace_domain::convo::Sentiment;
use solace_domain::Result;

use crate::SentimentClassifier;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lexicons
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "anxious", "afraid", "scared", "terrible", "awful", "horrible", "depressed",
    "hopeless", "lonely", "alone", "worthless", "tired", "exhausted", "overwhelmed", "stressed",
    "worried", "hurt", "pain", "cry", "crying", "hate", "miserable", "upset", "lost", "empty",
    "guilty", "ashamed", "failure", "struggling", "bad", "worse", "worst",
];

const POSITIVE_WORDS: &[&str] = &[
    "happy", "glad", "great", "good", "wonderful", "amazing", "excited", "grateful", "thankful",
    "love", "loved", "hopeful", "proud", "calm", "relaxed", "peaceful", "better", "best", "joy",
    "joyful", "optimistic", "confident", "energized", "content", "fantastic", "relieved",
];

/// Confidence baseline for a non-zero polarity margin.
const MARGIN_BASE: f32 = 0.55;
/// Confidence gained per unit of margin.
const MARGIN_STEP: f32 = 0.1;
/// Confidence ceiling; a lexicon is never fully certain.
const MAX_SCORE: f32 = 0.95;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Classifier
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Deterministic keyword-lexicon classifier.
#[derive(Debug, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Pure scoring function; exposed for direct testing.
    pub fn score(text: &str) -> Sentiment {
        let mut positive = 0i32;
        let mut negative = 0i32;

        for token in tokenize(text) {
            if POSITIVE_WORDS.contains(&token) {
                positive += 1;
            }
            if NEGATIVE_WORDS.contains(&token) {
                negative += 1;
            }
        }

        let margin = positive - negative;
        match margin {
            m if m > 0 => Sentiment::new("positive", margin_score(m)),
            m if m < 0 => Sentiment::new("negative", margin_score(-m)),
            // Mixed signals are low-confidence neutral; no signal at all
            // is ordinary neutral.
            _ if positive > 0 => Sentiment::new("neutral", 0.5),
            _ => Sentiment::new("neutral", 0.6),
        }
    }
}

fn margin_score(margin: i32) -> f32 {
    (MARGIN_BASE + MARGIN_STEP * margin as f32).min(MAX_SCORE)
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.trim_matches('\''))
}

#[async_trait::async_trait]
impl SentimentClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        // Case-insensitive match against the lexicons.
        let lowered = text.to_lowercase();
        Ok(Self::score(&lowered))
    }

    fn kind(&self) -> &'static str {
        "lexicon"
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
