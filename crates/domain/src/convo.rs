//! Conversation data model: utterances, sentiment labels, and the
//! annotated history that pairs them.
//!
//! Everything here is request-scoped and immutable once constructed.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Utterance
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One user-authored message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Utterance(pub String);

impl Utterance {
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Utterance {
    fn from(s: &str) -> Self {
        Utterance(s.to_string())
    }
}

impl From<String> for Utterance {
    fn from(s: String) -> Self {
        Utterance(s)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Sentiment
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A sentiment classification for a single utterance.
///
/// `label` is the raw code emitted by the classifier capability.
/// Models trained on the tweet-sentiment task emit `LABEL_0` (negative),
/// `LABEL_1` (neutral), and `LABEL_2` (positive); other classifiers may
/// emit the human words directly. [`Sentiment::human_label`] normalizes
/// both forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Raw classifier label code.
    pub label: String,
    /// Confidence in `[0.0, 1.0]`.
    pub score: f32,
}

impl Sentiment {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Map the raw label code to a human-readable sentiment word.
    ///
    /// Unrecognized codes pass through verbatim rather than failing —
    /// a misnamed label renders oddly in the prompt but never breaks a
    /// request.
    pub fn human_label(&self) -> &str {
        match self.label.as_str() {
            "LABEL_0" | "negative" => "negative",
            "LABEL_1" | "neutral" => "neutral",
            "LABEL_2" | "positive" => "positive",
            other => {
                tracing::debug!(label = %other, "unmapped sentiment label code");
                other
            }
        }
    }

    pub fn is_negative(&self) -> bool {
        self.human_label() == "negative"
    }

    pub fn is_neutral(&self) -> bool {
        self.human_label() == "neutral"
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// AnnotatedHistory
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A conversation history paired 1:1 with sentiment labels.
///
/// Construction enforces the parallel-length invariant, so any
/// `AnnotatedHistory` handed to the prompt builder is well-formed by
/// type.
#[derive(Debug, Clone)]
pub struct AnnotatedHistory {
    utterances: Vec<Utterance>,
    sentiments: Vec<Sentiment>,
}

impl AnnotatedHistory {
    /// Pair a history with its sentiment sequence.
    ///
    /// # Errors
    ///
    /// Returns `Error::Other` if the lengths differ.
    pub fn new(utterances: Vec<Utterance>, sentiments: Vec<Sentiment>) -> Result<Self> {
        if utterances.len() != sentiments.len() {
            return Err(Error::Other(format!(
                "annotated history length mismatch: {} utterances, {} sentiments",
                utterances.len(),
                sentiments.len()
            )));
        }
        Ok(Self {
            utterances,
            sentiments,
        })
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// Ordered `(utterance, sentiment)` pairs, conversational order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Utterance, &Sentiment)> {
        self.utterances.iter().zip(self.sentiments.iter())
    }

    /// The most recent utterance's sentiment, if any.
    pub fn last_sentiment(&self) -> Option<&Sentiment> {
        self.sentiments.last()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
