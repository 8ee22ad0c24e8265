//! Order-preserving sentiment annotation of a conversation history.

use solace_domain::convo::{Sentiment, Utterance};
use solace_domain::Result;

use crate::SentimentClassifier;

/// Annotate every utterance with its top sentiment label.
///
/// One independent classifier call per utterance, in conversational
/// order; the output is always the same length as the input. A
/// classifier failure propagates — there is no per-utterance fallback
/// at this layer.
pub async fn annotate(
    classifier: &dyn SentimentClassifier,
    history: &[Utterance],
) -> Result<Vec<Sentiment>> {
    let mut sentiments = Vec::with_capacity(history.len());
    for utterance in history {
        let sentiment = classifier.classify(utterance.text()).await?;
        sentiments.push(sentiment);
    }
    Ok(sentiments)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use solace_domain::Error;

    /// Labels each text by its first character; lets tests assert order.
    struct EchoClassifier;

    #[async_trait::async_trait]
    impl SentimentClassifier for EchoClassifier {
        async fn classify(&self, text: &str) -> Result<Sentiment> {
            Ok(Sentiment::new(
                text.chars().next().unwrap_or('?').to_string(),
                0.5,
            ))
        }

        fn kind(&self) -> &'static str {
            "echo"
        }
    }

    struct FailingClassifier;

    #[async_trait::async_trait]
    impl SentimentClassifier for FailingClassifier {
        async fn classify(&self, _text: &str) -> Result<Sentiment> {
            Err(Error::Classifier("unavailable".into()))
        }

        fn kind(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn output_length_matches_input() {
        let history: Vec<Utterance> = vec!["one".into(), "two".into(), "three".into()];
        let sentiments = annotate(&EchoClassifier, &history).await.unwrap();
        assert_eq!(sentiments.len(), history.len());
    }

    #[tokio::test]
    async fn order_matches_utterance_order() {
        let history: Vec<Utterance> = vec!["alpha".into(), "bravo".into(), "charlie".into()];
        let sentiments = annotate(&EchoClassifier, &history).await.unwrap();
        let labels: Vec<&str> = sentiments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn empty_history_yields_empty_annotation() {
        let sentiments = annotate(&EchoClassifier, &[]).await.unwrap();
        assert!(sentiments.is_empty());
    }

    #[tokio::test]
    async fn classifier_failure_propagates() {
        let history: Vec<Utterance> = vec!["hello".into()];
        let result = annotate(&FailingClassifier, &history).await;
        assert!(matches!(result, Err(Error::Classifier(_))));
    }
}
