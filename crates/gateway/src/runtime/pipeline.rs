//! The per-request response pipeline.
//!
//! Runs sequentially within one request context: annotate the history,
//! build the prompt, query the LLM; on success strip the reply cue, on
//! any typed failure fall back to the sentiment-based canned reply.

use serde::Serialize;
use solace_domain::convo::{AnnotatedHistory, Sentiment, Utterance};
use solace_domain::Result;
use solace_llm::LlmClient;
use solace_prompt::{build_prompt, strip_reply_prefix};
use solace_sentiment::{annotate, SentimentClassifier};

use crate::runtime::fallback::fallback_reply;

/// The pipeline's outcome: always a usable reply, plus an informational
/// error description when it came from the fallback path.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReply {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the full pipeline for one conversation history.
///
/// # Errors
///
/// Only a classifier failure propagates (there is no useful reply
/// without sentiment). LLM failures never surface as errors — they are
/// recovered locally via the fallback responder.
pub async fn respond(
    classifier: &dyn SentimentClassifier,
    llm: &dyn LlmClient,
    history: &[Utterance],
) -> Result<PipelineReply> {
    let request_id = uuid::Uuid::new_v4();

    let sentiments = annotate(classifier, history).await?;
    let annotated = AnnotatedHistory::new(history.to_vec(), sentiments)?;

    let prompt = build_prompt(&annotated);
    tracing::debug!(
        %request_id,
        turns = annotated.len(),
        prompt_chars = prompt.len(),
        "querying llm"
    );

    match llm.query(&prompt).await {
        Ok(text) => {
            let response = strip_reply_prefix(&text).to_string();
            tracing::info!(%request_id, chars = response.len(), "llm reply");
            Ok(PipelineReply {
                response,
                error: None,
            })
        }
        Err(failure) => {
            let sentiment = last_or_empty_sentiment(classifier, &annotated).await;
            let response = fallback_reply(&sentiment).to_string();
            tracing::warn!(
                %request_id,
                error = %failure,
                label = %sentiment.label,
                score = sentiment.score,
                "llm failed, using sentiment fallback"
            );
            Ok(PipelineReply {
                response,
                error: Some(failure.to_string()),
            })
        }
    }
}

/// The last annotated sentiment; an empty history (unreachable via the
/// HTTP layer, which validates non-emptiness) classifies the empty
/// string instead.
async fn last_or_empty_sentiment(
    classifier: &dyn SentimentClassifier,
    annotated: &AnnotatedHistory,
) -> Sentiment {
    match annotated.last_sentiment() {
        Some(s) => s.clone(),
        None => classifier
            .classify("")
            .await
            .unwrap_or_else(|_| Sentiment::new("neutral", 0.0)),
    }
}
