//! Startup wiring: build the classifier capability and the LLM client
//! once, before the server accepts traffic.

use std::sync::Arc;

use anyhow::Context;
use solace_domain::config::{ClassifierKind, Config};
use solace_llm::{GeminiClient, LlmClient};
use solace_sentiment::{LexiconClassifier, RemoteClassifier, SentimentClassifier};

use crate::state::AppState;

/// Build the shared application state.
///
/// An unavailable classifier is the one condition that aborts process
/// initialization: a remote classifier is probed here and a failed
/// probe bubbles up as a startup error.
pub async fn build_app_state(config: Arc<Config>) -> anyhow::Result<AppState> {
    let classifier: Arc<dyn SentimentClassifier> = match config.sentiment.kind {
        ClassifierKind::Lexicon => Arc::new(LexiconClassifier::new()),
        ClassifierKind::Remote => {
            let remote = RemoteClassifier::from_config(&config.sentiment)
                .context("building remote sentiment classifier")?;
            remote
                .probe()
                .await
                .context("sentiment classifier probe failed — refusing to start")?;
            Arc::new(remote)
        }
    };
    tracing::info!(kind = classifier.kind(), "sentiment classifier ready");

    let llm: Arc<dyn LlmClient> = Arc::new(
        GeminiClient::from_config(&config.llm).context("building Gemini client")?,
    );
    tracing::info!(model = %config.llm.model, "LLM client ready");

    Ok(AppState {
        config,
        classifier,
        llm,
    })
}
