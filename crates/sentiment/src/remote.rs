//! Remote HTTP inference-endpoint classifier.
//!
//! Speaks the HuggingFace-inference wire shape: POST
//! `{endpoint}/models/{model}` with `{"inputs": text}`, response is a
//! ranked list of `{label, score}` candidates per input. Only the top
//! label is kept; alternatives are ignored.

use std::time::Duration;

use serde_json::Value;
use solace_domain::config::SentimentConfig;
use solace_domain::convo::Sentiment;
use solace_domain::{Error, Result};

use crate::SentimentClassifier;

/// An HTTP-backed sentiment classifier.
pub struct RemoteClassifier {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl RemoteClassifier {
    /// Build a classifier from config. The API key env var (if any) is
    /// resolved eagerly so a missing key fails at startup, not on the
    /// first request.
    pub fn from_config(cfg: &SentimentConfig) -> Result<Self> {
        let api_key = match &cfg.api_key_env {
            Some(env_name) => match std::env::var(env_name) {
                Ok(val) if !val.is_empty() => Some(val),
                _ => {
                    return Err(Error::Config(format!(
                        "environment variable '{env_name}' not set or empty \
                         (from sentiment.api_key_env)"
                    )));
                }
            },
            None => None,
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            api_key,
            client,
        })
    }

    fn classify_url(&self) -> String {
        format!("{}/models/{}", self.endpoint, self.model)
    }

    /// Probe the endpoint once. Used at bootstrap: an unreachable
    /// classifier aborts process initialization.
    pub async fn probe(&self) -> Result<()> {
        self.classify_text("hello").await.map(|_| ())
    }

    async fn classify_text(&self, text: &str) -> Result<Sentiment> {
        let body = serde_json::json!({ "inputs": text });

        let mut req = self.client.post(self.classify_url()).json(&body);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| Error::Classifier(format!("inference request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(Error::Classifier(format!(
                "inference HTTP {status}: {body_text}"
            )));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| Error::Classifier(format!("failed to parse inference response: {e}")))?;

        top_candidate(&json).ok_or_else(|| {
            Error::Classifier("inference response missing ranked candidates".into())
        })
    }
}

/// Extract the top-scoring `{label, score}` candidate.
///
/// Accepts both `[[{..}, ..]]` (batched) and `[{..}, ..]` (flat) shapes;
/// inference servers differ on nesting.
fn top_candidate(json: &Value) -> Option<Sentiment> {
    let candidates = match json.as_array()?.first()? {
        Value::Array(inner) => inner.as_slice(),
        _ => json.as_array()?.as_slice(),
    };

    let mut best: Option<Sentiment> = None;
    for cand in candidates {
        let label = cand.get("label")?.as_str()?;
        let score = cand.get("score")?.as_f64()? as f32;
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Sentiment::new(label, score));
        }
    }
    best
}

#[async_trait::async_trait]
impl SentimentClassifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        let sentiment = self.classify_text(text).await?;
        tracing::debug!(
            label = %sentiment.label,
            score = sentiment.score,
            "remote classification"
        );
        Ok(sentiment)
    }

    fn kind(&self) -> &'static str {
        "remote"
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
