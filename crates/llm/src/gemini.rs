//! Google Gemini adapter.
//!
//! Implements the `generateContent` API. Auth is via an API key passed
//! as a query parameter (`key={api_key}`), resolved once at startup.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use solace_domain::config::LlmConfig;
use solace_domain::{Error, Result};

use crate::failure::{LlmFailure, LlmReply};
use crate::retry::{backoff_delay, Sleeper, TokioSleeper};
use crate::LlmClient;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Adapter struct
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A client for the Gemini `generateContent` endpoint.
///
/// Created once at bootstrap and shared across requests; the underlying
/// `reqwest::Client` maintains a connection pool.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    temperature: f32,
    max_output_tokens: u32,
    max_attempts: u32,
    client: reqwest::Client,
    sleeper: Arc<dyn Sleeper>,
}

impl GeminiClient {
    /// Create a client from config, resolving the API key env var.
    pub fn from_config(cfg: &LlmConfig) -> Result<Self> {
        let api_key = match std::env::var(&cfg.api_key_env) {
            Ok(val) if !val.is_empty() => val,
            _ => {
                return Err(Error::Config(format!(
                    "environment variable '{}' not set or empty (from llm.api_key_env)",
                    cfg.api_key_env
                )));
            }
        };
        Self::new(cfg, api_key, Arc::new(TokioSleeper))
    }

    /// Create a client with an explicit key and sleeper (tests inject a
    /// recording sleeper here).
    pub fn new(cfg: &LlmConfig, api_key: String, sleeper: Arc<dyn Sleeper>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            api_key,
            temperature: cfg.temperature,
            max_output_tokens: cfg.max_output_tokens,
            max_attempts: cfg.max_attempts.max(1),
            client,
            sleeper,
        })
    }

    // ── Internal helpers ───────────────────────────────────────────

    fn generate_url(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_body(&self, prompt: &str) -> Value {
        serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens,
            },
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Response deserialization
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Extract `candidates[0].content.parts[0].text` from a success body.
fn extract_text(body: &Value) -> Option<String> {
    body.get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

/// Redact API key from URL for safe logging.
fn redact_url_key(url: &str) -> String {
    if let Some(idx) = url.find("key=") {
        let prefix = &url[..idx + 4];
        let rest = &url[idx + 4..];
        let end = rest.find('&').unwrap_or(rest.len());
        format!("{prefix}[REDACTED]{}", &rest[end..])
    } else {
        url.to_string()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    /// Bounded attempt loop: only HTTP 503 retries, with doubling
    /// backoff between attempts. A transport failure aborts the whole
    /// query; any other non-success status is terminal.
    async fn query(&self, prompt: &str) -> LlmReply {
        let url = self.generate_url();
        let body = self.build_body(prompt);

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                self.sleeper.sleep(backoff_delay(attempt - 1)).await;
            }

            tracing::debug!(
                attempt = attempt + 1,
                max_attempts = self.max_attempts,
                url = %redact_url_key(&url),
                "gemini request"
            );

            let resp = match self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(error = %e, "gemini transport failure");
                    return Err(LlmFailure::Transport(e.to_string()));
                }
            };

            let status = resp.status();

            if status == StatusCode::SERVICE_UNAVAILABLE {
                let resp_text = resp.text().await.unwrap_or_default();
                tracing::warn!(
                    attempt = attempt + 1,
                    max_attempts = self.max_attempts,
                    body = %resp_text,
                    "gemini overloaded (503), will retry if attempts remain"
                );
                continue;
            }

            if !status.is_success() {
                let resp_text = resp.text().await.unwrap_or_default();
                tracing::warn!(status = status.as_u16(), body = %resp_text, "gemini error status");
                return Err(LlmFailure::Upstream {
                    status: status.as_u16(),
                });
            }

            let resp_text = match resp.text().await {
                Ok(t) => t,
                Err(e) => return Err(LlmFailure::Transport(e.to_string())),
            };
            let resp_json: Value = match serde_json::from_str(&resp_text) {
                Ok(v) => v,
                Err(e) => return Err(LlmFailure::Parse(format!("invalid JSON body: {e}"))),
            };

            return match extract_text(&resp_json) {
                Some(text) => Ok(text),
                None => Err(LlmFailure::Parse(
                    "missing candidates[0].content.parts[0].text".into(),
                )),
            };
        }

        Err(LlmFailure::Overloaded {
            attempts: self.max_attempts,
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GeminiClient {
        let cfg = LlmConfig::default();
        GeminiClient::new(&cfg, "test-key".into(), Arc::new(TokioSleeper)).unwrap()
    }

    #[test]
    fn generate_url_has_model_and_key_param() {
        let url = test_client().generate_url();
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1/models/gemini-1.5-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn body_carries_prompt_and_generation_config() {
        let body = test_client().build_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 150);
        let temp = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.4).abs() < 1e-6);
    }

    #[test]
    fn extract_text_reads_nested_path() {
        let body: Value = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "generated reply"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&body).as_deref(), Some("generated reply"));
    }

    #[test]
    fn extract_text_rejects_missing_candidates() {
        let body: Value = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        assert!(extract_text(&body).is_none());
    }

    #[test]
    fn extract_text_rejects_empty_parts() {
        let body: Value =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert!(extract_text(&body).is_none());
    }

    #[test]
    fn redact_hides_key_value() {
        let url = "https://example.com/v1/models/m:generateContent?key=secret123";
        assert_eq!(
            redact_url_key(url),
            "https://example.com/v1/models/m:generateContent?key=[REDACTED]"
        );
    }

    #[test]
    fn from_config_fails_without_key_env() {
        let cfg = LlmConfig {
            api_key_env: "SOLACE_TEST_DEFINITELY_UNSET_GEMINI_KEY".into(),
            ..LlmConfig::default()
        };
        assert!(GeminiClient::from_config(&cfg).is_err());
    }
}
