use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Sentiment classifier capability
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    #[serde(default)]
    pub kind: ClassifierKind,
    /// Inference endpoint base URL (remote kind only).
    #[serde(default = "d_endpoint")]
    pub endpoint: String,
    /// Model identifier on the inference endpoint (remote kind only).
    #[serde(default = "d_model")]
    pub model: String,
    /// Env var containing the inference API key, if the endpoint
    /// requires one. `None` sends no Authorization header.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Timeout for individual classification requests.
    #[serde(default = "d_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            kind: ClassifierKind::Lexicon,
            endpoint: d_endpoint(),
            model: d_model(),
            api_key_env: None,
            timeout_ms: d_timeout_ms(),
        }
    }
}

/// Which classifier implementation to load at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    /// Built-in deterministic keyword-lexicon scorer. No external
    /// services; suitable for development and tests.
    #[default]
    Lexicon,
    /// Remote HTTP inference endpoint (HuggingFace-inference wire shape).
    Remote,
}

// ── serde default helpers ───────────────────────────────────────────

fn d_endpoint() -> String {
    "https://api-inference.huggingface.co".into()
}
fn d_model() -> String {
    "cardiffnlp/twitter-roberta-base-sentiment".into()
}
fn d_timeout_ms() -> u64 {
    2_000
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
