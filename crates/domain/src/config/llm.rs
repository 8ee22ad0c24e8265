use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LLM backend
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Configuration for the Gemini `generateContent` backend.
///
/// Auth is an API key passed as a query parameter, resolved once at
/// startup from the env var named by `api_key_env`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "d_base_url")]
    pub base_url: String,
    #[serde(default = "d_model")]
    pub model: String,
    /// Env var containing the API key.
    #[serde(default = "d_api_key_env")]
    pub api_key_env: String,
    /// Per-attempt request timeout.
    #[serde(default = "d_10")]
    pub timeout_secs: u64,
    /// Total attempts against an overloaded backend (first try included).
    #[serde(default = "d_3")]
    pub max_attempts: u32,
    /// Sampling temperature. Low, favoring consistency over creativity.
    #[serde(default = "d_temperature")]
    pub temperature: f32,
    /// Hard cap on generated tokens per reply.
    #[serde(default = "d_150")]
    pub max_output_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: d_base_url(),
            model: d_model(),
            api_key_env: d_api_key_env(),
            timeout_secs: 10,
            max_attempts: 3,
            temperature: d_temperature(),
            max_output_tokens: 150,
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn d_model() -> String {
    "gemini-1.5-flash".into()
}
fn d_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}
fn d_10() -> u64 {
    10
}
fn d_3() -> u32 {
    3
}
fn d_temperature() -> f32 {
    0.4
}
fn d_150() -> u32 {
    150
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_all_defaults() {
        let cfg: LlmConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(cfg.model, "gemini-1.5-flash");
        assert_eq!(cfg.api_key_env, "GEMINI_API_KEY");
        assert_eq!(cfg.timeout_secs, 10);
        assert_eq!(cfg.max_attempts, 3);
        assert!((cfg.temperature - 0.4).abs() < f32::EPSILON);
        assert_eq!(cfg.max_output_tokens, 150);
    }

    #[test]
    fn parses_overrides() {
        let toml_str = r#"
            model = "gemini-2.0-flash"
            timeout_secs = 30
            max_attempts = 5
        "#;
        let cfg: LlmConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.model, "gemini-2.0-flash");
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_attempts, 5);
        // Untouched fields keep defaults.
        assert_eq!(cfg.max_output_tokens, 150);
    }
}
