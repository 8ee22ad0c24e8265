mod llm;
mod observability;
mod sentiment;
mod server;

pub use llm::*;
pub use observability::*;
pub use sentiment::*;
pub use server::*;

use std::fmt;

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ── Validation ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single finding from [`Config::validate`].
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: ConfigSeverity,
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "error",
            ConfigSeverity::Warning => "warning",
        };
        write!(f, "{tag}: {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Check value ranges beyond what serde can express.
    ///
    /// Errors make the config unusable; warnings are suspicious but
    /// survivable.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let mut error = |field, message: String| {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Error,
                field,
                message,
            });
        };

        if self.server.port == 0 {
            error("server.port", "must be non-zero".into());
        }
        if self.llm.max_attempts == 0 {
            error("llm.max_attempts", "must be at least 1".into());
        }
        if self.llm.timeout_secs == 0 {
            error("llm.timeout_secs", "must be non-zero".into());
        }
        if self.llm.api_key_env.is_empty() {
            error("llm.api_key_env", "must name an environment variable".into());
        }

        let mut warn = |field, message: String| {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Warning,
                field,
                message,
            });
        };

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            warn(
                "llm.temperature",
                format!("{} is outside the usual 0.0..=2.0 range", self.llm.temperature),
            );
        }
        if !(0.0..=1.0).contains(&self.observability.sample_rate) {
            warn(
                "observability.sample_rate",
                format!("{} is outside 0.0..=1.0", self.observability.sample_rate),
            );
        }

        issues
    }
}
