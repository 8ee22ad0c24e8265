//! LLM invocation: the Gemini `generateContent` adapter with bounded
//! retry/backoff and a typed failure taxonomy.
//!
//! The client's entire outward contract is `Result<String, LlmFailure>`;
//! nothing here panics or leaks a transport error past the boundary.

pub mod failure;
pub mod gemini;
pub mod retry;

pub use failure::{LlmFailure, LlmReply};
pub use gemini::GeminiClient;
pub use retry::{Sleeper, TokioSleeper};

/// Trait for the generation backend, so the pipeline can be exercised
/// with a mock in tests.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a prompt and resolve to generated text or a typed failure.
    async fn query(&self, prompt: &str) -> LlmReply;
}
