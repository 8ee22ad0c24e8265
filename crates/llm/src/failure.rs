//! Typed failure taxonomy for the LLM client.
//!
//! Every variant is terminal from the caller's point of view: the
//! client has already applied its retry policy before returning one.

/// Why an LLM query could not produce text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmFailure {
    /// The backend kept signalling temporary unavailability (HTTP 503)
    /// through every allowed attempt.
    #[error("model overloaded after {attempts} attempts")]
    Overloaded { attempts: u32 },

    /// The backend returned a non-overload error status. Not retried.
    #[error("upstream error: HTTP {status}")]
    Upstream { status: u16 },

    /// The backend returned a success status with an unparseable body.
    /// Not retried.
    #[error("unexpected response shape: {0}")]
    Parse(String),

    /// The backend could not be reached (connect failure or timeout).
    /// Aborts the query immediately.
    #[error("transport: {0}")]
    Transport(String),
}

/// The LLM client's outward result type.
pub type LlmReply = std::result::Result<String, LlmFailure>;
