use std::sync::Arc;

use solace_domain::config::Config;
use solace_llm::LlmClient;
use solace_sentiment::SentimentClassifier;

/// Shared application state passed to all API handlers.
///
/// Everything here is built once at bootstrap and read-only afterwards;
/// requests share it concurrently without coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Sentiment classifier capability (process-wide, initialized once).
    pub classifier: Arc<dyn SentimentClassifier>,
    /// Generation backend.
    pub llm: Arc<dyn LlmClient>,
}
