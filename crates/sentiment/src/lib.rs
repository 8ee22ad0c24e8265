//! Sentiment classification capability and the history annotator.
//!
//! The classifier is an opaque capability behind [`SentimentClassifier`]:
//! given text, it returns a label code and a confidence score. It is
//! built once at startup and shared read-only across requests.

pub mod annotator;
pub mod lexicon;
pub mod remote;

use solace_domain::convo::Sentiment;
use solace_domain::Result;

pub use annotator::annotate;
pub use lexicon::LexiconClassifier;
pub use remote::RemoteClassifier;

/// The sentiment classifier capability.
///
/// Implementations must be cheap to call concurrently; the gateway
/// shares one instance across all in-flight requests.
#[async_trait::async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify a single text, returning the top label and its score.
    async fn classify(&self, text: &str) -> Result<Sentiment>;

    /// Short identifier for readiness reporting ("lexicon", "remote").
    fn kind(&self) -> &'static str;
}
