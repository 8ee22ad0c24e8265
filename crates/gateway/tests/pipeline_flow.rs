//! End-to-end pipeline tests with stubbed classifier and LLM.

use async_trait::async_trait;
use solace_domain::convo::{Sentiment, Utterance};
use solace_domain::Result;
use solace_gateway::runtime::pipeline;
use solace_llm::{LlmClient, LlmFailure, LlmReply};
use solace_sentiment::SentimentClassifier;

struct FixedClassifier {
    label: &'static str,
    score: f32,
}

#[async_trait]
impl SentimentClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> Result<Sentiment> {
        Ok(Sentiment::new(self.label, self.score))
    }

    fn kind(&self) -> &'static str {
        "fixed"
    }
}

struct CannedLlm {
    reply: LlmReply,
}

#[async_trait]
impl LlmClient for CannedLlm {
    async fn query(&self, _prompt: &str) -> LlmReply {
        self.reply.clone()
    }
}

fn history(turns: &[&str]) -> Vec<Utterance> {
    turns.iter().map(|t| Utterance::from(*t)).collect()
}

#[tokio::test]
async fn successful_llm_reply_has_cue_stripped_and_no_error() {
    let classifier = FixedClassifier {
        label: "LABEL_1",
        score: 0.7,
    };
    let llm = CannedLlm {
        reply: Ok("Therapist: How does that make you feel?".into()),
    };

    let reply = pipeline::respond(&classifier, &llm, &history(&["I went for a walk"]))
        .await
        .unwrap();

    assert_eq!(reply.response, " How does that make you feel?");
    assert!(reply.error.is_none());
}

#[tokio::test]
async fn reply_without_cue_passes_through_verbatim() {
    let classifier = FixedClassifier {
        label: "LABEL_1",
        score: 0.7,
    };
    let llm = CannedLlm {
        reply: Ok("Tell me more about that.".into()),
    };

    let reply = pipeline::respond(&classifier, &llm, &history(&["hello"]))
        .await
        .unwrap();

    assert_eq!(reply.response, "Tell me more about that.");
}

#[tokio::test]
async fn llm_failure_with_neutral_sentiment_uses_acknowledgement() {
    let classifier = FixedClassifier {
        label: "LABEL_1",
        score: 0.7,
    };
    let llm = CannedLlm {
        reply: Err(LlmFailure::Overloaded { attempts: 3 }),
    };

    let reply = pipeline::respond(&classifier, &llm, &history(&["the weather is fine"]))
        .await
        .unwrap();

    assert_eq!(reply.response, "Thank you for sharing. I'm here to listen.");
    let error = reply.error.unwrap();
    assert!(error.contains("overloaded"), "unexpected error text: {error}");
}

#[tokio::test]
async fn llm_failure_with_strong_negative_uses_strong_empathy() {
    let classifier = FixedClassifier {
        label: "LABEL_0",
        score: 0.9,
    };
    let llm = CannedLlm {
        reply: Err(LlmFailure::Upstream { status: 500 }),
    };

    let reply = pipeline::respond(&classifier, &llm, &history(&["everything is awful"]))
        .await
        .unwrap();

    assert_eq!(
        reply.response,
        "I'm really sorry to hear you are struggling. Would you like to talk about it?"
    );
    assert!(reply.error.is_some());
}

#[tokio::test]
async fn fallback_uses_last_turn_sentiment() {
    // The classifier varies per call; the fallback must key off the
    // final utterance, which is the last annotation made.
    struct AlternatingClassifier {
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl SentimentClassifier for AlternatingClassifier {
        async fn classify(&self, _text: &str) -> Result<Sentiment> {
            let n = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if n == 0 {
                Ok(Sentiment::new("LABEL_2", 0.95))
            } else {
                Ok(Sentiment::new("LABEL_0", 0.95))
            }
        }

        fn kind(&self) -> &'static str {
            "alternating"
        }
    }

    let classifier = AlternatingClassifier {
        calls: std::sync::atomic::AtomicUsize::new(0),
    };
    let llm = CannedLlm {
        reply: Err(LlmFailure::Transport("connection refused".into())),
    };

    let reply = pipeline::respond(
        &classifier,
        &llm,
        &history(&["great day", "then it all went wrong"]),
    )
    .await
    .unwrap();

    assert_eq!(
        reply.response,
        "I'm really sorry to hear you are struggling. Would you like to talk about it?"
    );
}

#[tokio::test]
async fn unreachable_llm_endpoint_yields_fallback_with_error() {
    // A real Gemini client against a port that refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cfg = solace_domain::config::LlmConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
        ..solace_domain::config::LlmConfig::default()
    };
    let llm = solace_llm::GeminiClient::new(
        &cfg,
        "test-key".into(),
        std::sync::Arc::new(solace_llm::TokioSleeper),
    )
    .unwrap();

    let classifier = FixedClassifier {
        label: "LABEL_1",
        score: 0.7,
    };

    let reply = pipeline::respond(&classifier, &llm, &history(&["just checking in"]))
        .await
        .unwrap();

    assert_eq!(reply.response, "Thank you for sharing. I'm here to listen.");
    assert!(reply.error.is_some());
}

#[tokio::test]
async fn classifier_failure_propagates() {
    struct FailingClassifier;

    #[async_trait]
    impl SentimentClassifier for FailingClassifier {
        async fn classify(&self, _text: &str) -> Result<Sentiment> {
            Err(solace_domain::Error::Classifier("model not loaded".into()))
        }

        fn kind(&self) -> &'static str {
            "failing"
        }
    }

    let llm = CannedLlm {
        reply: Ok("Therapist: hello".into()),
    };

    let result = pipeline::respond(&FailingClassifier, &llm, &history(&["hi"])).await;
    assert!(result.is_err());
}
