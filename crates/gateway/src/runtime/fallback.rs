//! Rule-based fallback replies, used only when the LLM client fails.
//!
//! A pure function of the last utterance's sentiment: no network, no
//! state, cannot fail. The confidence check runs first, so a shaky
//! classification always asks for elaboration regardless of label.

use solace_domain::convo::Sentiment;

const ASK_ELABORATE: &str =
    "I'm not sure exactly how you're feeling, could you elaborate?";
const NEGATIVE_STRONG: &str =
    "I'm really sorry to hear you are struggling. Would you like to talk about it?";
const NEGATIVE_GENTLE: &str = "It sounds like something is bothering you? Want to talk about it?";
const NEUTRAL_ACK: &str = "Thank you for sharing. I'm here to listen.";
const POSITIVE_STRONG: &str = "That's great to hear!";
const POSITIVE_MILD: &str = "It seems you are feeling pretty good. Tell me more!";

/// Pick a canned reply from the sentiment decision tree.
///
/// Unrecognized label codes take the positive branches, matching the
/// tree's final `else` arm.
pub fn fallback_reply(sentiment: &Sentiment) -> &'static str {
    if sentiment.score < 0.5 {
        return ASK_ELABORATE;
    }
    if sentiment.is_negative() {
        if sentiment.score > 0.8 {
            NEGATIVE_STRONG
        } else {
            NEGATIVE_GENTLE
        }
    } else if sentiment.is_neutral() {
        NEUTRAL_ACK
    } else if sentiment.score > 0.8 {
        POSITIVE_STRONG
    } else {
        POSITIVE_MILD
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
