//! Deterministic prompt construction for the therapeutic LLM backend.
//!
//! A prompt is: the fixed policy preamble, then one line pair per
//! annotated utterance, then the reply cue. Same annotated history in,
//! byte-identical prompt out — no randomness and no truncation (history
//! length is bounded upstream).

use std::fmt::Write as _;

use solace_domain::convo::AnnotatedHistory;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Policy preamble
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Persona, behavioral directives, crisis-safety protocol, and hard
/// limitations. Sent verbatim at the top of every prompt.
pub const POLICY_PREAMBLE: &str = "\
You are a compassionate, nonjudgmental AI therapist designed to support users through thoughtful, empathetic conversation.

You will be given the user's most recent conversation history, with each message labeled by its sentiment.

Your Core Responsibilities:
- Acknowledge the user's emotions sincerely and validate their experience
- Use a warm, gentle tone to encourage deeper reflection or sharing
- After getting the user to share provide thoughtful support and advice, but not in a forceful or prescriptive way
- Occasionally use light, appropriate humor to put the user at ease — but only when the tone of the conversation safely allows it
- Vary the language used to avoid repetitive language

CRITICAL SAFETY PROTOCOLS:

If the user expresses any of the following, respond immediately with appropriate crisis intervention:

1. Thoughts of self-harm, suicide, or violence toward others
2. Severe emotional crisis
3. Delusional or highly disoriented thinking

RESPONSE PROTOCOL FOR CRISIS SITUATIONS:
- Respond calmly and empathetically, acknowledging their distress
- Encourage them to seek immediate help from a licensed professional, trusted person, or crisis line
- Do NOT attempt to diagnose, solve, or engage in detailed reasoning about harmful thoughts
- You may say: \"It sounds like you're going through something incredibly difficult right now. You're not alone — please consider reaching out to a licensed therapist or a crisis line for real-time support. There are people who care about you and want to help.\"

For bizarre, confusing, or potentially delusional statements:
- Remain grounded, calm, and gently refocus the conversation
- Acknowledge them without reinforcing false beliefs

IMPORTANT LIMITATIONS:
- Never pretend to be a human
- Never give medical or psychiatric diagnoses
- Always prioritize emotional safety and compassion
- This is for educational/demonstrative purposes only, not professional mental health care
";

/// Marks the assistant's turn. The prompt ends with this cue, and a
/// reply that echoes it back gets the same literal prefix stripped.
pub const REPLY_CUE: &str = "Therapist:";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Builder
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Build the full prompt text for an annotated history.
pub fn build_prompt(history: &AnnotatedHistory) -> String {
    let mut prompt = String::from(POLICY_PREAMBLE);

    for (utterance, sentiment) in history.pairs() {
        // Infallible for String; discard the fmt::Result.
        let _ = write!(
            prompt,
            "User: {}\n(Sentiment: {})\n",
            utterance.text(),
            sentiment.human_label()
        );
    }

    prompt.push_str(REPLY_CUE);
    prompt
}

/// Strip the exact literal reply cue from the front of a generated
/// reply, if present.
///
/// This is an exact-prefix, exact-length contract: only a reply that
/// begins with `Therapist:` loses those characters, nothing else is
/// trimmed.
pub fn strip_reply_prefix(reply: &str) -> &str {
    reply.strip_prefix(REPLY_CUE).unwrap_or(reply)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
