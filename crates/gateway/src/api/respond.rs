//! The `/speech-to-speech` endpoint: conversation history in,
//! therapeutic reply out.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};
use solace_domain::convo::Utterance;

use crate::runtime::pipeline;
use crate::state::AppState;

/// Handle one conversation turn.
///
/// Validation happens here rather than via a typed extractor so the
/// error bodies stay stable: a non-JSON request gets
/// `{"error": "Request must be JSON"}`, a missing or malformed history
/// gets `{"error": "No valid history provided"}`, both as 400s.
pub async fn speech_to_speech(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = payload else {
        return bad_request("Request must be JSON");
    };

    let Some(history) = parse_history(&body) else {
        return bad_request("No valid history provided");
    };

    match pipeline::respond(state.classifier.as_ref(), state.llm.as_ref(), &history).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "pipeline failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// Accept `history` only as a non-empty array of non-empty strings.
fn parse_history(body: &Value) -> Option<Vec<Utterance>> {
    let items = body.get("history")?.as_array()?;
    if items.is_empty() {
        return None;
    }
    let mut history = Vec::with_capacity(items.len());
    for item in items {
        let text = item.as_str()?;
        if text.is_empty() {
            return None;
        }
        history.push(Utterance::from(text));
    }
    Some(history)
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_of_strings_parses() {
        let body = json!({ "history": ["I feel sad", "but better now"] });
        let history = parse_history(&body).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].text(), "I feel sad");
    }

    #[test]
    fn missing_history_is_rejected() {
        assert!(parse_history(&json!({})).is_none());
    }

    #[test]
    fn empty_history_is_rejected() {
        assert!(parse_history(&json!({ "history": [] })).is_none());
    }

    #[test]
    fn non_string_entry_is_rejected() {
        assert!(parse_history(&json!({ "history": ["hi", 42] })).is_none());
    }

    #[test]
    fn empty_string_entry_is_rejected() {
        assert!(parse_history(&json!({ "history": ["hi", ""] })).is_none());
    }

    #[test]
    fn history_must_be_an_array() {
        assert!(parse_history(&json!({ "history": "hi" })).is_none());
    }
}
