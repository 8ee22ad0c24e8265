//! Readiness probe: reports which classifier backs the capability and
//! which model replies are generated with.

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn readiness(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "classifier": state.classifier.kind(),
        "model": state.config.llm.model,
    }))
}
