pub mod readiness;
pub mod respond;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router.
///
/// No auth layer: the gateway is a single-user demo service and
/// authentication is explicitly out of scope.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/speech-to-speech", post(respond::speech_to_speech))
        .route("/v1/readiness", get(readiness::readiness))
}
