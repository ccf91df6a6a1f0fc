use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::answer::compose;
use crate::models::{AnswerResponse, AskRequest};
use crate::retrieval::retrieve;
use crate::state::AppState;

/// POST /ask_assistant - Answer a question from the loaded project data.
///
/// Retrieval preconditions surface as 400; everything past retrieval
/// degrades to the fallback answer rather than a 5xx.
pub async fn ask_assistant(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AnswerResponse>, (StatusCode, String)> {
    let chunks = {
        let store = state.store.read();
        retrieve(&store, &req.question, state.config.retrieval_limit)
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    };

    let _permit = state
        .ask_semaphore
        .clone()
        .acquire_owned()
        .await
        .map_err(|_| {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Assistant at capacity".to_string(),
            )
        })?;

    let answer = compose(
        &state.http_client,
        &state.config.llm,
        req.question.trim(),
        &chunks,
        &req.username,
    )
    .await;

    Ok(Json(AnswerResponse { answer }))
}
