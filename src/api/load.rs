use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::LoadError;
use crate::github::GithubClient;
use crate::loader::load_projects;
use crate::models::{LoadRequest, LoadResponse};
use crate::state::AppState;

/// POST /load_github_projects - Rebuild the chunk store from a user's
/// repository READMEs.
pub async fn load_github_projects(
    State(state): State<AppState>,
    Json(req): Json<LoadRequest>,
) -> Result<Json<LoadResponse>, (StatusCode, String)> {
    let username = req.username.trim().to_string();
    if username.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Username is required".to_string()));
    }

    // One load at a time: the store has a single writer, and overlapping
    // sequential fetch loops would defeat the pacing budget anyway.
    let _guard = state.load_lock.lock().await;

    let forge = GithubClient::new(state.http_client.clone(), state.config.github.clone());
    let pacing = Duration::from_millis(state.config.github.pacing_delay_ms);

    let count = load_projects(
        &forge,
        &state.store,
        &username,
        state.config.chunk_size,
        pacing,
    )
    .await
    .map_err(load_error_response)?;

    Ok(Json(LoadResponse {
        message: format!("Successfully loaded data for {count} projects"),
        projects_count: count,
    }))
}

fn load_error_response(err: LoadError) -> (StatusCode, String) {
    let status = match &err {
        LoadError::UserNotFound(_) | LoadError::NoContent => StatusCode::NOT_FOUND,
        LoadError::RateLimited => StatusCode::FORBIDDEN,
        // Pass the upstream status through when there is one.
        LoadError::Upstream { status, .. } => status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    };
    (status, err.to_string())
}
