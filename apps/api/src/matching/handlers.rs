use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::{match_pair, ScoredMatch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<ScoredMatch>, AppError> {
    let mode = state.config.skill_match_mode;
    let result = tokio::task::spawn_blocking(move || {
        match_pair(&req.job_description, &req.resume_text, mode)
    })
    .await
    .map_err(|e| anyhow::anyhow!("matching task failed: {e}"))??;
    Ok(Json(result.into()))
}
