use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::skills::{SkillExtractor, SkillSet};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: SkillSet,
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(req): Json<ExtractSkillsRequest>,
) -> Json<ExtractSkillsResponse> {
    let extractor = SkillExtractor::new(state.config.skill_match_mode);
    Json(ExtractSkillsResponse {
        skills: extractor.extract(&req.text),
    })
}
