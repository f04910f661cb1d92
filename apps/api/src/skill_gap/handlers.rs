use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::validation::normalize_target_role;
use crate::skill_gap::analyzer::{analyze_skill_gap, SkillGapResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    pub target_role: String,
    pub current_skills: Vec<String>,
}

/// POST /api/skill-gap
///
/// Matched and missing skills for a known role, or the custom-role
/// payload when the role has no required-skill list.
pub async fn handle_skill_gap(
    AppJson(request): AppJson<SkillGapRequest>,
) -> Result<Json<SkillGapResult>, AppError> {
    let target_role = normalize_target_role(&request.target_role)?;
    Ok(Json(analyze_skill_gap(target_role, &request.current_skills)))
}
