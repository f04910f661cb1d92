use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::roadmap::catalog::{roadmap_for, RoadmapPhase};
use crate::validation::normalize_target_role;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub target_role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    pub target_role: String,
    pub phases: &'static [RoadmapPhase],
}

/// POST /api/roadmap
///
/// Echoes the trimmed role back with its phase list, or the generic
/// three-phase roadmap when the role is not in the table.
pub async fn handle_roadmap(
    AppJson(request): AppJson<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let target_role = normalize_target_role(&request.target_role)?;
    let phases = roadmap_for(target_role);

    Ok(Json(RoadmapResponse {
        target_role: target_role.to_string(),
        phases,
    }))
}
