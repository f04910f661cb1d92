use axum::Json;
use serde::Serialize;

use crate::roadmap::catalog::ROLE_ROADMAPS;
use crate::skill_gap::catalog::ROLE_SKILLS;

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<&'static str>,
}

/// Every role with predefined content: roadmap roles first, then any
/// skill-table roles not already listed.
pub fn known_roles() -> Vec<&'static str> {
    let mut roles: Vec<&'static str> = ROLE_ROADMAPS.iter().map(|(name, _)| *name).collect();
    for (name, _) in ROLE_SKILLS {
        if !roles.contains(name) {
            roles.push(*name);
        }
    }
    roles
}

/// GET /api/roles
pub async fn handle_list_roles() -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: known_roles(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_deduplicated() {
        let roles = known_roles();
        assert_eq!(
            roles,
            vec!["Backend Developer", "Frontend Developer", "Data Analyst"]
        );
    }
}
