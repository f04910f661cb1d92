//! Skill-gap analyzer — pure function of (role, current skills, static table).
//!
//! Skill names match case-insensitively after trimming. Results keep the
//! casing and order of the required-skills table, never the caller's.

use std::collections::HashSet;

use serde::Serialize;

use crate::skill_gap::catalog::required_skills_for;

/// How many missing skills the first recommendation names.
const MAX_NAMED_MISSING: usize = 3;

const CUSTOM_ROLE_RECOMMENDATIONS: &[&str] = &[
    "This role is not in our predefined list.",
    "Search job postings for this role to identify must-have skills.",
    "Plan learning in 3 steps: fundamentals → tools → portfolio projects.",
];

const CUSTOM_ROLE_LEARNING_ORDER: &[&str] = &[
    "1. Find required skills on LinkedIn / Naukri / Indeed.",
    "2. Learn core fundamentals before advanced tools.",
    "3. Build 2–3 portfolio projects based on real job requirements.",
    "4. Start interview prep & networking.",
];

const KNOWN_ROLE_LEARNING_ORDER: &[&str] = &[
    "1. Cover missing skills first.",
    "2. Deepen matched skills with intermediate projects.",
    "3. Build 1–2 major portfolio projects.",
    "4. Prepare interview patterns & system design.",
];

const GAP_FOLLOW_UPS: &[&str] = &[
    "Build small practice projects while learning.",
    "Then create 1–2 portfolio projects based on real jobs.",
];

const NO_GAP_RECOMMENDATIONS: &[&str] = &[
    "You cover core skills — go deeper into projects & system design.",
    "Create 2 portfolio-ready projects and polish your resume & GitHub.",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    pub target_role: String,
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub is_custom_role: bool,
    pub recommendations: Vec<String>,
    pub suggested_learning_order: Vec<String>,
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Compares `current_skills` against the role's required skills.
///
/// `target_role` must already be trimmed. Unknown roles short-circuit to the
/// fixed custom-role payload and ignore `current_skills` entirely.
pub fn analyze_skill_gap(target_role: &str, current_skills: &[String]) -> SkillGapResult {
    let Some(required) = required_skills_for(target_role) else {
        return custom_role_result(target_role);
    };

    let have: HashSet<String> = current_skills.iter().map(|s| normalize_skill(s)).collect();

    let (matched, missing): (Vec<&str>, Vec<&str>) = required
        .iter()
        .copied()
        .partition(|skill| have.contains(&skill.to_lowercase()));

    SkillGapResult {
        target_role: target_role.to_string(),
        required_skills: to_owned_list(required),
        recommendations: recommendations_for(&missing),
        matched_skills: to_owned_list(&matched),
        missing_skills: to_owned_list(&missing),
        is_custom_role: false,
        suggested_learning_order: to_owned_list(KNOWN_ROLE_LEARNING_ORDER),
    }
}

fn custom_role_result(target_role: &str) -> SkillGapResult {
    SkillGapResult {
        target_role: target_role.to_string(),
        required_skills: vec![],
        matched_skills: vec![],
        missing_skills: vec![],
        is_custom_role: true,
        recommendations: to_owned_list(CUSTOM_ROLE_RECOMMENDATIONS),
        suggested_learning_order: to_owned_list(CUSTOM_ROLE_LEARNING_ORDER),
    }
}

fn recommendations_for(missing: &[&str]) -> Vec<String> {
    if missing.is_empty() {
        return to_owned_list(NO_GAP_RECOMMENDATIONS);
    }

    let named: Vec<&str> = missing.iter().take(MAX_NAMED_MISSING).copied().collect();
    let mut recommendations = vec![format!(
        "Start with missing fundamentals: {}",
        named.join(", ")
    )];
    recommendations.extend(GAP_FOLLOW_UPS.iter().map(|s| s.to_string()));
    recommendations
}
