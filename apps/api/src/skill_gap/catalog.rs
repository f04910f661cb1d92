/// Required skills per known role, in the order they are reported.
/// Kept separate from the roadmap table; the two need not list the same roles.
pub const ROLE_SKILLS: &[(&str, &[&str])] = &[
    (
        "Frontend Developer",
        &["HTML", "CSS", "JavaScript", "React", "Git"],
    ),
    (
        "Backend Developer",
        &["Java", "Spring Boot", "SQL", "APIs", "Git"],
    ),
    (
        "Data Analyst",
        &["Excel", "SQL", "Python", "Dashboards", "Statistics"],
    ),
];

/// Exact-match lookup; `role` is expected to be trimmed already.
pub fn required_skills_for(role: &str) -> Option<&'static [&'static str]> {
    ROLE_SKILLS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, skills)| *skills)
        .filter(|skills| !skills.is_empty())
}
