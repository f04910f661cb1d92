use serde::Serialize;

/// One stage of a learning roadmap. All content is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub focus_areas: &'static [&'static str],
}

pub const ROLE_ROADMAPS: &[(&str, &[RoadmapPhase])] = &[
    (
        "Backend Developer",
        &[
            RoadmapPhase {
                id: "phase-1",
                title: "Phase 1 • Foundations & Git",
                duration: "1–2 months",
                description: "Build a strong base in Java and object-oriented programming. Get comfortable with Git and basic terminal usage.",
                focus_areas: &["Java basics", "OOP", "Git", "Data structures (intro)"],
            },
            RoadmapPhase {
                id: "phase-2",
                title: "Phase 2 • APIs & Persistence",
                duration: "2 months",
                description: "Learn Spring Boot, build REST APIs, and connect them to relational databases using SQL.",
                focus_areas: &["Spring Boot", "REST APIs", "SQL", "Authentication basics"],
            },
            RoadmapPhase {
                id: "phase-3",
                title: "Phase 3 • Real Projects & Deployment",
                duration: "1–2 months",
                description: "Build 1–2 real portfolio projects, deploy them, and learn basic system design.",
                focus_areas: &["Deployment", "System design basics", "Portfolio projects"],
            },
        ],
    ),
    (
        "Frontend Developer",
        &[
            RoadmapPhase {
                id: "phase-1",
                title: "Phase 1 • Web Fundamentals",
                duration: "1–2 months",
                description: "Master HTML, modern CSS (Flexbox/Grid), and vanilla JavaScript for core web concepts.",
                focus_areas: &["HTML", "CSS", "JavaScript basics"],
            },
            RoadmapPhase {
                id: "phase-2",
                title: "Phase 2 • React & Tooling",
                duration: "2 months",
                description: "Learn React, component architecture, and basic state management. Use Git daily.",
                focus_areas: &["React", "Git", "APIs", "Routing"],
            },
            RoadmapPhase {
                id: "phase-3",
                title: "Phase 3 • UI Engineering & Projects",
                duration: "1–2 months",
                description: "Build responsive dashboards and micro frontends. Focus on performance and DX.",
                focus_areas: &["Responsive design", "Testing basics", "Portfolio projects"],
            },
        ],
    ),
    (
        "Data Analyst",
        &[
            RoadmapPhase {
                id: "phase-1",
                title: "Phase 1 • Spreadsheet & SQL Foundations",
                duration: "1–2 months",
                description: "Get comfortable with Excel/Sheets and write basic to intermediate SQL queries.",
                focus_areas: &["Excel", "SQL basics", "Data cleaning"],
            },
            RoadmapPhase {
                id: "phase-2",
                title: "Phase 2 • Python & Dashboards",
                duration: "2 months",
                description: "Use Python for analysis and build dashboards using tools like Power BI, Tableau, or similar.",
                focus_areas: &["Python", "Dashboards", "Visualization"],
            },
            RoadmapPhase {
                id: "phase-3",
                title: "Phase 3 • Case Studies & Portfolio",
                duration: "1–2 months",
                description: "Create 2–3 case-study style projects with real datasets and end-to-end storytelling.",
                focus_areas: &["Storytelling", "Statistics", "Portfolio projects"],
            },
        ],
    ),
];

/// Served for any role missing from `ROLE_ROADMAPS`. Independent of the role name.
pub const GENERIC_ROADMAP: &[RoadmapPhase] = &[
    RoadmapPhase {
        id: "phase-1",
        title: "Phase 1 • Fundamentals",
        duration: "1–2 months",
        description: "Identify core concepts for this role and cover fundamentals from official docs and beginner courses.",
        focus_areas: &["Core concepts", "Syntax & tools", "Version control"],
    },
    RoadmapPhase {
        id: "phase-2",
        title: "Phase 2 • Projects & Tooling",
        duration: "2 months",
        description: "Build 2–3 small projects that apply the fundamentals. Learn the standard tools used in the industry.",
        focus_areas: &["Projects", "Tooling", "Debugging"],
    },
    RoadmapPhase {
        id: "phase-3",
        title: "Phase 3 • Portfolio & Interviews",
        duration: "1–2 months",
        description: "Polish your portfolio, document your learnings, and prepare for role-specific interview patterns.",
        focus_areas: &["Portfolio", "Interview prep", "Networking"],
    },
];

/// Exact-match lookup; `role` is expected to be trimmed already.
pub fn lookup_roadmap(role: &str) -> Option<&'static [RoadmapPhase]> {
    ROLE_ROADMAPS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, phases)| *phases)
}

pub fn roadmap_for(role: &str) -> &'static [RoadmapPhase] {
    lookup_roadmap(role).unwrap_or(GENERIC_ROADMAP)
}
