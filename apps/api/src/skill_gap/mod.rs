// Skill-gap analysis against a static role → required-skills table.

pub mod analyzer;
pub mod catalog;
pub mod handlers;
