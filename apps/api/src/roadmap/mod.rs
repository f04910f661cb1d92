// Learning roadmaps: a static role → phases table with a generic fallback.

pub mod catalog;
pub mod handlers;
