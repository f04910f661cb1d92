pub mod health;
pub mod roles;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::news::handlers::handle_news;
use crate::roadmap::handlers::handle_roadmap;
use crate::skill_gap::handlers::handle_skill_gap;
use crate::state::AppState;

/// Any verb not registered on an API route.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/roles",
            get(roles::handle_list_roles).fallback(method_not_allowed),
        )
        .route("/api/news", get(handle_news).fallback(method_not_allowed))
        .route(
            "/api/roadmap",
            post(handle_roadmap).fallback(method_not_allowed),
        )
        .route(
            "/api/skill-gap",
            post(handle_skill_gap).fallback(method_not_allowed),
        )
        .with_state(state)
}
