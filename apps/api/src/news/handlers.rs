use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::news::feed::{collect_top_stories, NewsItem};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub items: Vec<NewsItem>,
}

/// GET /api/news
///
/// Up to five current top stories. Any upstream failure fails the whole
/// request; partial batches are never returned.
pub async fn handle_news(State(state): State<AppState>) -> Result<Json<NewsResponse>, AppError> {
    let items =
        collect_top_stories(state.stories.as_ref(), state.config.news_fetch_concurrency).await?;
    Ok(Json(NewsResponse { items }))
}
