use std::sync::Arc;

use crate::config::Config;
use crate::news::StorySource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where the news feed reads stories from. `HnClient` in production.
    pub stories: Arc<dyn StorySource>,
}
