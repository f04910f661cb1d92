//! Feed assembly — pluggable story source plus the fan-out/filter/project pass.
//!
//! `AppState` holds an `Arc<dyn StorySource>`; `HnClient` is the production
//! backend, tests swap in an in-memory source.

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::hn_client::{HnClient, HnError, HnItem};

/// How many ids from the head of the top-stories list are inspected.
pub const SCAN_LIMIT: usize = 20;
/// How many stories a feed response carries at most.
pub const RESULT_LIMIT: usize = 5;

const STORY_TYPE: &str = "story";

// ────────────────────────────────────────────────────────────────────────────
// Source trait
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait StorySource: Send + Sync {
    async fn top_story_ids(&self) -> Result<Vec<u64>, HnError>;

    /// `Ok(None)` for ids the upstream no longer resolves (deleted items).
    async fn item(&self, id: u64) -> Result<Option<HnItem>, HnError>;
}

#[async_trait]
impl StorySource for HnClient {
    async fn top_story_ids(&self) -> Result<Vec<u64>, HnError> {
        HnClient::top_story_ids(self).await
    }

    async fn item(&self, id: u64) -> Result<Option<HnItem>, HnError> {
        HnClient::item(self, id).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output shape
// ────────────────────────────────────────────────────────────────────────────

/// Fixed projection of an upstream story. `url` is always present (null for
/// text posts); `title`, `time` and `by` are omitted when upstream lacks them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: Option<String>,
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
}

impl NewsItem {
    /// Projects an upstream record, or `None` when it is not a story.
    pub fn from_story(item: HnItem) -> Option<Self> {
        let item_type = item.item_type.filter(|t| t == STORY_TYPE)?;
        Some(NewsItem {
            id: item.id,
            title: item.title,
            url: item.url.filter(|u| !u.is_empty()),
            score: item.score.unwrap_or(0),
            time: item.time,
            item_type,
            by: item.by,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fan-out
// ────────────────────────────────────────────────────────────────────────────

/// Fetches the head of the top-stories list and returns the first
/// `RESULT_LIMIT` records of type "story", in list order.
///
/// Item fetches run concurrently, at most `concurrency` at a time, and are
/// joined all-or-nothing: the first failure fails the whole batch.
pub async fn collect_top_stories(
    source: &dyn StorySource,
    concurrency: usize,
) -> Result<Vec<NewsItem>, HnError> {
    let ids = source.top_story_ids().await?;
    let scanned: Vec<u64> = ids.into_iter().take(SCAN_LIMIT).collect();

    let permits = Semaphore::new(concurrency.max(1));
    let fetches = scanned.iter().map(|&id| {
        let permits = &permits;
        async move {
            // the semaphore is never closed, so acquire cannot fail
            let _permit = permits.acquire().await;
            source.item(id).await
        }
    });
    let items = try_join_all(fetches).await?;

    let stories: Vec<NewsItem> = items
        .into_iter()
        .flatten()
        .filter_map(NewsItem::from_story)
        .take(RESULT_LIMIT)
        .collect();

    debug!(
        "News feed: scanned {} ids, returning {} stories",
        scanned.len(),
        stories.len()
    );
    Ok(stories)
}
