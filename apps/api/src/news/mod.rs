// News feed: top HackerNews stories, re-fetched on every request.

pub mod feed;
pub mod handlers;

pub use feed::StorySource;
