use anyhow::{ensure, Context, Result};

const DEFAULT_HN_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparseable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub hn_api_base_url: String,
    pub hn_request_timeout_secs: u64,
    /// Upper bound on in-flight item fetches for the news feed.
    pub news_fetch_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let news_fetch_concurrency = env_or("NEWS_FETCH_CONCURRENCY", "20")
            .parse::<usize>()
            .context("NEWS_FETCH_CONCURRENCY must be a positive integer")?;
        ensure!(
            news_fetch_concurrency >= 1,
            "NEWS_FETCH_CONCURRENCY must be at least 1"
        );

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            hn_api_base_url: env_or("HN_API_BASE_URL", DEFAULT_HN_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            hn_request_timeout_secs: env_or("HN_REQUEST_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("HN_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            news_fetch_concurrency,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            hn_api_base_url: DEFAULT_HN_API_BASE_URL.to_string(),
            hn_request_timeout_secs: 30,
            news_fetch_concurrency: 20,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
