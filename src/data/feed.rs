//! HTTP access to the national trend CSV.

use reqwest::blocking::Client;

use crate::domain::DEFAULT_FEED_URL;
use crate::error::{AppError, EXIT_NO_DATA};

const FEED_URL_ENV: &str = "COVID_FEED_URL";

/// Feed URL from `COVID_FEED_URL` (a `.env` file is honoured), falling
/// back to the public Civil Protection CSV.
pub fn feed_url_from_env() -> String {
    dotenvy::dotenv().ok();
    std::env::var(FEED_URL_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FEED_URL.to_string())
}

/// Anything that can hand back the raw feed text.
///
/// The pipeline only needs the CSV body; tests plug in canned text here.
pub trait FeedSource {
    fn fetch_csv(&self) -> Result<String, AppError>;
}

pub struct FeedClient {
    client: Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl FeedSource for FeedClient {
    fn fetch_csv(&self) -> Result<String, AppError> {
        tracing::debug!(url = %self.url, "fetching feed");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| AppError::new(EXIT_NO_DATA, format!("Feed request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                EXIT_NO_DATA,
                format!("Feed request failed with status {}.", resp.status()),
            ));
        }

        resp.text()
            .map_err(|e| AppError::new(EXIT_NO_DATA, format!("Failed to read feed body: {e}")))
    }
}

/// Canned feed for tests and offline runs.
pub struct StaticFeed(pub String);

impl FeedSource for StaticFeed {
    fn fetch_csv(&self) -> Result<String, AppError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_feed_returns_its_text() {
        let feed = StaticFeed("a,b\n".to_string());
        assert_eq!(feed.fetch_csv().unwrap(), "a,b\n");
    }

    #[test]
    fn unreachable_feed_is_a_no_data_error() {
        // Nothing listens on the discard port locally; the connect is refused.
        let client = FeedClient::new("http://127.0.0.1:9/feed.csv");
        let err = client.fetch_csv().unwrap_err();
        assert_eq!(err.exit_code(), EXIT_NO_DATA);
        assert!(err.message().starts_with("Feed request failed"));
    }
}
