//! YouTube Data API client.
//!
//! One request shape against one endpoint: the most recent uploads of the
//! CS50 channel, ordered by date, `maxResults` taken from the caller.

mod model;

pub use model::Video;

use crate::error::{Result, SisteError};
use model::SearchResponse;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Channel ID of the official CS50 YouTube channel.
pub const CS50_CHANNEL_ID: &str = "UCcabW7890RKJzL968QWEykA";

/// Fixed search endpoint of the YouTube Data API v3.
const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// Default timeout for YouTube API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the YouTube Data API search endpoint.
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    channel_id: String,
    endpoint: String,
}

impl YouTubeClient {
    /// Create a new client for the CS50 channel.
    ///
    /// The key is used as-is; an empty key produces an upstream
    /// authentication error rather than a local one.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_key: api_key.into(),
            channel_id: CS50_CHANNEL_ID.to_string(),
            endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }

    /// Override the endpoint base URL (used by tests to point at a local server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the search request URL.
    ///
    /// `limit` is forwarded verbatim as `maxResults`; out-of-range values are
    /// left to the upstream API to reject.
    fn search_url(&self, limit: i64) -> Result<Url> {
        let limit = limit.to_string();
        let url = Url::parse_with_params(
            &self.endpoint,
            [
                ("key", self.api_key.as_str()),
                ("channelId", self.channel_id.as_str()),
                ("part", "snippet"),
                ("order", "date"),
                ("maxResults", limit.as_str()),
            ],
        )?;
        Ok(url)
    }

    /// Fetch the latest uploads, newest first (the API's own ordering).
    ///
    /// Issues a single GET with no retries. A missing `items` array or a
    /// missing `snippet.title` is a decode error; a missing `id.videoId`
    /// defaults to the empty string.
    pub async fn latest_videos(&self, limit: i64) -> Result<Vec<Video>> {
        let url = self.search_url(limit)?;

        debug!("Requesting latest uploads (maxResults={})", limit);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SisteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;

        debug!("Received {} search results", body.items.len());

        Ok(body.items.into_iter().map(Video::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_query_parameters() {
        let client = YouTubeClient::new("secret");
        let url = client.search_url(7).unwrap();

        assert_eq!(url.host_str(), Some("www.googleapis.com"));
        assert_eq!(url.path(), "/youtube/v3/search");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(pairs.contains(&("key".to_string(), "secret".to_string())));
        assert!(pairs.contains(&("channelId".to_string(), CS50_CHANNEL_ID.to_string())));
        assert!(pairs.contains(&("part".to_string(), "snippet".to_string())));
        assert!(pairs.contains(&("order".to_string(), "date".to_string())));
        assert!(pairs.contains(&("maxResults".to_string(), "7".to_string())));
    }

    #[test]
    fn test_search_url_limit_passed_through_verbatim() {
        let client = YouTubeClient::new("secret");

        // No clamping: non-positive and oversized values reach the API as-is.
        let url = client.search_url(-3).unwrap();
        assert!(url.query().unwrap().contains("maxResults=-3"));

        let url = client.search_url(100_000).unwrap();
        assert!(url.query().unwrap().contains("maxResults=100000"));
    }

    #[tokio::test]
    async fn test_latest_videos_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "items": [
                        {"id": {"videoId": "abc123def45"}, "snippet": {"title": "Lecture 0"}},
                        {"id": {"videoId": "xyz789ghi01"}, "snippet": {"title": "Lecture 1"}}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = YouTubeClient::new("key").with_endpoint(server.url());
        let videos = client.latest_videos(2).await.unwrap();

        mock.assert_async().await;
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "Lecture 0");
        assert_eq!(videos[0].video_id, "abc123def45");
        assert_eq!(videos[1].title, "Lecture 1");
    }

    #[tokio::test]
    async fn test_latest_videos_non_2xx_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .with_body("API key not valid")
            .create_async()
            .await;

        let client = YouTubeClient::new("bad-key").with_endpoint(server.url());
        let err = client.latest_videos(5).await.unwrap_err();

        match err {
            SisteError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("API key not valid"));
            }
            other => panic!("expected Api error, got: {}", other),
        }
    }

    #[tokio::test]
    async fn test_latest_videos_missing_items_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"kind": "youtube#searchListResponse"}"#)
            .create_async()
            .await;

        let client = YouTubeClient::new("key").with_endpoint(server.url());
        assert!(client.latest_videos(5).await.is_err());
    }
}
