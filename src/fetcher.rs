//! The fetch operation: request, render, never fail.

use crate::report::{render_failure, render_report};
use crate::youtube::YouTubeClient;
use tracing::error;

/// Fetches the latest CS50 videos and renders them as a report string.
///
/// Errors do not propagate: any failure is logged and collapsed into a
/// warning-marker string, so the caller always gets printable text. The
/// categories (URL, transport, upstream status, decode) stay distinct in
/// the logs via [`crate::SisteError`].
pub struct VideoListFetcher {
    client: YouTubeClient,
}

impl VideoListFetcher {
    /// Create a fetcher around an already-configured client.
    pub fn new(client: YouTubeClient) -> Self {
        Self { client }
    }

    /// Run one lookup. `limit` is forwarded verbatim to the API.
    pub async fn fetch(&self, limit: i64) -> String {
        match self.client.latest_videos(limit).await {
            Ok(videos) => render_report(&videos),
            Err(e) => {
                error!("Failed to fetch CS50 videos: {}", e);
                render_failure(&e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::WARNING_MARKER;

    fn fetcher_for(endpoint: String) -> VideoListFetcher {
        VideoListFetcher::new(YouTubeClient::new("key").with_endpoint(endpoint))
    }

    #[tokio::test]
    async fn test_fetch_renders_report_on_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items": [{"id": {"videoId": "abc123def45"},
                    "snippet": {"title": "Lecture 0"}}]}"#,
            )
            .create_async()
            .await;

        let report = fetcher_for(server.url()).fetch(1).await;

        assert!(report.starts_with("🎓 **CS50 Latest Videos:**"));
        assert!(report.contains("1. Lecture 0"));
        assert!(report.contains("https://www.youtube.com/watch?v=abc123def45"));
    }

    #[tokio::test]
    async fn test_fetch_returns_warning_string_on_connection_failure() {
        // Nothing listens here; the connection is refused immediately.
        let report = fetcher_for("http://127.0.0.1:1".to_string()).fetch(5).await;

        assert!(report.starts_with(WARNING_MARKER));
        assert!(report.contains("Failed to fetch CS50 videos:"));
    }

    #[tokio::test]
    async fn test_fetch_returns_warning_string_on_missing_items() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"kind": "youtube#searchListResponse"}"#)
            .create_async()
            .await;

        let report = fetcher_for(server.url()).fetch(5).await;
        assert!(report.starts_with(WARNING_MARKER));
    }

    #[tokio::test]
    async fn test_fetch_returns_warning_string_on_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .with_body("API key not valid")
            .create_async()
            .await;

        let report = fetcher_for(server.url()).fetch(5).await;
        assert!(report.starts_with(WARNING_MARKER));
        assert!(report.contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_concurrent_fetches_do_not_interfere() {
        let mut server_a = mockito::Server::new_async().await;
        server_a
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"items": [{"id": {"videoId": "aaa"}, "snippet": {"title": "A"}}]}"#)
            .create_async()
            .await;

        let mut server_b = mockito::Server::new_async().await;
        server_b
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items": [
                    {"id": {"videoId": "bbb"}, "snippet": {"title": "B1"}},
                    {"id": {"videoId": "ccc"}, "snippet": {"title": "B2"}}
                ]}"#,
            )
            .create_async()
            .await;

        let fetcher_a = fetcher_for(server_a.url());
        let fetcher_b = fetcher_for(server_b.url());

        let (report_a, report_b) = tokio::join!(fetcher_a.fetch(1), fetcher_b.fetch(2));

        assert!(report_a.contains("1. A"));
        assert!(!report_a.contains("B1"));
        assert!(report_b.contains("1. B1"));
        assert!(report_b.contains("2. B2"));
        assert!(!report_b.contains("1. A"));
    }
}
