//! Wire model for the YouTube search response.

use serde::Deserialize;

/// Prefix of a public watch URL.
const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Top-level search response. `items` is required; a response without it
/// (e.g. an error payload that slipped through with a 200) fails to decode.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub items: Vec<SearchItem>,
}

/// One search result.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: ResourceId,
    pub snippet: Snippet,
}

/// The `id` object of a search result. `videoId` is absent for channel and
/// playlist results, so it defaults to empty rather than failing.
#[derive(Debug, Deserialize)]
pub(crate) struct ResourceId {
    #[serde(rename = "videoId", default)]
    pub video_id: String,
}

/// Summary metadata of a search result. The title is required.
#[derive(Debug, Deserialize)]
pub(crate) struct Snippet {
    pub title: String,
}

/// A single video entry: title plus the id used to build its watch URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub title: String,
    pub video_id: String,
}

impl Video {
    /// Public watch URL for this video.
    ///
    /// An empty id yields the bare prefix. That URL is malformed but the
    /// rendering stays well-defined.
    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL_PREFIX, self.video_id)
    }
}

impl From<SearchItem> for Video {
    fn from(item: SearchItem) -> Self {
        Self {
            title: item.snippet.title,
            video_id: item.id.video_id,
        }
    }
}
