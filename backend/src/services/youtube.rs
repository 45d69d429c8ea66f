use crate::models::{SearchResult, VideoDetail};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Source of channel uploads and per-video details.
///
/// Both the single-channel fetcher and the aggregator go through
/// `search_recent`; they only differ in how many results they ask for.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Most recent videos of a channel, newest first.
    async fn search_recent(&self, channel_id: &str, max_results: u32) -> Result<Vec<SearchResult>>;

    /// Duration and view count for a batch of video IDs.
    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>>;
}

pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        YouTubeClient {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    // Documentation: https://developers.google.com/youtube/v3/docs/search/list
    pub fn search_url(&self, channel_id: &str, max_results: u32) -> Result<Url> {
        let max_results = max_results.to_string();
        Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[
                ("part", "snippet"),
                ("channelId", channel_id),
                ("type", "video"),
                ("order", "date"),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ],
        )
        .context("Failed to build search URL")
    }

    // Documentation: https://developers.google.com/youtube/v3/docs/videos/list
    pub fn videos_url(&self, video_ids: &[String]) -> Result<Url> {
        let ids = video_ids.join(",");
        Url::parse_with_params(
            &format!("{}/videos", self.base_url),
            &[
                ("part", "contentDetails,statistics"),
                ("id", ids.as_str()),
                ("key", self.api_key.as_str()),
            ],
        )
        .context("Failed to build videos URL")
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let endpoint = url.path().to_string();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "YouTube API request to {endpoint} failed with status {status}: {body}"
            ));
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Malformed response from {endpoint}"))
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn search_recent(&self, channel_id: &str, max_results: u32) -> Result<Vec<SearchResult>> {
        let url = self.search_url(channel_id, max_results)?;
        let response: SearchListResponse = self.get_json(url).await?;
        let results = response.into_results();
        debug!("Search for {channel_id} returned {} videos", results.len());
        Ok(results)
    }

    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.videos_url(video_ids)?;
        let response: VideoListResponse = self.get_json(url).await?;
        Ok(response.into_details())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    title: String,
    #[serde(default)]
    description: String,
    published_at: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    default: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl Thumbnails {
    fn best_url(self) -> String {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|t| t.url)
            .unwrap_or_default()
    }
}

impl SearchListResponse {
    pub fn into_results(self) -> Vec<SearchResult> {
        self.items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(SearchResult {
                    video_id,
                    title: item.snippet.title,
                    description: item.snippet.description,
                    published_at: item.snippet.published_at,
                    thumbnail_url: item.snippet.thumbnails.best_url(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}

// The API encodes counters as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
}

impl VideoListResponse {
    pub fn into_details(self) -> Vec<VideoDetail> {
        self.items
            .into_iter()
            .map(|item| VideoDetail {
                video_id: item.id,
                iso_duration: item.content_details.duration,
                view_count: item
                    .statistics
                    .view_count
                    .as_deref()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0),
            })
            .collect()
    }
}
