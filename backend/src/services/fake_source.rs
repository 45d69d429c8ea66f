use crate::models::{SearchResult, VideoDetail};
use crate::services::youtube::VideoSource;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory `VideoSource` for tests.
#[derive(Default)]
pub struct FakeSource {
    pub searches: HashMap<String, Vec<SearchResult>>,
    pub details: HashMap<String, VideoDetail>,
    pub failing_channels: Vec<String>,
    pub failing_details: bool,
    pub search_calls: Mutex<Vec<(String, u32)>>,
    pub detail_calls: Mutex<Vec<Vec<String>>>,
}

impl FakeSource {
    /// Register a channel's uploads as `(video_id, iso_duration, views)`, newest first.
    pub fn with_channel(mut self, channel_id: &str, videos: &[(&str, &str, u64)]) -> Self {
        let results = videos
            .iter()
            .map(|(id, _, _)| snippet(id))
            .collect::<Vec<_>>();
        self.searches.insert(channel_id.to_string(), results);
        for (id, duration, views) in videos {
            self.details.insert(
                id.to_string(),
                VideoDetail {
                    video_id: id.to_string(),
                    iso_duration: duration.to_string(),
                    view_count: *views,
                },
            );
        }
        self
    }

    pub fn failing_channel(mut self, channel_id: &str) -> Self {
        self.failing_channels.push(channel_id.to_string());
        self
    }
}

#[async_trait]
impl VideoSource for FakeSource {
    async fn search_recent(&self, channel_id: &str, max_results: u32) -> Result<Vec<SearchResult>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((channel_id.to_string(), max_results));
        if self.failing_channels.iter().any(|c| c == channel_id) {
            return Err(anyhow::anyhow!("quotaExceeded"));
        }
        Ok(self
            .searches
            .get(channel_id)
            .map(|r| r.iter().take(max_results as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>> {
        self.detail_calls.lock().unwrap().push(video_ids.to_vec());
        if self.failing_details {
            return Err(anyhow::anyhow!("connection reset"));
        }
        Ok(video_ids
            .iter()
            .filter_map(|id| self.details.get(id).cloned())
            .collect())
    }
}

pub fn snippet(video_id: &str) -> SearchResult {
    SearchResult {
        video_id: video_id.to_string(),
        title: format!("Title {video_id}"),
        description: format!("Description {video_id}"),
        published_at: "2024-06-01T00:00:00Z".to_string(),
        thumbnail_url: format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg"),
    }
}
