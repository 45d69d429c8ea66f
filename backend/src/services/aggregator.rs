use crate::models::{Channel, SearchResult, VideoDetail, VideoRecord};
use crate::services::channel_service::load_channels;
use crate::services::video_service::write_videos;
use crate::services::youtube::VideoSource;
use crate::utils::parse_iso8601_duration_to_seconds;
use anyhow::Result;
use log::{error, info, warn};
use std::path::Path;

/// How many recent uploads are considered per channel.
pub const SEARCH_MAX_RESULTS: u32 = 10;
/// Shorter videos (shorts, trailers) are dropped.
pub const MIN_DURATION_SECONDS: u64 = 240;
pub const MAX_VIDEOS_PER_CHANNEL: usize = 3;

/// Filter the detail records and join the survivors with their search snippets.
///
/// Order follows `details`; no re-sorting happens before the per-channel cap.
pub fn select_videos(
    channel: &Channel,
    results: &[SearchResult],
    details: &[VideoDetail],
) -> Vec<VideoRecord> {
    details
        .iter()
        .filter(|detail| match parse_iso8601_duration_to_seconds(&detail.iso_duration) {
            Some(seconds) => seconds >= MIN_DURATION_SECONDS,
            None => {
                warn!(
                    "Skipping video {} with unsupported duration {:?}",
                    detail.video_id, detail.iso_duration
                );
                false
            }
        })
        .take(MAX_VIDEOS_PER_CHANNEL)
        .filter_map(|detail| {
            let snippet = results.iter().find(|r| r.video_id == detail.video_id);
            if snippet.is_none() {
                warn!(
                    "No search snippet for video {} of {}",
                    detail.video_id, channel.name
                );
            }
            snippet.map(|snippet| VideoRecord::from_parts(channel, snippet, detail))
        })
        .collect()
}

pub async fn fetch_channel_videos(
    source: &dyn VideoSource,
    channel: &Channel,
) -> Result<Vec<VideoRecord>> {
    let results = source
        .search_recent(&channel.channel_id, SEARCH_MAX_RESULTS)
        .await?;

    let video_ids: Vec<String> = results.iter().map(|r| r.video_id.clone()).collect();
    let details = source.video_details(&video_ids).await?;

    Ok(select_videos(channel, &results, &details))
}

/// Query every channel in order. A failing channel contributes nothing.
pub async fn aggregate_channels(source: &dyn VideoSource, channels: &[Channel]) -> Vec<VideoRecord> {
    let mut all_videos = Vec::new();

    for channel in channels {
        info!("Fetching videos from: {}", channel.name);
        match fetch_channel_videos(source, channel).await {
            Ok(videos) => {
                info!("Kept {} videos from {}", videos.len(), channel.name);
                all_videos.extend(videos);
            }
            Err(e) => {
                error!("Error fetching {}: {e:#}", channel.name);
            }
        }
    }

    all_videos
}

/// Load the channel list, aggregate and write the artifact.
/// Returns the number of records written.
pub async fn run_aggregation(
    source: &dyn VideoSource,
    channels_file: &Path,
    output_file: &Path,
) -> Result<usize> {
    let channels = load_channels(channels_file)?;
    let videos = aggregate_channels(source, &channels).await;

    write_videos(output_file, &videos)?;
    info!("Saved all videos to {}", output_file.display());

    Ok(videos.len())
}
