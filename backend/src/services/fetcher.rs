use crate::services::youtube::VideoSource;
use crate::utils::watch_url;
use anyhow::Result;
use log::error;
use std::io::Write;

// Example channel (TED)
pub const DEFAULT_CHANNEL_ID: &str = "UCsT0YIqwnpJCM-mx7-gSA4Q";
pub const LATEST_COUNT: u32 = 5;

/// Print the newest uploads of one channel as `<title> -> <watch url>` lines.
///
/// A failed request is logged and leaves `out` untouched; only write errors
/// are returned.
pub async fn print_latest<W: Write + Send>(
    source: &dyn VideoSource,
    channel_id: &str,
    out: &mut W,
) -> Result<()> {
    match source.search_recent(channel_id, LATEST_COUNT).await {
        Ok(videos) => {
            writeln!(out, "Latest {LATEST_COUNT} videos from channel:")?;
            for video in videos {
                writeln!(out, "{} -> {}", video.title, watch_url(&video.video_id))?;
            }
        }
        Err(e) => error!("Error fetching videos: {e:#}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_source::FakeSource;

    fn uploads(count: usize) -> Vec<(String, String, u64)> {
        (1..=count)
            .map(|i| (format!("vid{i}"), "PT1M".to_string(), 0))
            .collect()
    }

    fn source_with(channel_id: &str, count: usize) -> FakeSource {
        let videos = uploads(count);
        let refs: Vec<(&str, &str, u64)> = videos
            .iter()
            .map(|(id, duration, views)| (id.as_str(), duration.as_str(), *views))
            .collect();
        FakeSource::default().with_channel(channel_id, &refs)
    }

    #[tokio::test]
    async fn asks_for_five_results_of_the_given_channel() {
        let source = source_with(DEFAULT_CHANNEL_ID, 8);
        let mut out = Vec::new();

        print_latest(&source, DEFAULT_CHANNEL_ID, &mut out)
            .await
            .unwrap();

        let calls = source.search_calls.lock().unwrap();
        assert_eq!(*calls, vec![(DEFAULT_CHANNEL_ID.to_string(), 5)]);
        assert!(source.detail_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn prints_header_and_one_line_per_video() {
        let source = source_with("UC1", 8);
        let mut out = Vec::new();

        print_latest(&source, "UC1", &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Latest 5 videos from channel:\n\
             Title vid1 -> https://www.youtube.com/watch?v=vid1\n\
             Title vid2 -> https://www.youtube.com/watch?v=vid2\n\
             Title vid3 -> https://www.youtube.com/watch?v=vid3\n\
             Title vid4 -> https://www.youtube.com/watch?v=vid4\n\
             Title vid5 -> https://www.youtube.com/watch?v=vid5\n"
        );
    }

    #[tokio::test]
    async fn failed_request_prints_nothing_and_succeeds() {
        let source = source_with("UC1", 3).failing_channel("UC1");
        let mut out = Vec::new();

        let result = print_latest(&source, "UC1", &mut out).await;

        assert!(result.is_ok());
        assert!(out.is_empty());
    }
}
